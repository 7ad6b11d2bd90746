use simple_brain::plot::plot_comparison::plot_comparison;
use simple_brain::prelude::*;

use ndarray_rand::rand_distr::Normal;
use std::f64::consts::PI;
use std::time::Instant;

fn main() -> Result<()> {
    println!("=== Fast Neural Network Runner ===");
    println!("Task: Learning a non-linear pattern (Sine Wave with Noise)");

    // One period of a noisy sine wave, one sample per row
    let n = 100;
    let x_vec: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64 * 2.0 * PI).collect();
    let x = Array2::from_shape_vec((n, 1), x_vec.clone()).unwrap();

    let mut rng = rand::thread_rng();
    let noise = Array2::random_using((n, 1), Normal::new(0.0, 0.1).unwrap(), &mut rng);
    let y = x.mapv(f64::sin) + noise;

    // Squeeze inputs and targets into the sigmoid's (0, 1) range
    let mut x_norm = x.clone();
    x_norm.to_unity(0.0, 2.0 * PI);
    let mut y_norm = y.clone();
    y_norm.to_unity(-1.5, 1.5);

    let mut brain = FeedforwardNetwork::new(1, 10, 1)?;
    brain.summary();

    let start = Instant::now();
    println!("Training...");
    brain.train(&x_norm, &y_norm, 50_000, 0.1)?;
    println!(
        "\nTraining completed in {:.2} seconds.",
        start.elapsed().as_secs_f64()
    );

    // Predict and map back to the sine's range for plotting
    let mut predictions = brain.forward(&x_norm)?;
    predictions.from_unity(-1.5, 1.5);

    let targets: Vec<f64> = x_vec.iter().map(|&x| x.sin()).collect();
    plot_comparison(
        &x_vec,
        &targets,
        predictions.as_slice().unwrap(),
        "nn_result.png",
    )
    .unwrap();

    brain.save("./sine.model")?;

    Ok(())
}
