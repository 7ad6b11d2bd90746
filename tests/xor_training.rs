use ndarray::{array, Array2};
use simple_brain::{mean_squared_error, FeedforwardNetwork};

fn xor_data() -> (Array2<f64>, Array2<f64>) {
    let x = array![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    let y = array![[0.0], [1.0], [1.0], [0.0]];
    (x, y)
}

#[test]
fn learns_xor() {
    let (x, y) = xor_data();
    let mut brain = FeedforwardNetwork::from_seed(2, 8, 1, 42).unwrap();

    brain
        .train_with_monitor(&x, &y, 20_000, 0.5, |_, _| {})
        .unwrap();

    let predictions = brain.forward(&x).unwrap();
    let loss = mean_squared_error(&y, &predictions);
    assert!(loss < 0.05, "loss {} still above 0.05 after training", loss);

    // Each prediction rounds to its target class
    for (&p, &t) in predictions.iter().zip(y.iter()) {
        assert_eq!(p.round(), t, "prediction {} misclassified target {}", p, t);
    }
}

#[test]
fn monitor_fires_every_thousand_epochs_starting_at_zero() {
    let (x, y) = xor_data();
    let mut brain = FeedforwardNetwork::from_seed(2, 4, 1, 1).unwrap();

    let mut seen = Vec::new();
    brain
        .train_with_monitor(&x, &y, 2_500, 0.5, |epoch, _| seen.push(epoch))
        .unwrap();

    // 2500 epochs land three reports; the tail epoch does not force one
    assert_eq!(seen, vec![0, 1000, 2000]);
}

#[test]
fn loss_reported_first_then_trends_down() {
    let (x, y) = xor_data();
    let mut brain = FeedforwardNetwork::from_seed(2, 8, 1, 42).unwrap();

    let mut losses = Vec::new();
    brain
        .train_with_monitor(&x, &y, 20_000, 0.5, |_, loss| losses.push(loss))
        .unwrap();

    assert_eq!(losses.len(), 20);
    let first = losses.first().copied().unwrap();
    let last = losses.last().copied().unwrap();
    assert!(
        last < first,
        "loss went from {} to {} without improving",
        first,
        last
    );
}
