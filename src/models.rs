use crate::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{Read, Write};

/// Scale applied to the standard-normal weight init; keeps early
/// pre-activations small so the sigmoids start away from saturation.
const WEIGHT_SCALE: f64 = 0.01;

/// Loss reporting cadence, in epochs. Epoch 0 always reports; the final
/// epoch reports only if it happens to land on the boundary.
const REPORT_EVERY: usize = 1000;

/// Per-forward-pass activations, overwritten on every call and consumed by
/// the gradient step of the same training iteration.
#[derive(Debug, Clone)]
#[allow(dead_code)] // the backward pass reads only a1 and a2
struct ForwardCache {
    z1: Array2<f64>,
    a1: Array2<f64>,
    z2: Array2<f64>,
    a2: Array2<f64>,
}

/// Fully-connected network with a single sigmoid hidden layer and a sigmoid
/// output layer, trained by full-batch gradient descent on mean-squared
/// error. The backward pass is hand-derived for exactly this
/// sigmoid/MSE combination.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FeedforwardNetwork {
    pub w1: Array2<f64>,
    pub b1: Array2<f64>,
    pub w2: Array2<f64>,
    pub b2: Array2<f64>,
    #[serde(skip)]
    cache: Option<ForwardCache>,
}

impl FeedforwardNetwork {
    /// Entropy-seeded construction. Weights are standard-normal scaled by
    /// 0.01, biases start at zero.
    pub fn new(input_dim: usize, hidden_dim: usize, output_dim: usize) -> Result<Self> {
        Self::with_rng(input_dim, hidden_dim, output_dim, &mut rand::thread_rng())
    }

    /// Deterministic construction from a seed; two networks built from the
    /// same seed and dimensions are parameter-for-parameter identical.
    pub fn from_seed(
        input_dim: usize,
        hidden_dim: usize,
        output_dim: usize,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(input_dim, hidden_dim, output_dim, &mut StdRng::seed_from_u64(seed))
    }

    /// Construction with an injected random source.
    pub fn with_rng<R: Rng>(
        input_dim: usize,
        hidden_dim: usize,
        output_dim: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if input_dim == 0 || hidden_dim == 0 || output_dim == 0 {
            return Err(NNError::InvalidDimension(format!(
                "network dimensions must be greater than 0, got {}x{}x{}",
                input_dim, hidden_dim, output_dim
            )));
        }
        Ok(Self {
            w1: scaled_normal(input_dim, hidden_dim, WEIGHT_SCALE, rng),
            b1: Array2::zeros((1, hidden_dim)),
            w2: scaled_normal(hidden_dim, output_dim, WEIGHT_SCALE, rng),
            b2: Array2::zeros((1, output_dim)),
            cache: None,
        })
    }

    pub fn input_dim(&self) -> usize {
        self.w1.nrows()
    }

    pub fn hidden_dim(&self) -> usize {
        self.w1.ncols()
    }

    pub fn output_dim(&self) -> usize {
        self.w2.ncols()
    }

    /// Inference over a batch of rows. Returns the output activations,
    /// shape (batch_size x output_dim), every element in (0, 1), and
    /// overwrites the activation cache. Parameters are untouched.
    pub fn forward(&mut self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.check_input_shape(x)?;
        let cache = self.forward_pass(x);
        let output = cache.a2.clone();
        self.cache = Some(cache);
        Ok(output)
    }

    /// Inference without touching the activation cache; the display path of
    /// a caller can run this on a shared reference between training calls.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.check_input_shape(x)?;
        Ok(self.forward_pass(x).a2)
    }

    /// Full-batch gradient descent for exactly `epochs` iterations, no
    /// early stopping. Progress is printed every 1000th epoch, starting
    /// at epoch 0, as `Epoch {n}, Loss: {loss:.6}`.
    pub fn train(
        &mut self,
        x: &Array2<f64>,
        y: &Array2<f64>,
        epochs: usize,
        learning_rate: f64,
    ) -> Result<()> {
        self.train_with_monitor(x, y, epochs, learning_rate, |epoch, loss| {
            println!("Epoch {}, Loss: {:.6}", epoch, loss);
        })
    }

    /// Same numerics as `train`, with the periodic loss report delivered to
    /// a callback instead of stdout. The callback fires on every 1000th
    /// epoch (epoch 0 included) and never alters control flow.
    pub fn train_with_monitor<F>(
        &mut self,
        x: &Array2<f64>,
        y: &Array2<f64>,
        epochs: usize,
        learning_rate: f64,
        mut monitor: F,
    ) -> Result<()>
    where
        F: FnMut(usize, f64),
    {
        self.check_training_shapes(x, y)?;

        for epoch in 0..epochs {
            let cache = self.forward_pass(x);

            // Backward pass, chain rule through both sigmoid layers. The
            // `y - output` sign convention makes every update additive.
            let error = y - &cache.a2;
            let d_output = &error * &sigmoid_derivative(&cache.a2);
            let error_hidden = d_output.dot(&self.w2.t());
            let d_hidden = &error_hidden * &sigmoid_derivative(&cache.a1);

            // error_hidden already captured the pre-update w2, so all four
            // updates see only this epoch's starting parameters.
            self.w2.scaled_add(learning_rate, &cache.a1.t().dot(&d_output));
            self.b2.scaled_add(learning_rate, &column_sum(&d_output));
            self.w1.scaled_add(learning_rate, &x.t().dot(&d_hidden));
            self.b1.scaled_add(learning_rate, &column_sum(&d_hidden));

            if epoch % REPORT_EVERY == 0 {
                monitor(epoch, mean_squared_error(y, &cache.a2));
            }

            self.cache = Some(cache);
        }
        Ok(())
    }

    /// Parameter-count table, one line per layer.
    pub fn summary(&self) {
        let mut total_param = 0;
        let mut res = "\nModel FeedforwardNetwork\n".to_string();
        res.push_str("-------------------------------------------------------------\n");
        res.push_str("Layer\t\t Output shape\t\t No.of params\n");
        for (name, w, b) in [("Hidden", &self.w1, &self.b1), ("Output", &self.w2, &self.b2)] {
            let n = w.len() + b.len();
            total_param += n;
            res.push_str(&format!("{}\t\t\t  (None, {})\t\t  {}\n", name, b.len(), n));
        }
        res.push_str("-------------------------------------------------------------\n");
        res.push_str(&format!("Total params: {}\n", total_param));
        println!("{}", res);
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let encoded: Vec<u8> = bincode::serialize(self)?;
        File::create(path)?.write_all(&encoded)?;
        Ok(())
    }

    pub fn load(path: &str) -> Result<Self> {
        let mut buffer = Vec::new();
        File::open(path)?.read_to_end(&mut buffer)?;
        let network = bincode::deserialize(&buffer)?;
        Ok(network)
    }

    fn forward_pass(&self, x: &Array2<f64>) -> ForwardCache {
        let z1 = x.dot(&self.w1) + &self.b1;
        let a1 = sigmoid(&z1);
        let z2 = a1.dot(&self.w2) + &self.b2;
        let a2 = sigmoid(&z2);
        ForwardCache { z1, a1, z2, a2 }
    }

    fn check_input_shape(&self, x: &Array2<f64>) -> Result<()> {
        if x.ncols() != self.input_dim() {
            return Err(NNError::DimensionMismatch(format!(
                "input has {} columns but the network expects {}",
                x.ncols(),
                self.input_dim()
            )));
        }
        Ok(())
    }

    fn check_training_shapes(&self, x: &Array2<f64>, y: &Array2<f64>) -> Result<()> {
        self.check_input_shape(x)?;
        if y.ncols() != self.output_dim() {
            return Err(NNError::DimensionMismatch(format!(
                "target has {} columns but the network expects {}",
                y.ncols(),
                self.output_dim()
            )));
        }
        if x.nrows() != y.nrows() {
            return Err(NNError::DimensionMismatch(format!(
                "input batch has {} rows but target batch has {}",
                x.nrows(),
                y.nrows()
            )));
        }
        Ok(())
    }
}
