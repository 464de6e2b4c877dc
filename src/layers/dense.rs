use serde::{Serialize, Deserialize};

use crate::{activation::activation::ActivationFunction, math::matrix::Matrix};
use crate::error::Result;

/// One dense stage: a `(input_size, size)` weight matrix and a `(1, size)`
/// bias row. Invariant: `weights.cols == biases.cols`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction,
}

impl Layer {
    /// Zeroed parameters; populated afterwards through
    /// `Network::set_weight` / `Network::set_bias`.
    pub fn zeroed(input_size: usize, size: usize, activation: ActivationFunction) -> Result<Layer> {
        Ok(Layer {
            weights: Matrix::zeros(input_size, size)?,
            biases: Matrix::zeros(1, size)?,
            activator: activation,
        })
    }

    /// `activation(x · W + b)` for a `(n, input_size)` input.
    pub fn feed(&self, input: &Matrix) -> Result<Matrix> {
        let z = input.multiply(&self.weights)?.add_row(&self.biases)?;
        Ok(z.map(|x| self.activator.function(x)))
    }
}
