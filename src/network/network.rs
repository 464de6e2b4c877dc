use serde::{Serialize, Deserialize};

use crate::{activation::activation::ActivationFunction, layers::dense::Layer};
use crate::error::{NnError, Result};
use crate::math::matrix::Matrix;

/// Fixed-topology stack of dense layers.
///
/// A network is assembled once through `resize` / `set_weight` / `set_bias`
/// and then only read; `forward` takes `&self`. Neuron-layer widths are
/// declared in creation order: `resize(0, _)` is the input width and each
/// `resize(i, _)` for `i > 0` materializes the parameter layer between slots
/// `i - 1` and `i` with zeroed weights and biases and ReLU activation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    sizes: Vec<usize>,
    layers: Vec<Layer>,
}

impl Network {
    pub fn new() -> Network {
        Network {
            sizes: vec![],
            layers: vec![],
        }
    }

    /// Declares the width of neuron layer `index`. Indices must be contiguous
    /// (0-based, appended in order); a gap fails with `IndexOutOfRange` and a
    /// zero width with `InvalidShape`.
    pub fn resize(&mut self, index: usize, size: usize) -> Result<()> {
        if size == 0 {
            return Err(NnError::InvalidShape { rows: 1, cols: size });
        }
        if index != self.sizes.len() {
            return Err(NnError::IndexOutOfRange {
                row: index,
                col: 0,
                rows: self.sizes.len(),
                cols: 1,
            });
        }
        self.sizes.push(size);
        let n = self.sizes.len();
        if n >= 2 {
            self.layers.push(Layer::zeroed(
                self.sizes[n - 2],
                self.sizes[n - 1],
                ActivationFunction::ReLU,
            )?);
        }
        Ok(())
    }

    pub fn set_weight(&mut self, layer: usize, i: usize, e: usize, value: f64) -> Result<()> {
        let layer_count = self.layers.len();
        let l = self.layers.get_mut(layer).ok_or(NnError::IndexOutOfRange {
            row: layer,
            col: 0,
            rows: layer_count,
            cols: 1,
        })?;
        l.weights.set(i, e, value)
    }

    pub fn set_bias(&mut self, layer: usize, i: usize, value: f64) -> Result<()> {
        let layer_count = self.layers.len();
        let l = self.layers.get_mut(layer).ok_or(NnError::IndexOutOfRange {
            row: layer,
            col: 0,
            rows: layer_count,
            cols: 1,
        })?;
        l.biases.set(0, i, value)
    }

    /// One forward pass: folds `activation(x · W + b)` over the layers in
    /// order. Requires `input.cols` to equal the declared input width.
    pub fn forward(&self, input: &Matrix) -> Result<Matrix> {
        let expected = self.sizes.first().copied().unwrap_or(0);
        if input.cols != expected {
            return Err(NnError::DimensionMismatch {
                expected: format!("input of width {expected}"),
                actual: format!("{}x{}", input.rows, input.cols),
            });
        }
        let mut current = input.clone();
        for layer in &self.layers {
            current = layer.feed(&current)?;
        }
        Ok(current)
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}
