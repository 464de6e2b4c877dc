use std::io::Write;

use crate::error::Result;
use crate::golden::spec::GoldenSpec;
use crate::math::matrix::Matrix;
use crate::math::source::UniformSource;
use crate::network::network::Network;

/// A fully materialized golden vector: the assembled network, the sampled
/// input, and the forward pass computed from them. Everything is read-only
/// after `generate` returns.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenVector {
    pub spec: GoldenSpec,
    pub network: Network,
    pub input: Matrix,
    pub output: Matrix,
}

impl GoldenVector {
    /// Runs one generation pass for `spec`.
    ///
    /// The draw order is part of the public contract: weight matrix 0
    /// row-major (input index outer, hidden inner), weight matrix 1 row-major
    /// (hidden outer, output inner), bias vector 0 (hidden index), bias
    /// vector 1 (output index), then the input sample (input index). Weights
    /// and biases use symmetric draws in `[-1, 1)`, the input sample raw
    /// draws in `[0, 1)`. Reordering any of these changes every downstream
    /// value and invalidates previously emitted vectors.
    pub fn generate(spec: GoldenSpec) -> Result<GoldenVector> {
        spec.validate()?;
        let mut source = UniformSource::new(spec.seed);

        let w0 = Matrix::random(spec.input, spec.hidden, &mut source)?;
        let w1 = Matrix::random(spec.hidden, spec.output, &mut source)?;
        let b0 = Matrix::random(1, spec.hidden, &mut source)?;
        let b1 = Matrix::random(1, spec.output, &mut source)?;
        let input = Matrix::sample(1, spec.input, &mut source)?;

        // Assemble through the same call surface the emitted text replays.
        let mut network = Network::new();
        network.resize(0, spec.input)?;
        network.resize(1, spec.hidden)?;
        network.resize(2, spec.output)?;
        for (layer, weights) in [&w0, &w1].into_iter().enumerate() {
            for i in 0..weights.rows {
                for e in 0..weights.cols {
                    network.set_weight(layer, i, e, weights.get(i, e)?)?;
                }
            }
        }
        for (layer, biases) in [&b0, &b1].into_iter().enumerate() {
            for i in 0..biases.cols {
                network.set_bias(layer, i, biases.get(0, i)?)?;
            }
        }

        let output = network.forward(&input)?;
        Ok(GoldenVector {
            spec,
            network,
            input,
            output,
        })
    }

    /// Renders the vector as target-language statements: seed/shape comments,
    /// the `resize` / `set_weight` / `set_bias` replay, the input
    /// construction, and one tolerance assertion per output element.
    ///
    /// Numeric literals use shortest round-trip formatting, so re-parsing
    /// them yields the identical double bit pattern. The whole text is
    /// materialized in memory; a caller never observes a partial emission.
    pub fn render(&self) -> String {
        let spec = &self.spec;
        let layers = self.network.layers();
        let mut out = String::new();

        out.push_str(&format!("// seed : {}\n", spec.seed));
        out.push_str(&format!(
            "// shape : {}, {}, {}\n",
            spec.input, spec.hidden, spec.output
        ));

        for (index, size) in self.network.sizes().iter().enumerate() {
            out.push_str(&format!("network.resize({index}, {size});\n"));
        }

        for (layer, params) in layers.iter().enumerate() {
            for i in 0..params.weights.rows {
                for e in 0..params.weights.cols {
                    out.push_str(&format!(
                        "network.set_weight({layer}, {i}, {e}, {:?});\n",
                        params.weights.data[i][e]
                    ));
                }
            }
        }
        for (layer, params) in layers.iter().enumerate() {
            for i in 0..params.biases.cols {
                out.push_str(&format!(
                    "network.set_bias({layer}, {i}, {:?});\n",
                    params.biases.data[0][i]
                ));
            }
        }

        out.push_str(&format!("let mut input = Matrix::new(1, {});\n", spec.input));
        for i in 0..spec.input {
            out.push_str(&format!("input[0][{i}] = {:?};\n", self.input.data[0][i]));
        }

        out.push_str("let output = network.forward(&input);\n");
        for i in 0..spec.output {
            out.push_str(&format!(
                "assert!((output[0][{i}] - {:?}).abs() < {:e});\n",
                self.output.data[0][i], spec.epsilon
            ));
        }

        out
    }

    /// Writes the rendered text in one call.
    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        writer.write_all(self.render().as_bytes())?;
        Ok(())
    }
}
