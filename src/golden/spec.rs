use serde::{Serialize, Deserialize};

use crate::error::{NnError, Result};

/// Run configuration for one golden vector: the generator seed, the three
/// neuron-layer widths, and the tolerance baked into the emitted assertions.
///
/// `GoldenSpec` can be saved to / loaded from JSON independently of a run, so
/// a vector can be regenerated later from the recorded configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldenSpec {
    pub seed: u64,
    pub input: usize,
    pub hidden: usize,
    pub output: usize,
    /// Absolute tolerance for the emitted output assertions. Loose enough to
    /// absorb cross-language summation rounding, tight enough to catch a
    /// broken forward pass.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

fn default_epsilon() -> f64 {
    1e-9
}

impl Default for GoldenSpec {
    /// The canonical run: seed 7, shape 30/100/10, tolerance 1e-9.
    fn default() -> GoldenSpec {
        GoldenSpec {
            seed: 7,
            input: 30,
            hidden: 100,
            output: 10,
            epsilon: default_epsilon(),
        }
    }
}

impl GoldenSpec {
    pub fn validate(&self) -> Result<()> {
        if self.input == 0 || self.hidden == 0 || self.output == 0 {
            return Err(NnError::InvalidConfig(format!(
                "layer widths must be positive, got {}/{}/{}",
                self.input, self.hidden, self.output
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(NnError::InvalidConfig(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| NnError::Serialization(e.to_string()))
    }

    /// Deserializes a `GoldenSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<GoldenSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| NnError::Serialization(e.to_string()))
    }
}
