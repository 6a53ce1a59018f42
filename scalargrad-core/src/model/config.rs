//! Network configuration.

use crate::error::ScalarGradError;
use crate::nn::init::Init;

/// Default number of network inputs.
pub const DEFAULT_N_INPUTS: usize = 3;
/// Default layer sizes (two hidden layers of 4 and a single output).
pub const DEFAULT_LAYER_SIZES: [usize; 3] = [4, 4, 1];

/// Configuration for an [`Mlp`](crate::model::Mlp).
///
/// Use [`MlpConfig::default`] and the `with_*` setters, then
/// [`MlpConfig::validate`] (called by `Mlp::from_config`).
#[derive(Clone, Debug, PartialEq)]
pub struct MlpConfig {
    /// Number of inputs fed to the first layer.
    pub n_inputs: usize,
    /// Number of neurons per layer, first to last.
    pub layer_sizes: Vec<usize>,
    /// Weight initialization; biases start at 0.
    pub init: Init,
    /// Seed for the initialization RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Makes the last layer linear instead of rectified.
    pub linear_output: bool,
}

impl Default for MlpConfig {
    /// Returns the 3 -> [4, 4, 1] rectified network with unit-uniform weights.
    fn default() -> Self {
        Self {
            n_inputs: DEFAULT_N_INPUTS,
            layer_sizes: DEFAULT_LAYER_SIZES.to_vec(),
            init: Init::default(),
            seed: None,
            linear_output: false,
        }
    }
}

impl MlpConfig {
    /// Configuration for `n_inputs` inputs and the given layer sizes; other fields default.
    pub fn new(n_inputs: usize, layer_sizes: &[usize]) -> Self {
        Self {
            n_inputs,
            layer_sizes: layer_sizes.to_vec(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_linear_output(mut self, linear_output: bool) -> Self {
        self.linear_output = linear_output;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err(ScalarGradError::InvalidConfig)` if there are no inputs, no
    /// layers, an empty layer, or unusable initialization parameters.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.n_inputs == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "n_inputs must be > 0".to_string(),
            ));
        }
        if self.layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "layer_sizes must contain at least one layer".to_string(),
            ));
        }
        if let Some(index) = self.layer_sizes.iter().position(|&size| size == 0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "layer {} has size 0",
                index
            )));
        }
        self.init.validate()
    }

    /// Total number of trainable parameters a network with this configuration has.
    pub fn num_parameters(&self) -> usize {
        let mut nin = self.n_inputs;
        let mut total = 0;
        for &nout in &self.layer_sizes {
            total += nout * (nin + 1);
            nin = nout;
        }
        total
    }
}
