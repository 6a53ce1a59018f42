use crate::error::ScalarGradError;
use crate::model::config::MlpConfig;
use crate::nn::layers::{Layer, LayerOutput};
use crate::nn::module::Module;
use crate::nn::neuron::Activation;
use crate::value::Value;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A multi-layer perceptron: layers applied in sequence, each layer's outputs
/// feeding the next layer's inputs.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a rectified network with `nin` inputs and one layer per entry of `layer_sizes`.
    ///
    /// `Mlp::new(3, &[4, 4, 1])` builds `3 -> 4 -> 4 -> 1`.
    pub fn new(nin: usize, layer_sizes: &[usize]) -> Result<Self, ScalarGradError> {
        Self::from_config(&MlpConfig::new(nin, layer_sizes))
    }

    /// Builds a network from a validated configuration.
    pub fn from_config(config: &MlpConfig) -> Result<Self, ScalarGradError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut layers = Vec::with_capacity(config.layer_sizes.len());
        let mut nin = config.n_inputs;
        for (i, &nout) in config.layer_sizes.iter().enumerate() {
            let is_last = i + 1 == config.layer_sizes.len();
            let activation = if is_last && config.linear_output {
                Activation::Linear
            } else {
                Activation::Relu
            };
            layers.push(Layer::from_init(nin, nout, activation, &config.init, &mut rng)?);
            nin = nout;
        }

        let mlp = Mlp { layers };
        debug!(
            "Mlp: built {} -> {:?} with {} parameters",
            config.n_inputs,
            config.layer_sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Assembles a network from existing layers; each layer's input arity must
    /// equal the previous layer's size.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        if layers.is_empty() {
            return Err(ScalarGradError::EmptyInput("Mlp::from_layers".to_string()));
        }
        for pair in layers.windows(2) {
            if pair[1].nin() != pair[0].nout() {
                return Err(ScalarGradError::InputArityMismatch {
                    expected: pair[0].nout(),
                    actual: pair[1].nin(),
                    operation: "Mlp::from_layers".to_string(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of inputs the first layer expects.
    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    /// Runs the network; a single-neuron last layer yields [`LayerOutput::Single`].
    pub fn call(&self, inputs: &[Value]) -> Result<LayerOutput, ScalarGradError> {
        let mut outputs = self.forward(inputs)?;
        if outputs.len() == 1 {
            if let Some(single) = outputs.pop() {
                return Ok(LayerOutput::Single(single));
            }
        }
        Ok(LayerOutput::Many(outputs))
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    /// Concatenation of every layer's parameters, in layer order.
    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layers.{}.{}", i, name), param));
            }
        }
        params
    }

    fn update_parameters(&mut self, f: &mut dyn FnMut(&Value) -> Value) {
        for layer in self.layers.iter_mut() {
            layer.update_parameters(f);
        }
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
