use crate::error::ScalarGradError;
use crate::nn::init::{init_values, Init};
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// Nonlinearity applied to a neuron's affine output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// `max(0, x)`.
    #[default]
    Relu,
    /// No nonlinearity.
    Linear,
}

impl Activation {
    pub fn apply(&self, x: Value) -> Value {
        match self {
            Activation::Relu => x.relu(),
            Activation::Linear => x,
        }
    }
}

/// A single unit: `act(w · x + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a rectified neuron with `nin` inputs, weights drawn from the
    /// default initialization and a zero bias.
    pub fn new(nin: usize) -> Result<Self, ScalarGradError> {
        Self::from_init(nin, Activation::Relu, &Init::default(), &mut rand::thread_rng())
    }

    /// Creates a neuron with `nin` weights drawn from `init` and a zero bias.
    pub fn from_init<R: Rng>(
        nin: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let weights = init_values(nin, init, rng)?;
        Ok(Neuron {
            weights,
            bias: Value::new(0.0),
            activation,
        })
    }

    /// Creates a neuron from existing weight and bias values.
    pub fn from_parameters(weights: Vec<Value>, bias: Value, activation: Activation) -> Self {
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Number of inputs the neuron expects.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Computes `act(b + Σ wᵢ·xᵢ)` as a single output node.
    pub fn call(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputArityMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::call".to_string(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| acc + w * x);
        Ok(self.activation.apply(pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.call(inputs)?])
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w.{}", i), w.clone()))
            .collect();
        params.push(("b".to_string(), self.bias.clone()));
        params
    }

    fn update_parameters(&mut self, f: &mut dyn FnMut(&Value) -> Value) {
        for weight in self.weights.iter_mut() {
            *weight = f(weight);
        }
        self.bias = f(&self.bias);
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
