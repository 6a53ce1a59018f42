use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::neuron::{Activation, Neuron};
use crate::value::Value;
use rand::Rng;

/// Output of a [`Layer`]: one node for a single-neuron layer, otherwise one node per neuron.
#[derive(Debug, Clone)]
pub enum LayerOutput {
    Single(Value),
    Many(Vec<Value>),
}

impl LayerOutput {
    /// Returns the outputs as a sequence, in neuron order.
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            LayerOutput::Single(value) => vec![value],
            LayerOutput::Many(values) => values,
        }
    }

    /// Returns the node of a single-neuron output.
    pub fn as_single(&self) -> Option<&Value> {
        match self {
            LayerOutput::Single(value) => Some(value),
            LayerOutput::Many(_) => None,
        }
    }

    pub fn into_single(self) -> Option<Value> {
        match self {
            LayerOutput::Single(value) => Some(value),
            LayerOutput::Many(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LayerOutput::Single(_) => 1,
            LayerOutput::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fixed-size collection of neurons sharing the same input arity.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
}

impl Layer {
    /// Creates a rectified layer of `nout` neurons with `nin` inputs each.
    pub fn new(nin: usize, nout: usize) -> Result<Self, ScalarGradError> {
        Self::from_init(
            nin,
            nout,
            Activation::Relu,
            &Init::default(),
            &mut rand::thread_rng(),
        )
    }

    /// Creates a layer whose neurons draw their weights from `init`.
    pub fn from_init<R: Rng>(
        nin: usize,
        nout: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let neurons = (0..nout)
            .map(|_| Neuron::from_init(nin, activation, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, nin })
    }

    /// Creates a layer from existing neurons, which must all take `nin` inputs.
    pub fn from_neurons(nin: usize, neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(ScalarGradError::InputArityMismatch {
                expected: nin,
                actual: bad.nin(),
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer { neurons, nin })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Evaluates every neuron on `inputs`.
    ///
    /// Returns [`LayerOutput::Single`] for a one-neuron layer and
    /// [`LayerOutput::Many`] otherwise.
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

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        if inputs.len() != self.nin {
            return Err(ScalarGradError::InputArityMismatch {
                expected: self.nin,
                actual: inputs.len(),
                operation: "Layer::forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.call(inputs)).collect()
    }

    /// Concatenation of the neurons' parameters, in neuron order.
    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neurons.{}.{}", i, name), param));
            }
        }
        params
    }

    fn update_parameters(&mut self, f: &mut dyn FnMut(&Value) -> Value) {
        for neuron in self.neurons.iter_mut() {
            neuron.update_parameters(f);
        }
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
