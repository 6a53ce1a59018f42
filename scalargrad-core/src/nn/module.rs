use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// Parameters are leaf [`Value`]s. Because node data is immutable, training
/// replaces parameters with fresh leaves through [`Module::update_parameters`]
/// instead of writing into them.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module, building a fresh graph on top of
    /// `inputs` and the current parameters.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InputArityMismatch` if `inputs` does not have the
    /// number of elements the module expects.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns handles to all trainable parameters, in a stable order.
    fn parameters(&self) -> Vec<Value>;

    /// Returns all parameters with hierarchical names (e.g. "layers.0.neurons.1.w.2").
    /// The order matches [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Replaces every parameter `p` with `f(p)`, visiting them in the order of
    /// [`Module::parameters`].
    fn update_parameters(&mut self, f: &mut dyn FnMut(&Value) -> Value);

    /// Number of trainable parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to 0.0.
    ///
    /// Gradients accumulate across backward passes; call this between passes.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
