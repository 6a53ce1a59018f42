use crate::error::ScalarGradError;
use crate::nn::module::Module;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update a module's parameters from their accumulated gradients.
/// Since parameter data is immutable, a step replaces every parameter with a
/// fresh leaf; graphs built before the step keep referring to the old leaves.
pub trait Optimizer {
    /// Performs a single optimization step on `module`'s parameters.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `ScalarGradError` otherwise.
    fn step(&mut self, module: &mut dyn Module) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters of `module`.
    ///
    /// Freshly stepped parameters already start at 0.0; this is for discarding
    /// gradients without stepping.
    fn zero_grad(&self, module: &dyn Module) {
        module.zero_grad();
    }

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, lr: f64);
}
