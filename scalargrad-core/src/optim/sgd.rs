use crate::error::ScalarGradError;
use crate::nn::module::Module;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;
use log::{debug, warn};

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum and weight decay. For each parameter `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// v = momentum * v + d        (v = d when momentum is 0)
/// p = p - lr * v
/// ```
#[derive(Debug, Clone)]
pub struct SgdOptimizer {
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // One buffer per parameter, in `Module::parameters` order.
    momentum_buffers: Vec<f64>,
    steps: usize,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `lr`: The learning rate, finite and > 0.
    /// * `momentum`: Momentum factor in `[0, 1)`.
    /// * `weight_decay`: L2 penalty factor, >= 0.
    pub fn new(lr: f64, momentum: f64, weight_decay: f64) -> Result<Self, ScalarGradError> {
        if !(lr.is_finite() && lr > 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "learning rate must be finite and > 0, got {}",
                lr
            )));
        }
        if !(0.0..1.0).contains(&momentum) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "momentum must be in [0, 1), got {}",
                momentum
            )));
        }
        if !(weight_decay.is_finite() && weight_decay >= 0.0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "weight decay must be finite and >= 0, got {}",
                weight_decay
            )));
        }
        Ok(SgdOptimizer {
            lr,
            momentum,
            weight_decay,
            momentum_buffers: Vec::new(),
            steps: 0,
        })
    }

    /// Plain SGD without momentum or weight decay.
    pub fn with_lr(lr: f64) -> Result<Self, ScalarGradError> {
        Self::new(lr, 0.0, 0.0)
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }

    /// Number of successful steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self, module: &mut dyn Module) -> Result<(), ScalarGradError> {
        let params = module.parameters();

        // Validate everything before replacing anything.
        if let Some(index) = params.iter().position(|p| !p.grad().is_finite()) {
            warn!(
                "SgdOptimizer: non-finite gradient for parameter {}, step skipped",
                index
            );
            return Err(ScalarGradError::NonFiniteGradient { index });
        }
        if self.momentum > 0.0 {
            if self.momentum_buffers.is_empty() {
                self.momentum_buffers = vec![0.0; params.len()];
            } else if self.momentum_buffers.len() != params.len() {
                return Err(ScalarGradError::ParameterCountMismatch {
                    expected: self.momentum_buffers.len(),
                    actual: params.len(),
                });
            }
        }

        let lr = self.lr;
        let momentum = self.momentum;
        let weight_decay = self.weight_decay;
        let buffers = &mut self.momentum_buffers;
        let mut index = 0;
        module.update_parameters(&mut |p: &Value| {
            let mut d_p = p.grad() + weight_decay * p.data();
            if momentum > 0.0 {
                buffers[index] = momentum * buffers[index] + d_p;
                d_p = buffers[index];
            }
            index += 1;
            Value::new(p.data() - lr * d_p)
        });

        self.steps += 1;
        debug!(
            "SgdOptimizer: step {} updated {} parameters (lr = {})",
            self.steps,
            params.len(),
            lr
        );
        Ok(())
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.lr = lr;
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
