// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::value::Value;
use log::trace;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors: 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::InvalidConfig(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between predictions and targets.
///
/// The result is a node of the same graph as the predictions, so calling
/// `backward()` on it reaches every parameter the predictions depend on.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// `Σ (pᵢ - tᵢ)²`, divided by the number of pairs when the reduction is `Mean`.
    pub fn calculate(
        &self,
        predictions: &[Value],
        targets: &[f64],
    ) -> Result<Value, ScalarGradError> {
        if predictions.is_empty() {
            return Err(ScalarGradError::EmptyInput("MSELoss::calculate".to_string()));
        }
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::LengthMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss::calculate".to_string(),
            });
        }

        let total: Value = predictions
            .iter()
            .zip(targets)
            .map(|(p, &t)| (p - t).pow(2.0))
            .sum();
        let loss = match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total / predictions.len() as f64,
        };
        trace!(
            "MSELoss: {:?} over {} pairs = {}",
            self.reduction,
            predictions.len(),
            loss
        );
        Ok(loss)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
