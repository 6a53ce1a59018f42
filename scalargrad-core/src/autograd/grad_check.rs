use crate::error::ScalarGradError;
use crate::value::Value;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(#[from] ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {value_plus:?}, f(x-eps): {value_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Epsilon must be a positive finite number, got {0}")]
    InvalidEpsilon(f64),
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` is evaluated once on fresh leaves built from `inputs` and differentiated
/// with `backward()`; then, for each input, it is re-evaluated at `x ± epsilon`.
/// A gradient passes when the absolute difference is within `tolerance`, or the
/// difference relative to the analytical gradient is.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // Analytical pass on fresh leaves, so earlier passes cannot leak in.
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves)?;
    output.backward();

    for (i, leaf) in leaves.iter().enumerate() {
        let value_plus = evaluate_perturbed(&func, inputs, i, epsilon)?;
        let value_minus = evaluate_perturbed(&func, inputs, i, -epsilon)?;
        let numerical_grad = (value_plus - value_minus) / (2.0 * epsilon);
        let analytical_grad = leaf.grad();

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                value_plus,
                value_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        debug!(
            "check_grad: input {} analytical={} numerical={} diff={}",
            i, analytical_grad, numerical_grad, difference
        );
        if difference > tolerance && difference / (analytical_grad.abs() + epsilon) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let perturbed: Vec<Value> = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| Value::new(if j == index { x + delta } else { x }))
        .collect();
    Ok(func(&perturbed)?.data())
}
