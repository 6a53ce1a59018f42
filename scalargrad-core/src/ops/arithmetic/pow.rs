use crate::autograd::backward_op::Op;
use crate::value::Value;

/// Raises a value to a constant power: `base ^ exponent`.
///
/// The exponent is a plain number and is not part of the graph; only `base`
/// is a predecessor of the result. Non-integer exponents of negative bases and
/// negative exponents of zero produce non-finite results, as `f64::powf` does.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    Value::from_op(
        base.data().powf(exponent),
        Op::Pow {
            base: base.clone(),
            exponent,
        },
    )
}

/// d(x^k)/dx = k * x^(k - 1), scaled by the upstream gradient.
///
/// `x^0` is constant, so its gradient is 0 even at `x = 0`.
pub(crate) fn pow_backward(base: f64, exponent: f64, grad_output: f64) -> f64 {
    if exponent == 0.0 {
        return 0.0;
    }
    exponent * base.powf(exponent - 1.0) * grad_output
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
