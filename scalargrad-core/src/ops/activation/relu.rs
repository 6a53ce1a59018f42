use crate::autograd::backward_op::Op;
use crate::value::Value;

/// Applies the Rectified Linear Unit: `max(0, a)`.
pub fn relu_op(a: &Value) -> Value {
    let input = a.data();
    let data = if input > 0.0 { input } else { 0.0 };
    Value::from_op(data, Op::Relu { input: a.clone() })
}

/// Subgradient of ReLU: 1 for positive input, 0 otherwise.
///
/// The input 0 takes the zero branch.
pub(crate) fn relu_backward(input: f64, grad_output: f64) -> f64 {
    if input > 0.0 {
        grad_output
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
