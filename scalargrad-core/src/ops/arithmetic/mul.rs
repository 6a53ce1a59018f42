use crate::autograd::backward_op::Op;
use crate::value::Value;

/// Multiplies two values: `a * b`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.data() * b.data(),
        Op::Mul {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

/// d(a * b)/da = b, d(a * b)/db = a, scaled by the upstream gradient.
pub(crate) fn mul_backward(lhs: f64, rhs: f64, grad_output: f64) -> [f64; 2] {
    [rhs * grad_output, lhs * grad_output]
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
