use crate::autograd::backward_op::Op;
use crate::value::Value;

/// Adds two values: `a + b`.
///
/// Both operands become predecessors of the result.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.data() + b.data(),
        Op::Add {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

/// d(a + b)/da = 1, d(a + b)/db = 1.
pub(crate) fn add_backward(grad_output: f64) -> [f64; 2] {
    [grad_output, grad_output]
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
