use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::value::Value;

/// Divides two values: `a / b`, built as `a * b^-1`.
///
/// Division by a zero-valued node is not guarded: the forward value and the
/// gradient contributions are non-finite, following IEEE 754.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
