use crate::ops::arithmetic::mul::mul_op;
use crate::value::Value;

/// Negates a value: `-a`, built as `a * (-1)`.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
