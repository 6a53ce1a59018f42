use crate::value::Value;

/// Checks that a value's forward data is within `tolerance` of `expected`.
/// Panics with both numbers otherwise.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let diff = (actual.data() - expected).abs();
    if diff.is_nan() || diff > tolerance {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.data(),
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks the accumulated gradients of `values` against `expected`, element-wise.
/// Panics on a length mismatch or at the first gradient off by more than `tolerance`.
pub fn check_grads_near(values: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(values.len(), expected.len(), "Gradient count mismatch");

    for (i, (v, e)) in values.iter().zip(expected.iter()).enumerate() {
        let diff = (v.grad() - *e).abs();
        if diff.is_nan() || diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                v.grad(),
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Helper to create leaf values from plain numbers.
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}
