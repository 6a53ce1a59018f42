use super::*;
use crate::OpKind;

#[test]
fn test_relu_forward() {
    assert_eq!(relu_op(&Value::new(-1.0)).data(), 0.0);
    assert_eq!(relu_op(&Value::new(1.0)).data(), 1.0);
    assert_eq!(relu_op(&Value::new(0.0)).data(), 0.0);
    assert_eq!(relu_op(&Value::new(1.0)).op(), OpKind::Relu);
}

#[test]
fn test_relu_backward_positive() {
    let a = Value::new(2.0);
    let b = relu_op(&a);
    b.backward();
    assert_eq!(b.data(), 2.0);
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_relu_backward_negative() {
    let c = Value::new(-2.0);
    let d = relu_op(&c);
    d.backward();
    assert_eq!(d.data(), 0.0);
    assert_eq!(c.grad(), 0.0);
}

#[test]
fn test_relu_backward_at_zero_is_zero() {
    let a = Value::new(0.0);
    let b = relu_op(&a);
    b.backward();
    assert_eq!(b.data(), 0.0);
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_relu_negative_zero_input() {
    let a = Value::new(-0.0);
    let b = relu_op(&a);
    assert_eq!(b.data(), 0.0);
    assert!(b.data().is_sign_positive());
}

#[test]
fn test_relu_nan_input_is_clamped() {
    // NaN fails the `> 0` test, so both forward and backward take the zero branch.
    let a = Value::new(f64::NAN);
    let b = relu_op(&a);
    assert_eq!(b.data(), 0.0);
    b.backward();
    assert_eq!(a.grad(), 0.0);
}
