// Operator overloading for Value.
//
// Every binary operator is available for any mix of `Value`, `&Value` and
// `f64` on either side. A plain number is promoted to a fresh leaf before the
// operation, so `2.0 * &x` and `&x * 2.0` build the same shape of graph.

use crate::ops::activation::relu_op;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
use crate::value::Value;
use num_traits::{One, Pow, Zero};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::new(rhs))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::new(rhs))
            }
        }

        // Reflected order: constant on the left.
        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

// Powers take a constant exponent only; there is no `Pow<Value>`.
// Implemented on `&Value` so that generic code using `Pow` never consumes a handle.
impl Pow<f64> for &Value {
    type Output = Value;
    fn pow(self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

impl Pow<i32> for &Value {
    type Output = Value;
    fn pow(self, exponent: i32) -> Value {
        pow_op(self, f64::from(exponent))
    }
}

impl Value {
    /// Raises `self` to a constant power. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    /// Rectified linear unit, `max(0, self)`. See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

impl Zero for Value {
    /// A fresh leaf holding 0.0.
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.data() == 0.0
    }
}

impl One for Value {
    /// A fresh leaf holding 1.0.
    fn one() -> Self {
        Value::new(1.0)
    }
}

// Sums chain additions starting from the first element, so no extra zero
// leaf enters the graph unless the iterator is empty.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.reduce(|acc, v| acc + v).unwrap_or_else(Value::zero)
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(mut iter: I) -> Value {
        match iter.next() {
            Some(first) => iter.fold(first.clone(), |acc, v| acc + v),
            None => Value::zero(),
        }
    }
}
