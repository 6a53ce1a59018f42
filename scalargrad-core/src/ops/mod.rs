// src/ops/mod.rs
// Forward operations on scalar values. Each file holds one operation: the
// function building the result node and the local derivative rule used by
// the backward pass.

pub mod activation;
pub mod arithmetic;

pub use activation::relu_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
