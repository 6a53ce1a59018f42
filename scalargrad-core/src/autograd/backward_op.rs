use crate::ops::activation::relu::relu_backward;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;
use crate::value::Value;
use std::fmt;

/// Backward record of the operation that produced a node.
///
/// One variant per primitive operation, holding handles to the operands (the
/// node's predecessors) and any constant the local derivative needs. Negation,
/// subtraction and division are composites of these primitives and have no
/// variant of their own.
pub(crate) enum Op {
    /// Created directly by the user; no predecessors.
    Leaf,
    Add { lhs: Value, rhs: Value },
    Mul { lhs: Value, rhs: Value },
    /// `exponent` is a constant, never a node.
    Pow { base: Value, exponent: f64 },
    Relu { input: Value },
}

impl Op {
    /// Returns the operands in the order the forward operation received them.
    ///
    /// The order matches the gradients returned by [`Op::backward`].
    pub(crate) fn inputs(&self) -> Vec<&Value> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add { lhs, rhs } | Op::Mul { lhs, rhs } => vec![lhs, rhs],
            Op::Pow { base, .. } => vec![base],
            Op::Relu { input } => vec![input],
        }
    }

    /// Consumes the record, returning the operand handles.
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add { lhs, rhs } | Op::Mul { lhs, rhs } => vec![lhs, rhs],
            Op::Pow { base, .. } => vec![base],
            Op::Relu { input } => vec![input],
        }
    }

    /// Computes dL/dInput_i for each operand given dL/dOutput (`grad_output`).
    ///
    /// Nothing is accumulated here; the caller adds each returned gradient into
    /// the matching operand from [`Op::inputs`].
    pub(crate) fn backward(&self, grad_output: f64) -> Vec<f64> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add { .. } => add_backward(grad_output).to_vec(),
            Op::Mul { lhs, rhs } => mul_backward(lhs.data(), rhs.data(), grad_output).to_vec(),
            Op::Pow { base, exponent } => vec![pow_backward(base.data(), *exponent, grad_output)],
            Op::Relu { input } => vec![relu_backward(input.data(), grad_output)],
        }
    }

    pub(crate) fn kind(&self) -> OpKind {
        match self {
            Op::Leaf => OpKind::Leaf,
            Op::Add { .. } => OpKind::Add,
            Op::Mul { .. } => OpKind::Mul,
            Op::Pow { exponent, .. } => OpKind::Pow(*exponent),
            Op::Relu { .. } => OpKind::Relu,
        }
    }
}

/// Label of the operation that produced a node, for diagnostics and graph introspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpKind {
    Leaf,
    Add,
    Mul,
    Pow(f64),
    Relu,
}

impl OpKind {
    /// Number of operand slots the operation takes.
    pub fn arity(&self) -> usize {
        match self {
            OpKind::Leaf => 0,
            OpKind::Add | OpKind::Mul => 2,
            OpKind::Pow(_) | OpKind::Relu => 1,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Leaf => write!(f, ""),
            OpKind::Add => write!(f, "+"),
            OpKind::Mul => write!(f, "*"),
            OpKind::Pow(exponent) => write!(f, "**{}", exponent),
            OpKind::Relu => write!(f, "ReLU"),
        }
    }
}
