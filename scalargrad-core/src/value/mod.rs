//! The scalar node handle.
//!
//! A [`Value`] is a cheap, clonable handle to one node of a computation graph.
//! Combining values with arithmetic eagerly computes the forward result and
//! records the operands as predecessors of the new node, so every expression
//! builds a DAG that [`Value::backward`] can later differentiate.

use crate::autograd::backward_op::Op;
use std::cell::Cell;
use std::rc::Rc;

mod autograd_methods;
mod debug;
mod traits;

pub use crate::autograd::backward_op::OpKind;
pub use crate::autograd::graph::NodeId;

/// Node record shared by every handle pointing at it.
///
/// `data` and `op` are fixed at construction; `grad` is the only mutable slot.
pub(crate) struct ValueData {
    pub(crate) data: f64,
    pub(crate) grad: Cell<f64>,
    pub(crate) op: Op,
}

/// Handle to a scalar node in the autograd computation graph.
///
/// Cloning a `Value` clones the handle, not the node: both handles refer to
/// the same node and see the same gradient. A node stays alive as long as a
/// user handle or a downstream node references it.
#[derive(Clone)]
pub struct Value {
    pub(crate) node: Rc<ValueData>,
}

impl Value {
    /// Creates a leaf node with the given value and a gradient of 0.0.
    pub fn new(data: f64) -> Self {
        Self::from_op(data, Op::Leaf)
    }

    /// Creates a node produced by `op`. Used by the forward operations in `crate::ops`.
    pub(crate) fn from_op(data: f64, op: Op) -> Self {
        Value {
            node: Rc::new(ValueData {
                data,
                grad: Cell::new(0.0),
                op,
            }),
        }
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.node.data
    }

    /// Returns the accumulated gradient.
    ///
    /// This is 0.0 both before any backward pass and when a pass computed an
    /// exact zero; callers must track whether a pass has run.
    pub fn grad(&self) -> f64 {
        self.node.grad.get()
    }

    /// Returns the label of the operation that produced this node.
    pub fn op(&self) -> OpKind {
        self.node.op.kind()
    }

    /// Returns the immediate predecessors of this node, without duplicates.
    ///
    /// `a * a` has a single predecessor. Order follows operand order.
    pub fn prev(&self) -> Vec<Value> {
        let mut prev: Vec<Value> = Vec::new();
        for input in self.node.op.inputs() {
            if !prev.iter().any(|p| p.same_node(input)) {
                prev.push(input.clone());
            }
        }
        prev
    }

    /// Returns `true` if this node was created directly rather than by an operation.
    pub fn is_leaf(&self) -> bool {
        matches!(self.node.op, Op::Leaf)
    }

    /// Returns the identity of the underlying node.
    pub fn id(&self) -> NodeId {
        NodeId::of(self)
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn same_node(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    pub(crate) fn backward_op(&self) -> &Op {
        &self.node.op
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.node.grad.set(grad);
    }

    pub(crate) fn accumulate_grad(&self, grad: f64) {
        self.node.grad.set(self.node.grad.get() + grad);
    }
}

impl Drop for ValueData {
    // Unlinks long chains iteratively so dropping a deep graph cannot exhaust the stack.
    fn drop(&mut self) {
        let mut pending = std::mem::replace(&mut self.op, Op::Leaf).into_inputs();
        while let Some(value) = pending.pop() {
            if let Ok(mut data) = Rc::try_unwrap(value.node) {
                pending.extend(std::mem::replace(&mut data.op, Op::Leaf).into_inputs());
            }
        }
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i32> for Value {
    fn from(data: i32) -> Self {
        Value::new(f64::from(data))
    }
}
