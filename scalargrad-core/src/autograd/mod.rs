//! Reverse-mode differentiation machinery.
//!
//! Every non-leaf [`Value`](crate::Value) carries an [`Op`](backward_op::Op) record naming
//! its operands. [`Value::backward`](crate::Value::backward) orders the graph with
//! [`graph::topological_sort`] and walks it in reverse, asking each record for
//! the gradient contribution owed to each operand.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::OpKind;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{topological_sort, NodeId};
