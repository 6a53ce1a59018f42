use crate::value::Value;
use log::trace;
use std::collections::HashSet;
use std::rc::Rc;

/// Identity of a node in the computation graph.
///
/// Derived from the address of the shared node record, so every clone of a
/// handle has the same id while distinct nodes with equal data do not. Only
/// meaningful while the node is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn of(value: &Value) -> Self {
        NodeId(Rc::as_ptr(&value.node) as usize)
    }
}

/// Orders every node reachable from `root` so that each node comes after all of
/// its predecessors.
///
/// Depth-first post-order with a visited set keyed by [`NodeId`]: a node is
/// appended only once all of its predecessors have been appended, and a node
/// shared by several consumers is appended once. The root is always last.
///
/// The traversal uses an explicit stack, so the depth of the graph is bounded
/// by heap memory rather than the call stack.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut sorted = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    // (node, predecessors already scheduled)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        let inputs: Vec<Value> = node.backward_op().inputs().into_iter().cloned().collect();
        stack.push((node, true));
        // Reversed so operands are visited in operand order.
        for input in inputs.into_iter().rev() {
            if !visited.contains(&input.id()) {
                stack.push((input, false));
            }
        }
    }

    trace!("topological_sort: {} nodes reachable", sorted.len());
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(sorted: &[Value], node: &Value) -> usize {
        sorted
            .iter()
            .position(|v| v.same_node(node))
            .expect("node missing from topological order")
    }

    #[test]
    fn test_leaf_sorts_to_itself() {
        let a = Value::new(1.0);
        let sorted = topological_sort(&a);
        assert_eq!(sorted.len(), 1);
        assert!(sorted[0].same_node(&a));
    }

    #[test]
    fn test_predecessors_come_first() {
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        let c = &a + &b;
        let d = &a * &b;
        let e = &c * &d;

        let sorted = topological_sort(&e);
        assert_eq!(sorted.len(), 5, "shared leaves must appear once");
        assert!(sorted.last().unwrap().same_node(&e));
        assert!(position(&sorted, &a) < position(&sorted, &c));
        assert!(position(&sorted, &a) < position(&sorted, &d));
        assert!(position(&sorted, &b) < position(&sorted, &c));
        assert!(position(&sorted, &b) < position(&sorted, &d));
        assert!(position(&sorted, &c) < position(&sorted, &e));
        assert!(position(&sorted, &d) < position(&sorted, &e));
    }

    #[test]
    fn test_diamond_with_unbalanced_depth() {
        // r depends on a directly and through a longer path.
        let a = Value::new(1.5);
        let p = &a * 2.0;
        let q = &p + 1.0;
        let r = &q * &a;

        let sorted = topological_sort(&r);
        assert!(position(&sorted, &a) < position(&sorted, &p));
        assert!(position(&sorted, &p) < position(&sorted, &q));
        assert!(position(&sorted, &q) < position(&sorted, &r));
        let ids: HashSet<NodeId> = sorted.iter().map(Value::id).collect();
        assert_eq!(ids.len(), sorted.len());
    }

    #[test]
    fn test_self_operand_appears_once() {
        let a = Value::new(4.0);
        let b = &a * &a;
        let sorted = topological_sort(&b);
        assert_eq!(sorted.len(), 2);
    }

    #[test]
    fn test_node_id_follows_handle_identity() {
        let a = Value::new(1.0);
        let a2 = a.clone();
        let other = Value::new(1.0);
        assert_eq!(a.id(), a2.id());
        assert_ne!(a.id(), other.id());
    }
}
