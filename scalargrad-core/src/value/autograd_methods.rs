use crate::autograd::graph::topological_sort;
use crate::value::Value;
use log::debug;

impl Value {
    /// Performs the backward pass starting from this value.
    ///
    /// Orders every node reachable from `self` so that each node comes after its
    /// predecessors, seeds `self.grad` with 1.0, then walks the order in
    /// reverse. Each node's gradient is complete by the time it is visited,
    /// because every node that consumes it was visited earlier; its backward
    /// rule then adds the chain-rule contribution into each predecessor.
    ///
    /// Gradients are accumulated, never reset. Every node except the root keeps
    /// its gradient after the pass, intermediates included, so running
    /// `backward()` again on the same graph starts from those stale values and
    /// compounds rather than adds a single pass. Only the root's seed is assigned.
    /// Reset every node of the graph (e.g. via [`topological_sort`]) before
    /// re-running a pass on it. `Module::zero_grad` resets parameters only,
    /// which is enough when the graph is rebuilt for every step.
    pub fn backward(&self) {
        let sorted = topological_sort(self);
        debug!(
            "backward: {} nodes reachable from {:?}",
            sorted.len(),
            self.id()
        );

        self.set_grad(1.0);
        for node in sorted.iter().rev() {
            let op = node.backward_op();
            let input_grads = op.backward(node.grad());
            for (input, grad) in op.inputs().into_iter().zip(input_grads) {
                input.accumulate_grad(grad);
            }
        }
    }

    /// Resets this node's gradient to 0.0.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
