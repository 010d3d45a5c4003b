use crate::scalar::{NodeId, Scalar};
use std::collections::HashSet;

/// Sorts the sub-graph reachable from `root` in reverse topological order.
///
/// Every node appears before all of its operands, and each node appears exactly
/// once however many consumers it has. `root` is always first.
///
/// The sort is an iterative depth-first postorder (an explicit stack instead of
/// recursion, so long chains cannot overflow the call stack), reversed at the end.
/// The visited set is keyed by node identity, never by value.
pub fn topological_sort(root: &Scalar) -> Vec<Scalar> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut postorder: Vec<Scalar> = Vec::new();
    // (node, operands_done): a node is pushed once to expand it and once more to
    // emit it after everything it depends on has been emitted.
    let mut stack: Vec<(Scalar, bool)> = vec![(root.clone(), false)];

    while let Some((node, operands_done)) = stack.pop() {
        if operands_done {
            postorder.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }

        let operands = node.operands();
        stack.push((node, true));
        // Reversed so operand 0 is expanded first.
        for operand in operands.into_iter().rev() {
            if !visited.contains(&operand.node_id()) {
                stack.push((operand, false));
            }
        }
    }

    postorder.reverse();
    postorder
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
