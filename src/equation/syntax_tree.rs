//! Binary expression tree built from a flat equation

use std::collections::VecDeque;

/// A node of an equation tree. Operator nodes have exactly two children
/// (left operand, right operand); operand leaves have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTreeNode {
    pub value: String,
    pub children: Vec<SyntaxTreeNode>,
}

impl SyntaxTreeNode {
    pub fn leaf(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn binary(operator: impl Into<String>, left: SyntaxTreeNode, right: SyntaxTreeNode) -> Self {
        Self {
            value: operator.into(),
            children: vec![left, right],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// `parent -> child` pairs in breadth-first order.
    pub fn edges(&self) -> Vec<String> {
        let mut edges = Vec::new();
        let mut queue = VecDeque::from([self]);

        while let Some(node) = queue.pop_front() {
            for child in &node.children {
                edges.push(format!("{} -> {}", node.value, child.value));
                queue.push_back(child);
            }
        }

        edges
    }

    /// Depth of the tree; a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children.iter().map(|child| (child, depth + 1)));
        }

        deepest
    }
}

// Flat equations build left-deep trees, one level per operator; unlink
// children into a worklist so dropping never recurses.
impl Drop for SyntaxTreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_breadth_first() {
        let tree = SyntaxTreeNode::binary(
            "=",
            SyntaxTreeNode::leaf("x"),
            SyntaxTreeNode::binary(
                "+",
                SyntaxTreeNode::leaf("a"),
                SyntaxTreeNode::leaf("b"),
            ),
        );

        assert_eq!(tree.edges(), vec!["= -> x", "= -> +", "+ -> a", "+ -> b"]);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_deep_tree_measures_and_drops() {
        let mut tree = SyntaxTreeNode::leaf("a");
        for _ in 0..50_000 {
            tree = SyntaxTreeNode::binary("+", tree, SyntaxTreeNode::leaf("a"));
        }

        assert_eq!(tree.depth(), 50_001);
        assert_eq!(tree.edges().len(), 100_000);
        drop(tree);
    }

    #[test]
    fn test_leaf_has_no_edges() {
        let leaf = SyntaxTreeNode::leaf("42");
        assert!(leaf.is_leaf());
        assert!(leaf.edges().is_empty());
        assert_eq!(leaf.depth(), 1);
    }
}
