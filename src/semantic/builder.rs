//! Stack-driven AST assembly
//!
//! Operands are reduced before the construct that combines them, so every
//! constructor pops its children off the [`TreeStack`] most-recent-first and
//! places them back in source order.

use super::tree::{AstNode, BuilderError, TreeStack};
use tracing::trace;

#[derive(Debug, Default)]
pub struct AstBuilder {
    stack: TreeStack,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_leaf(&mut self, label: impl Into<String>) {
        let node = AstNode::leaf(label);
        trace!(label = %node.label, "leaf");
        self.stack.push(node);
    }

    /// Pop one node into slot 0
    pub fn push_unary(&mut self, label: &str) -> Result<(), BuilderError> {
        self.push_node(label, 1)
    }

    /// Pop right, then left
    pub fn push_binary(&mut self, label: &str) -> Result<(), BuilderError> {
        self.push_node(label, 2)
    }

    /// Pop then-branch and condition; the else slot stays empty
    pub fn push_if_then(&mut self) -> Result<(), BuilderError> {
        self.push_node("if", 2)
    }

    /// Pop else, then and condition
    pub fn push_if_then_else(&mut self) -> Result<(), BuilderError> {
        self.push_node("if", 3)
    }

    /// Pop body, increment, condition and init
    pub fn push_for(&mut self) -> Result<(), BuilderError> {
        self.push_node("for", 4)
    }

    /// Pop `arity` nodes and adopt them into slots `0..arity` in source order
    pub fn push_node(&mut self, label: &str, arity: usize) -> Result<(), BuilderError> {
        let children = self.stack.pop_n(arity, label)?;
        trace!(label, arity, "node");
        self.stack.push(AstNode::with_children(label, children));
        Ok(())
    }

    /// Discard the top subtree
    pub fn pop(&mut self, label: &str) -> Result<AstNode, BuilderError> {
        self.stack.pop(label)
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Hand over the root; exactly one node must remain
    pub fn finish(self) -> Result<AstNode, BuilderError> {
        self.stack.into_root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::serialize::preorder;

    #[test]
    fn test_binary_is_left_leaning() {
        let mut builder = AstBuilder::new();
        builder.push_leaf("a");
        builder.push_leaf("b");
        builder.push_binary("+").unwrap();
        builder.push_leaf("c");
        builder.push_binary("+").unwrap();

        let root = builder.finish().unwrap();
        assert_eq!(preorder(&root), "( + ( + a b ) c )");
    }

    #[test]
    fn test_if_else_slots() {
        let mut builder = AstBuilder::new();
        builder.push_leaf("c");
        builder.push_leaf("t");
        builder.push_leaf("e");
        builder.push_if_then_else().unwrap();

        let root = builder.finish().unwrap();
        let labels: Vec<_> = root.present_children().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["c", "t", "e"]);
    }

    #[test]
    fn test_for_takes_four() {
        let mut builder = AstBuilder::new();
        for label in ["i", "cond", "inc", "body"] {
            builder.push_leaf(label);
        }
        builder.push_for().unwrap();
        let root = builder.finish().unwrap();
        assert_eq!(root.child(3).map(|n| n.label.as_str()), Some("body"));
    }

    #[test]
    fn test_underflow_surfaces_as_error() {
        let mut builder = AstBuilder::new();
        builder.push_leaf("then");
        let err = builder.push_if_then().unwrap_err();
        assert!(matches!(
            err,
            BuilderError::StackUnderflow {
                needed: 2,
                available: 1,
                ..
            }
        ));
    }
}
