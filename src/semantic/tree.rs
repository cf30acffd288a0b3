//! AST nodes and the construction stack
//!
//! An [`AstNode`] owns up to four children in fixed positional slots:
//!
//! | slot | binary | unary | `if`      | `for`     |
//! |------|--------|-------|-----------|-----------|
//! | 0    | left   | operand | condition | init    |
//! | 1    | right  |       | then      | condition |
//! | 2    |        |       | else      | increment |
//! | 3    |        |       |           | body      |
//!
//! [`TreeStack`] holds finished subtrees until a parent adopts them. Popping
//! more than it holds is a [`BuilderError`], never a panic.

use thiserror::Error;

/// Number of child slots per node
pub const SLOTS: usize = 4;

/// Builder invariant violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error("construction stack underflow building '{label}': needed {needed}, had {available}")]
    StackUnderflow {
        label: String,
        needed: usize,
        available: usize,
    },

    #[error("construction stack holds {depth} nodes at end of input, expected exactly 1")]
    UnbalancedStack { depth: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstNode {
    pub label: String,
    pub children: [Option<Box<AstNode>>; SLOTS],
    /// Depth from the root, set by [`crate::semantic::serialize::compute_depth`]
    pub level: usize,
}

impl AstNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        AstNode {
            label: label.into(),
            children: Default::default(),
            level: 0,
        }
    }

    /// Node whose first `children.len()` slots are filled in order
    pub fn with_children(label: impl Into<String>, children: Vec<AstNode>) -> Self {
        let mut node = AstNode::leaf(label);
        for (slot, child) in node.children.iter_mut().zip(children) {
            *slot = Some(Box::new(child));
        }
        node
    }

    pub fn child(&self, slot: usize) -> Option<&AstNode> {
        self.children.get(slot).and_then(|c| c.as_deref())
    }

    /// Non-empty children in slot order
    pub fn present_children(&self) -> impl Iterator<Item = &AstNode> {
        self.children.iter().filter_map(|c| c.as_deref())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

/// LIFO of finished subtrees
#[derive(Debug, Default)]
pub struct TreeStack {
    nodes: Vec<AstNode>,
}

impl TreeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: AstNode) {
        self.nodes.push(node);
    }

    /// Pop the top `count` nodes, returned in push order (oldest first).
    /// `label` names the construct for the error.
    pub fn pop_n(&mut self, count: usize, label: &str) -> Result<Vec<AstNode>, BuilderError> {
        if self.nodes.len() < count {
            return Err(BuilderError::StackUnderflow {
                label: label.to_string(),
                needed: count,
                available: self.nodes.len(),
            });
        }
        let start = self.nodes.len() - count;
        Ok(self.nodes.split_off(start))
    }

    pub fn pop(&mut self, label: &str) -> Result<AstNode, BuilderError> {
        self.nodes.pop().ok_or_else(|| BuilderError::StackUnderflow {
            label: label.to_string(),
            needed: 1,
            available: 0,
        })
    }

    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The single remaining root, if the stack is balanced
    pub fn into_root(mut self) -> Result<AstNode, BuilderError> {
        match self.nodes.len() {
            1 => self.pop("root"),
            depth => Err(BuilderError::UnbalancedStack { depth }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_n_keeps_push_order() {
        let mut stack = TreeStack::new();
        stack.push(AstNode::leaf("a"));
        stack.push(AstNode::leaf("b"));
        stack.push(AstNode::leaf("c"));

        let popped = stack.pop_n(2, "+").unwrap();
        let labels: Vec<_> = popped.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c"]);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_underflow_is_reported() {
        let mut stack = TreeStack::new();
        stack.push(AstNode::leaf("x"));
        let err = stack.pop_n(2, "=").unwrap_err();
        assert_eq!(
            err,
            BuilderError::StackUnderflow {
                label: "=".into(),
                needed: 2,
                available: 1
            }
        );
        // Failed pop leaves the stack alone
        assert_eq!(stack.depth(), 1);
        assert!(TreeStack::new().pop("if").is_err());
    }

    #[test]
    fn test_into_root_requires_singleton() {
        assert_eq!(
            TreeStack::new().into_root().unwrap_err(),
            BuilderError::UnbalancedStack { depth: 0 }
        );

        let mut stack = TreeStack::new();
        stack.push(AstNode::leaf("a"));
        stack.push(AstNode::leaf("b"));
        assert_eq!(
            stack.into_root().unwrap_err(),
            BuilderError::UnbalancedStack { depth: 2 }
        );
    }

    #[test]
    fn test_with_children_fills_slots_in_order() {
        let node = AstNode::with_children("if", vec![AstNode::leaf("c"), AstNode::leaf("t")]);
        assert_eq!(node.child(0).map(|n| n.label.as_str()), Some("c"));
        assert_eq!(node.child(1).map(|n| n.label.as_str()), Some("t"));
        assert!(node.child(2).is_none());
        assert_eq!(node.present_children().count(), 2);
    }
}
