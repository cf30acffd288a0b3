//! Tree serialization
//!
//! [`preorder`] is the canonical text form of a finished tree and is what
//! gets persisted. [`render_indented`] is an outline for humans.

use super::tree::AstNode;

/// Assign `level` to every node, `level` at `node` and one deeper per step
pub fn compute_depth(node: &mut AstNode, level: usize) {
    node.level = level;
    for child in node.children.iter_mut().flatten() {
        compute_depth(child, level + 1);
    }
}

/// Deepest level in the tree, counting the root as 1
pub fn height(node: &AstNode) -> usize {
    1 + node.present_children().map(height).max().unwrap_or(0)
}

/// Fully parenthesized prefix form, e.g. `( if ( < a b ) ( = x 1 ) )`.
///
/// A leaf is just its label. Any other node is `( label` followed by its
/// non-empty slots in order 0 to 3, then `)`, single spaces between tokens.
pub fn preorder(node: &AstNode) -> String {
    let mut out = String::new();
    write_preorder(node, &mut out);
    out
}

fn write_preorder(node: &AstNode, out: &mut String) {
    if node.is_leaf() {
        out.push_str(&node.label);
        return;
    }

    out.push_str("( ");
    out.push_str(&node.label);
    for child in node.present_children() {
        out.push(' ');
        write_preorder(child, out);
    }
    out.push_str(" )");
}

/// Outline with two spaces of indent per level below the root.
/// Levels come from [`compute_depth`]; call it first.
pub fn render_indented(node: &AstNode) -> Vec<String> {
    let mut lines = Vec::new();
    let base = node.level;
    collect_outline(node, base, &mut lines);
    lines
}

fn collect_outline(node: &AstNode, base: usize, lines: &mut Vec<String>) {
    let indent = node.level.saturating_sub(base) * 2;
    lines.push(format!("{:indent$}{}", "", node.label, indent = indent));
    for child in node.present_children() {
        collect_outline(child, base, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AstNode {
        // if (a < b) x = 1;
        AstNode::with_children(
            "if",
            vec![
                AstNode::with_children("<", vec![AstNode::leaf("a"), AstNode::leaf("b")]),
                AstNode::with_children("=", vec![AstNode::leaf("x"), AstNode::leaf("1")]),
            ],
        )
    }

    #[test]
    fn test_preorder_spacing() {
        assert_eq!(preorder(&sample()), "( if ( < a b ) ( = x 1 ) )");
        assert_eq!(preorder(&AstNode::leaf("42")), "42");
    }

    #[test]
    fn test_preorder_skips_empty_slots() {
        let mut node = AstNode::leaf("for");
        node.children[1] = Some(Box::new(AstNode::leaf("c")));
        node.children[3] = Some(Box::new(AstNode::leaf("body")));
        assert_eq!(preorder(&node), "( for c body )");
    }

    #[test]
    fn test_compute_depth_and_outline() {
        let mut root = sample();
        compute_depth(&mut root, 1);
        assert_eq!(root.level, 1);
        assert_eq!(root.child(1).and_then(|n| n.child(0)).map(|n| n.level), Some(3));
        assert_eq!(height(&root), 3);

        let outline = render_indented(&root);
        assert_eq!(outline[0], "if");
        assert_eq!(outline[1], "  <");
        assert_eq!(outline[2], "    a");
        assert_eq!(outline.len(), 7);
    }
}
