use std::sync::Arc;

use tracing::trace;

use super::node::{byte_offset, Node};

/// Builds a balanced tree over `text` with leaves of at most `leaf_max` characters.
///
/// The text is cut in one pass into `ceil(n / leaf_max)` leaves whose sizes differ by
/// at most one, then the leaves are paired up by repeated midpoint partition. The
/// resulting height is `ceil(log2(leaf count))`.
pub(crate) fn build(text: &str, leaf_max: usize) -> Arc<Node> {
    let chars = text.chars().count();
    if chars == 0 {
        return Node::empty();
    }

    let count = chars.div_ceil(leaf_max);
    let (base, extra) = (chars / count, chars % count);
    trace!(chars, leaves = count, "building rope");

    let mut leaves = Vec::with_capacity(count);
    let mut rest = text;
    for n in 0..count {
        let take = base + usize::from(n < extra);
        let (head, tail) = rest.split_at(byte_offset(rest, take));
        leaves.push(Node::leaf_with_len(head.to_string(), take));
        rest = tail;
    }

    assemble(&leaves)
}

fn assemble(leaves: &[Arc<Node>]) -> Arc<Node> {
    match leaves {
        [] => Node::empty(),
        [leaf] => Arc::clone(leaf),
        _ => {
            let mid = leaves.len() / 2;
            Node::new_internal(assemble(&leaves[..mid]), assemble(&leaves[mid..]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::node::validate;
    use super::*;

    #[test]
    fn empty_text_builds_empty_leaf() {
        let node = build("", 4);
        assert!(node.is_empty());
        assert_eq!(node.height(), 0);
    }

    #[test]
    fn short_text_is_single_leaf() {
        let node = build("abcd", 4);
        assert!(matches!(node.as_ref(), Node::Leaf { len: 4, .. }));
    }

    #[test]
    fn leaves_are_bounded_and_even() {
        let node = build("abcdefghij", 4);
        validate(&node, 4);
        assert_eq!(node.len(), 10);
        assert_eq!(node.leaf_count(), 3);
        assert_eq!(node.height(), 2);
    }

    #[test]
    fn height_is_logarithmic() {
        let text = "x".repeat(64 * 1024);
        let node = build(&text, 64);
        validate(&node, 64);
        assert_eq!(node.leaf_count(), 1024);
        assert_eq!(node.height(), 10);
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        let text = "日本語のテキスト✓";
        let node = build(text, 2);
        validate(&node, 2);
        assert_eq!(node.len(), 9);
        assert_eq!(node.char_at(8), Some('✓'));
        assert_eq!(node.char_at(0), Some('日'));
    }
}
