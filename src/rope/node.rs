use std::sync::Arc;

#[derive(Debug)]
pub(crate) enum Node {
    Leaf {
        text: String,
        len: usize,
    },
    Internal {
        left: Arc<Node>,
        right: Arc<Node>,
        weight: usize,
        len: usize,
        height: usize,
    },
}

impl Node {
    pub(crate) fn empty() -> Arc<Self> {
        Arc::new(Node::Leaf { text: String::new(), len: 0 })
    }

    #[cfg(test)]
    pub(crate) fn new_leaf(text: &str) -> Arc<Self> {
        Self::leaf_with_len(text.to_string(), text.chars().count())
    }

    /// `len` must be the character count of `text`.
    pub(crate) fn leaf_with_len(text: String, len: usize) -> Arc<Self> {
        Arc::new(Node::Leaf { text, len })
    }

    /// Both children must be non-empty.
    pub(crate) fn new_internal(left: Arc<Self>, right: Arc<Self>) -> Arc<Self> {
        debug_assert!(!left.is_empty() && !right.is_empty());

        Arc::new(Node::Internal {
            weight: left.len(),
            len: left.len() + right.len(),
            height: 1 + left.height().max(right.height()),
            left,
            right,
        })
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Node::Leaf { len, .. } => *len,
            Node::Internal { len, .. } => *len,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { height, .. } => *height,
        }
    }

    /// Walks down by weight. `index` must be below `self.len()`.
    pub(crate) fn char_at(&self, mut index: usize) -> Option<char> {
        let mut node = self;

        loop {
            match node {
                Node::Leaf { text, .. } => return text.chars().nth(index),
                Node::Internal { left, right, weight, .. } => {
                    if index < *weight {
                        node = left.as_ref();
                    } else {
                        index -= weight;
                        node = right.as_ref();
                    }
                }
            }
        }
    }

    pub(crate) fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { len: 0, .. } => 0,
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Byte offset of the character at `chars` in `text`, or `text.len()` past the end.
pub(crate) fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(offset, _)| offset)
}

/// Joins two subtrees. An empty side yields the other side, and small leaves are
/// fused so that runs of short appends stay flat.
pub(crate) fn join(left: Arc<Node>, right: Arc<Node>, leaf_max: usize) -> Arc<Node> {
    if left.is_empty() {
        return right;
    }
    if right.is_empty() {
        return left;
    }

    if left.len() + right.len() <= leaf_max {
        if let (Node::Leaf { text: l, .. }, Node::Leaf { text: r, .. }) = (left.as_ref(), right.as_ref()) {
            return fuse(l, r, left.len() + right.len());
        }
    }

    match (left.as_ref(), right.as_ref()) {
        (Node::Internal { left: ll, right: lr, .. }, Node::Leaf { text: r, len: r_len })
            if lr.len() + r_len <= leaf_max =>
        {
            if let Node::Leaf { text: l, len: l_len } = lr.as_ref() {
                return Node::new_internal(Arc::clone(ll), fuse(l, r, l_len + r_len));
            }
        }
        (Node::Leaf { text: l, len: l_len }, Node::Internal { left: rl, right: rr, .. })
            if l_len + rl.len() <= leaf_max =>
        {
            if let Node::Leaf { text: r, len: r_len } = rl.as_ref() {
                return Node::new_internal(fuse(l, r, l_len + r_len), Arc::clone(rr));
            }
        }
        _ => {}
    }

    Node::new_internal(left, right)
}

fn fuse(left: &str, right: &str, len: usize) -> Arc<Node> {
    let mut text = String::with_capacity(left.len() + right.len());
    text.push_str(left);
    text.push_str(right);
    Node::leaf_with_len(text, len)
}

/// Cuts a subtree at character `at`. Subtrees on either side of the cut are shared,
/// only the leaf holding the cut is copied.
pub(crate) fn split(node: &Arc<Node>, at: usize, leaf_max: usize) -> (Arc<Node>, Arc<Node>) {
    if at == 0 {
        return (Node::empty(), Arc::clone(node));
    }
    if at >= node.len() {
        return (Arc::clone(node), Node::empty());
    }

    match node.as_ref() {
        Node::Leaf { text, len } => {
            let (head, tail) = text.split_at(byte_offset(text, at));
            (Node::leaf_with_len(head.to_string(), at), Node::leaf_with_len(tail.to_string(), len - at))
        }
        Node::Internal { left, right, weight, .. } => {
            if at <= *weight {
                let (ll, lr) = split(left, at, leaf_max);
                (ll, join(lr, Arc::clone(right), leaf_max))
            } else {
                let (rl, rr) = split(right, at - weight, leaf_max);
                (join(Arc::clone(left), rl, leaf_max), rr)
            }
        }
    }
}

/// Walks the whole tree and panics on the first broken invariant. Returns `(len, height)`.
#[cfg(test)]
pub(crate) fn validate(node: &Node, leaf_max: usize) -> (usize, usize) {
    match node {
        Node::Leaf { text, len } => {
            assert_eq!(*len, text.chars().count(), "leaf length cache is stale");
            assert!(*len <= leaf_max, "leaf of {} chars exceeds leaf_max {}", len, leaf_max);
            (*len, 0)
        }
        Node::Internal { left, right, weight, len, height } => {
            let (left_len, left_height) = validate(left, leaf_max);
            let (right_len, right_height) = validate(right, leaf_max);

            assert!(left_len > 0 && right_len > 0, "internal node has an empty child");
            assert_eq!(*weight, left_len, "weight differs from left subtree length");
            assert_eq!(*len, weight + right_len, "length cache differs from weight + right");
            assert_eq!(*height, 1 + left_height.max(right_height), "height cache is stale");
            (*len, *height)
        }
    }
}
