use std::str;

use super::node::Node;

/// Leaf texts of a rope in order. Empty leaves are skipped.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Chunks<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf { text, .. } => {
                    if !text.is_empty() {
                        return Some(text.as_str());
                    }
                }
                Node::Internal { left, right, .. } => {
                    self.stack.push(right.as_ref());
                    self.stack.push(left.as_ref());
                }
            }
        }

        None
    }
}

/// Characters of a rope in order.
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    chunks: Chunks<'a>,
    current: str::Chars<'a>,
}

impl<'a> Chars<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Self { chunks: Chunks::new(root), current: "".chars() }
    }
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.current.next() {
                return Some(c);
            }

            self.current = self.chunks.next()?.chars();
        }
    }
}
