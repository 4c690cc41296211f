//! A persistent rope: a balanced binary tree of text leaves.
//!
//! Every index counts characters (`char`s), never bytes. Edits return new ropes that
//! share untouched subtrees with the rope they came from, so cloning and keeping old
//! versions around is cheap.

mod builder;
mod iter;
mod node;

use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};

use tracing::debug;

use crate::config::Config;
use crate::error::{check_position, check_range, Result, RopeError};

use self::node::Node;

pub use self::iter::{Chars, Chunks};

#[derive(Debug, Clone)]
pub struct Rope {
    root: Arc<Node>,
    len: usize,
    config: Config,
}

impl Default for Rope {
    fn default() -> Self {
        Self::new()
    }
}

impl Rope {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self { root: Node::empty(), len: 0, config }
    }

    pub fn build(text: &str) -> Self {
        Self::build_with(text, Config::default())
    }

    pub fn build_with(text: &str, config: Config) -> Self {
        Self::from_root(builder::build(text, config.leaf_max), config)
    }

    fn from_root(root: Arc<Node>, config: Config) -> Self {
        Self { len: root.len(), root, config }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn char_at(&self, index: usize) -> Result<char> {
        if index >= self.len {
            return Err(RopeError::IndexOutOfRange { index, bound: self.len });
        }

        self.root.char_at(index).ok_or(RopeError::IndexOutOfRange { index, bound: self.len })
    }

    /// Splits into `[0, index)` and `[index, len)`. Both halves keep this rope's config.
    pub fn split(&self, index: usize) -> Result<(Rope, Rope)> {
        check_position(index, self.len)?;

        let (left, right) = node::split(&self.root, index, self.config.leaf_max);
        Ok((self.derive(left), self.derive(right)))
    }

    /// Joins `other` after `self`. The result keeps `self`'s config.
    pub fn concat(&self, other: &Rope) -> Rope {
        self.derive(node::join(Arc::clone(&self.root), Arc::clone(&other.root), self.config.leaf_max))
    }

    pub fn insert_at(&self, index: usize, text: &str) -> Result<Rope> {
        check_position(index, self.len)?;
        if text.is_empty() {
            return Ok(self.clone());
        }

        let (left, right) = self.split(index)?;
        let middle = Rope::build_with(text, self.config);
        Ok(left.concat(&middle).concat(&right))
    }

    /// Removes `[start, end)`. Both cuts are taken from this rope, not from each other.
    pub fn delete_range(&self, start: usize, end: usize) -> Result<Rope> {
        check_range(start, end, self.len)?;

        let (low, _) = self.split(start)?;
        let (_, high) = self.split(end)?;
        Ok(low.concat(&high))
    }

    pub fn substring(&self, start: usize, end: usize) -> Result<String> {
        check_range(start, end, self.len)?;

        let (_, rest) = self.split(start)?;
        let (middle, _) = rest.split(end - start)?;
        Ok(middle.collect())
    }

    pub fn collect(&self) -> String {
        let mut text = String::with_capacity(self.len);
        self.chunks().for_each(|chunk| text.push_str(chunk));
        text
    }

    pub fn chars(&self) -> Chars<'_> {
        Chars::new(&self.root)
    }

    pub fn chunks(&self) -> Chunks<'_> {
        Chunks::new(&self.root)
    }

    pub fn is_balanced(&self) -> bool {
        self.height() <= self.config.height_limit(self.len)
    }

    /// Rebuilds the tree from its flattened text.
    pub fn rebalance(&self) -> Rope {
        let rebuilt = Rope::build_with(&self.collect(), self.config);
        debug!(len = self.len, from = self.height(), to = rebuilt.height(), "rebalanced rope");
        rebuilt
    }

    fn derive(&self, root: Arc<Node>) -> Rope {
        let rope = Self::from_root(root, self.config);
        if rope.config.auto_rebalance && !rope.is_balanced() {
            return rope.rebalance();
        }

        rope
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Self {
        Self::build(text)
    }
}

impl From<String> for Rope {
    fn from(text: String) -> Self {
        Self::build(&text)
    }
}

impl FromStr for Rope {
    type Err = Infallible;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::build(text))
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chunks().try_for_each(|chunk| f.write_str(chunk))
    }
}

impl PartialEq for Rope {
    fn eq(&self, other: &Rope) -> bool {
        self.len == other.len && self.chars().eq(other.chars())
    }
}

impl Eq for Rope {}

impl PartialEq<str> for Rope {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for Rope {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for Rope {
    fn eq(&self, other: &String) -> bool {
        *self == **other
    }
}
