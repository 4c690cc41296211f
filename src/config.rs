use tracing::warn;

pub const DEFAULT_LEAF_MAX: usize = 64;
pub const DEFAULT_REBALANCE_FACTOR: usize = 2;

/// Leaf sizing and rebalancing policy carried by every rope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub(crate) leaf_max: usize,
    pub(crate) rebalance_factor: usize,
    pub(crate) auto_rebalance: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { leaf_max: DEFAULT_LEAF_MAX, rebalance_factor: DEFAULT_REBALANCE_FACTOR, auto_rebalance: true }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of characters a built or fused leaf may hold. Clamped to at least 1.
    pub fn leaf_max(mut self, leaf_max: usize) -> Self {
        if leaf_max == 0 {
            warn!("leaf_max of 0 is not usable, using 1");
        }

        self.leaf_max = leaf_max.max(1);
        self
    }

    /// A rope counts as balanced while `height <= factor * ceil(log2(len + 1))`.
    pub fn rebalance_factor(mut self, factor: usize) -> Self {
        if factor == 0 {
            warn!("rebalance_factor of 0 is not usable, using 1");
        }

        self.rebalance_factor = factor.max(1);
        self
    }

    pub fn auto_rebalance(mut self, enabled: bool) -> Self {
        self.auto_rebalance = enabled;
        self
    }

    pub fn get_leaf_max(&self) -> usize {
        self.leaf_max
    }

    pub fn get_rebalance_factor(&self) -> usize {
        self.rebalance_factor
    }

    pub fn is_auto_rebalance(&self) -> bool {
        self.auto_rebalance
    }

    /// Greatest height a rope of `len` characters may reach before it needs a rebuild.
    pub(crate) fn height_limit(&self, len: usize) -> usize {
        let log2 = len.saturating_add(1).next_power_of_two().trailing_zeros() as usize;
        self.rebalance_factor * log2
    }
}
