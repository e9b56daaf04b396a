//! Search bounding configuration.

/// Default ancestor-chain length at which bounded strategies cut off.
pub const DEFAULT_DEPTH_BOUND: usize = 10;

/// Default frontier admission cap for bounded strategies.
pub const DEFAULT_MAX_FRONTIER_SIZE: usize = 100;

/// Configuration shared by every search strategy.
///
/// Both bounds are soft: reaching the depth bound returns the current node
/// as an acceptable cutoff, and children arriving at a full frontier are
/// silently dropped. Neither is an error.
///
/// # Examples
///
/// ```
/// use world_trader::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_depth_bound(25)
///     .with_max_frontier_size(20_000);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum ancestor-chain length (root = 1) before bounded strategies
    /// terminate with the current node.
    pub depth_bound: usize,

    /// Frontier admission cap. Children generated while the frontier is at
    /// this size are dropped, trading completeness for bounded memory.
    pub max_frontier_size: usize,

    /// Tree-based expansion: no reached set, duplicate states may be
    /// re-expanded. Graph-based expansion (the default) dedups by content
    /// hash.
    pub tree_based: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_bound: DEFAULT_DEPTH_BOUND,
            max_frontier_size: DEFAULT_MAX_FRONTIER_SIZE,
            tree_based: false,
        }
    }
}

impl SearchConfig {
    pub fn with_depth_bound(mut self, bound: usize) -> Self {
        self.depth_bound = bound;
        self
    }

    pub fn with_max_frontier_size(mut self, size: usize) -> Self {
        self.max_frontier_size = size;
        self
    }

    pub fn with_tree_based(mut self, tree_based: bool) -> Self {
        self.tree_based = tree_based;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.depth_bound == 0 {
            return Err("depth_bound must be at least 1".into());
        }
        if self.max_frontier_size == 0 {
            return Err("max_frontier_size must be at least 1".into());
        }
        Ok(())
    }
}
