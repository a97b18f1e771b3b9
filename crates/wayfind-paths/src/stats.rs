use std::fmt;

/// Counters for one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Entries pushed onto the frontier, the seed included.
    pub pushed: usize,
    /// Entries popped after their node was already finalized.
    pub stale: usize,
    /// Nodes whose successors were generated.
    pub expanded: usize,
    /// Size of the finalized set when the search stopped.
    pub finalized: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pushed, {} stale, {} expanded, {} finalized",
            self.pushed, self.stale, self.expanded, self.finalized
        )
    }
}
