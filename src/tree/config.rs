//! Configuration types for the tree walker

/// How many directory descents the walker may make from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecursionLimit {
    #[default]
    Unlimited,
    /// At most this many descents; `Limited(0)` lists the root only.
    Limited(usize),
}

impl RecursionLimit {
    /// Interpret the command-line value: any negative number means unlimited.
    pub fn from_cli(value: i64) -> Self {
        if value < 0 {
            RecursionLimit::Unlimited
        } else {
            RecursionLimit::Limited(usize::try_from(value).unwrap_or(usize::MAX))
        }
    }

    /// Whether another descent is allowed after `recursions_done` descents.
    pub fn allows(self, recursions_done: usize) -> bool {
        match self {
            RecursionLimit::Unlimited => true,
            RecursionLimit::Limited(max) => recursions_done < max,
        }
    }
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub max_recursion: RecursionLimit,
}
