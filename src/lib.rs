//! lstree - recursive, sorted, colored directory listing

pub mod error;
pub mod logger;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{ConsoleFormatter, DisplayColor, OutputConfig};
pub use tree::{
    DirectoryEntry, EntryKind, RecursionLimit, TreeOutput, TreeWalker, WalkSummary, WalkerConfig,
    list_entries, sort_by_name,
};
