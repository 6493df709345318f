//! Directory tree walking logic
//!
//! A walk lists one directory level at a time, orders the entries by name,
//! and hands each one to a [`TreeOutput`] before descending into it.

mod config;
mod entry;
mod sort;
mod traversal;
mod walker;

// Re-export public types
pub use config::{RecursionLimit, WalkerConfig};
pub use entry::{DirectoryEntry, EntryKind, list_entries};
pub use sort::{compare_names, merge_sort_by, sort_by_name};
pub use traversal::Traversal;
pub use walker::{TreeOutput, TreeWalker, WalkSummary};
