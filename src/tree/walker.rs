//! TreeWalker - depth-first listing, sorting, and rendering

use std::io;
use std::ops::AddAssign;
use std::path::Path;

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;
use super::entry::{DirectoryEntry, list_entries};
use super::sort::sort_by_name;
use super::traversal::Traversal;

/// Sink for walker output - receives each entry in render order.
pub trait TreeOutput {
    /// Render one entry at the given indentation depth.
    fn output_entry(&mut self, entry: &DirectoryEntry, depth: usize) -> io::Result<()>;

    /// Report a subtree that could not be listed.
    fn report_error(&mut self, error: &TreeError) -> io::Result<()>;
}

/// Counts gathered during one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Directory entries rendered (descended into or not).
    pub directories: usize,
    /// Non-directory entries rendered.
    pub files: usize,
    /// Subtrees reported as errors.
    pub errors: usize,
}

impl AddAssign for WalkSummary {
    fn add_assign(&mut self, other: Self) {
        self.directories += other.directories;
        self.files += other.files;
        self.errors += other.errors;
    }
}

/// Depth-first tree walker.
///
/// Each directory is listed, sorted by name, and rendered entry by entry;
/// a directory entry is descended into right after it is rendered, before
/// its next sibling, while the recursion budget allows.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk the tree under `root`, streaming entries to `output`.
    ///
    /// Directories that cannot be listed are reported through
    /// [`TreeOutput::report_error`] and skipped. Only output failures are
    /// returned as errors.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        self.walk_dir(root, Traversal::root(), output)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        path: &Path,
        state: Traversal,
        output: &mut O,
    ) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();

        let entries = match list_entries(path) {
            Ok(entries) => entries,
            Err(e) if e.is_recoverable() => {
                log::warn!("skipping {}: {}", path.display(), e);
                output.report_error(&e)?;
                summary.errors += 1;
                return Ok(summary);
            }
            Err(e) => return Err(e),
        };

        for entry in sort_by_name(entries) {
            output.output_entry(&entry, state.depth)?;

            if !entry.kind().is_dir() {
                summary.files += 1;
                continue;
            }
            summary.directories += 1;

            if state.can_descend(self.config.max_recursion) {
                let child = path.join(entry.name());
                log::debug!("descending into {}", child.display());
                summary += self.walk_dir(&child, state.descend(), output)?;
            } else {
                log::debug!(
                    "recursion limit reached, not descending into {}",
                    path.join(entry.name()).display()
                );
            }
        }

        Ok(summary)
    }
}
