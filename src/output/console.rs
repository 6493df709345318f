//! Console output formatter
//!
//! This module provides `ConsoleFormatter` which writes each entry as it is
//! visited: one tab per depth level, the name colored by entry kind, a line
//! terminator, then a color reset. Diagnostics go to a separate stream.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::error::TreeError;
use crate::tree::{DirectoryEntry, TreeOutput};

use super::color::DisplayColor;
use super::config::OutputConfig;

const INDENT: &str = "\t";

/// Streaming console formatter.
/// Implements the TreeOutput trait for use with TreeWalker.
pub struct ConsoleFormatter<W, E> {
    config: OutputConfig,
    out: W,
    err: E,
}

impl ConsoleFormatter<StandardStream, io::Stderr> {
    /// Formatter writing the tree to stdout and diagnostics to stderr.
    pub fn stdio(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice), io::stderr())
    }
}

impl<W: WriteColor, E: Write> ConsoleFormatter<W, E> {
    pub fn new(config: OutputConfig, out: W, err: E) -> Self {
        Self { config, out, err }
    }

    /// Print the resolved starting path ahead of the tree.
    pub fn write_banner(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "Current working dir: {}", root.display())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: WriteColor, E: Write> TreeOutput for ConsoleFormatter<W, E> {
    fn output_entry(&mut self, entry: &DirectoryEntry, depth: usize) -> io::Result<()> {
        for _ in 0..depth {
            write!(self.out, "{}", INDENT)?;
        }

        if self.config.use_color {
            self.out
                .set_color(&DisplayColor::for_kind(entry.kind()).spec())?;
            writeln!(self.out, "{}", entry.display_name())?;
            self.out.reset()?;
        } else {
            writeln!(self.out, "{}", entry.display_name())?;
        }
        Ok(())
    }

    fn report_error(&mut self, error: &TreeError) -> io::Result<()> {
        // Keep stdout ordered ahead of the diagnostic when both go to a terminal
        self.out.flush()?;
        writeln!(self.err, "lstree: {}", error)
    }
}
