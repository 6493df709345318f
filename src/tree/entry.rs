//! Directory entries and the single-level lister

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::{self, FileType};
use std::path::Path;

use crate::error::{Result, TreeError};

/// File-system type of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    RegularFile,
    Directory,
    NamedPipe,
    SymbolicLink,
    /// Sockets, device nodes, and anything the platform does not report.
    Other,
}

impl EntryKind {
    /// Classify a file type as reported by the directory listing.
    ///
    /// The type is not resolved through symlinks, so a link to a directory
    /// is a `SymbolicLink` and never descended into.
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::SymbolicLink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::RegularFile
        } else if is_fifo(&file_type) {
            EntryKind::NamedPipe
        } else {
            EntryKind::Other
        }
    }

    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}

#[cfg(unix)]
fn is_fifo(file_type: &FileType) -> bool {
    use std::os::unix::fs::FileTypeExt;
    file_type.is_fifo()
}

#[cfg(not(unix))]
fn is_fifo(_file_type: &FileType) -> bool {
    false
}

/// One child of a listed directory.
///
/// The entry does not know its parent; the walker rebuilds child paths
/// from the directory it is currently visiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: OsString,
    kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Raw bytes of the name, used for ordering.
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_encoded_bytes()
    }

    /// Name for display; invalid UTF-8 is replaced lossily.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Read the immediate children of `path`, in file-system order.
///
/// The `.` and `..` pseudo-entries are never returned. Entry types that
/// cannot be determined fall back to [`EntryKind::Other`]. The directory
/// handle is closed before returning on every path, including errors.
pub fn list_entries(path: &Path) -> Result<Vec<DirectoryEntry>> {
    let read_dir = fs::read_dir(path).map_err(|source| TreeError::DirectoryOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| TreeError::DirectoryRead {
            path: path.to_path_buf(),
            source,
        })?;

        let name = entry.file_name();
        if name == "." || name == ".." {
            continue;
        }

        let kind = entry
            .file_type()
            .map(EntryKind::from_file_type)
            .unwrap_or(EntryKind::Other);

        entries
            .try_reserve(1)
            .map_err(|source| TreeError::Allocation {
                path: path.to_path_buf(),
                source,
            })?;
        entries.push(DirectoryEntry::new(name, kind));
    }

    log::trace!("listed {} entries in {}", entries.len(), path.display());
    Ok(entries)
}
