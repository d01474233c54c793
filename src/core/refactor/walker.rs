//! Directory listing for the rename passes.
//!
//! Only one level is listed at a time. Recursion is driven by the callers,
//! because the renamer must descend into a directory's post-rename path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Symlinks, sockets, fifos. Renamed like files, never followed or read.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub name: String,
}

impl Entry {
    /// Whether this entry's content should be scanned and rewritten.
    pub fn is_eligible(&self, extensions: &[String]) -> bool {
        self.kind == EntryKind::File && has_extension(&self.name, extensions)
    }
}

fn has_extension(name: &str, extensions: &[String]) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|allowed| allowed == ext))
        .unwrap_or(false)
}

/// List the immediate entries of `dir`, directories first, then by name.
///
/// Entries whose names are not valid UTF-8, or whose type cannot be read,
/// are skipped.
pub fn list_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)?.flatten() {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        entries.push(Entry {
            path: entry.path(),
            kind,
            name,
        });
    }

    entries.sort_by(|a, b| {
        let a_dir = a.kind == EntryKind::Directory;
        let b_dir = b.kind == EntryKind::Directory;
        b_dir.cmp(&a_dir).then_with(|| a.name.cmp(&b.name))
    });

    Ok(entries)
}
