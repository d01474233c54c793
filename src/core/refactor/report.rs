use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file or directory rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Where in the run a recovered failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Rename,
    Read,
    Write,
    ListDir,
}

impl FailureStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureStage::Rename => "rename",
            FailureStage::Read => "read",
            FailureStage::Write => "write",
            FailureStage::ListDir => "list_dir",
        }
    }
}

/// A failure that was logged and skipped; the run carried on past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameFailure {
    pub stage: FailureStage,
    pub path: PathBuf,
    pub reason: String,
}

/// Everything a rename run did, in the order it happened.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenameReport {
    /// Successful renames (old path → new path).
    pub renamed: Vec<FileRename>,
    /// Files whose content was rewritten, at their post-rename path.
    pub rewritten: Vec<PathBuf>,
    /// Recovered per-entry failures.
    pub failures: Vec<RenameFailure>,
    /// Whether changes were written to disk (false for dry runs).
    pub applied: bool,
}

impl RenameReport {
    pub fn is_empty(&self) -> bool {
        self.renamed.is_empty() && self.rewritten.is_empty()
    }

    pub(crate) fn fail(&mut self, stage: FailureStage, path: PathBuf, reason: impl Into<String>) {
        let target = path.display().to_string();
        self.record(stage, path, target, reason.into());
    }

    /// Record a failed rename; `reason` carries only the OS error.
    pub(crate) fn fail_rename(&mut self, from: PathBuf, to: &Path, reason: impl Into<String>) {
        let target = format!("{} -> {}", from.display(), to.display());
        self.record(FailureStage::Rename, from, target, reason.into());
    }

    fn record(&mut self, stage: FailureStage, path: PathBuf, target: String, reason: String) {
        log_status!(
            "rename",
            "Failed to {}: {}\n  Reason: {}",
            stage.as_str(),
            target,
            reason
        );
        self.failures.push(RenameFailure {
            stage,
            path,
            reason,
        });
    }
}
