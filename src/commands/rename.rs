use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

use nestch::config::RenameConfig;
use nestch::project;
use nestch::refactor::{self, CaseVariant, RenameOptions, RenameReport, RenameSpec};
use nestch::validation;
use nestch::Error;

use crate::commands::CmdResult;
use crate::tty;

#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Current resource name (e.g. users)
    pub old_name: String,
    /// New resource name (e.g. members)
    pub new_name: String,
    /// Project root containing package.json (default: current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,
    /// Source directory, relative to the project root (default: src)
    #[arg(long = "src", value_name = "DIR")]
    pub source_dir: Option<String>,
    /// Extension of files whose content is rewritten; repeatable (default: ts)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
    /// Show what would change without touching any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RenameOutput {
    #[serde(rename = "rename")]
    Rename {
        from: String,
        to: String,
        dry_run: bool,
        variants: Vec<CaseVariant>,
        renamed: Vec<RenameSummary>,
        rewritten: Vec<String>,
        failures: Vec<FailureSummary>,
        applied: bool,
    },
    #[serde(rename = "rename.cancelled")]
    Cancelled { from: String, to: String },
}

#[derive(Serialize)]
pub struct RenameSummary {
    pub from: String,
    pub to: String,
}

#[derive(Serialize)]
pub struct FailureSummary {
    pub stage: String,
    pub path: String,
    pub reason: String,
}

pub fn run(args: RenameArgs) -> CmdResult<RenameOutput> {
    let old_name = validation::require_token(&args.old_name, "old_name")?;
    let new_name = validation::require_token(&args.new_name, "new_name")?;

    let root = match &args.path {
        Some(path) => path.clone(),
        None => std::env::current_dir().map_err(|e| {
            Error::internal_io(e.to_string(), Some("resolve current directory".to_string()))
        })?,
    };

    let config = RenameConfig::load(&root)?
        .with_overrides(args.source_dir.as_deref(), &args.extensions)?;
    let layout = project::resolve(&root, &config)?;

    let spec = RenameSpec::new(old_name, new_name);
    let options = RenameOptions {
        extensions: config.extensions.clone(),
        dry_run: args.dry_run,
    };

    if !refactor::token_exists(&spec, &layout.source_root, &options) {
        return Err(Error::rename_token_not_found(
            old_name,
            relative(&layout.root, &layout.source_root),
        ));
    }

    if !args.yes && !args.dry_run {
        let question = format!("Do you want to rename '{}' to '{}'?", old_name, new_name);
        if !tty::confirm(&question)? {
            return Ok((
                RenameOutput::Cancelled {
                    from: old_name.to_string(),
                    to: new_name.to_string(),
                },
                0,
            ));
        }
    }

    tty::status("nestch is working...");
    let report = refactor::rename_tree(&spec, &layout.source_root, &options);

    Ok((
        summarize(old_name, new_name, &spec, &report, &layout.root),
        0,
    ))
}

fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

fn summarize(
    from: &str,
    to: &str,
    spec: &RenameSpec,
    report: &RenameReport,
    root: &Path,
) -> RenameOutput {
    RenameOutput::Rename {
        from: from.to_string(),
        to: to.to_string(),
        dry_run: !report.applied,
        variants: spec.variants.clone(),
        renamed: report
            .renamed
            .iter()
            .map(|r| RenameSummary {
                from: relative(root, &r.from),
                to: relative(root, &r.to),
            })
            .collect(),
        rewritten: report.rewritten.iter().map(|p| relative(root, p)).collect(),
        failures: report
            .failures
            .iter()
            .map(|f| FailureSummary {
                stage: f.stage.as_str().to_string(),
                path: relative(root, &f.path),
                reason: f.reason.clone(),
            })
            .collect(),
        applied: report.applied,
    }
}

impl RenameOutput {
    /// Plain-text report for terminal output.
    pub fn render_text(&self) -> String {
        let RenameOutput::Rename {
            dry_run,
            renamed,
            rewritten,
            failures,
            ..
        } = self
        else {
            return "Operation cancelled.".to_string();
        };

        let mut lines = Vec::new();

        if renamed.is_empty() {
            lines.push("No files or directories were renamed.".to_string());
        } else {
            lines.push(format!("[Renamed files/directories: {}]", renamed.len()));
            lines.extend(renamed.iter().map(|r| format!("  - {} -> {}", r.from, r.to)));
        }

        lines.push(String::new());
        if rewritten.is_empty() {
            lines.push("No file contents were updated.".to_string());
        } else {
            lines.push(format!("[Updated file contents: {}]", rewritten.len()));
            lines.extend(rewritten.iter().map(|f| format!("  - {}", f)));
        }

        if !failures.is_empty() {
            lines.push(String::new());
            lines.push(format!("[Failures: {}]", failures.len()));
            lines.extend(
                failures
                    .iter()
                    .map(|f| format!("  - {} {}: {}", f.stage, f.path, f.reason)),
            );
        }

        lines.push(String::new());
        if *dry_run {
            lines.push("Dry run: no files were changed.".to_string());
        } else {
            lines.push("Renaming completed successfully.".to_string());
        }

        lines.join("\n")
    }
}
