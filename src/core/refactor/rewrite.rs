use super::matcher::replace_all_literal;
use super::report::FailureStage;
use super::variants::RenameSpec;
use crate::error::Error;
use crate::utils::io;
use std::path::Path;

/// Apply each variant substitution of `spec` to `content`, in variant order.
///
/// Each substitution sees the output of the previous one. Returns `None`
/// when no variant occurred.
pub fn rewrite_content(content: &str, spec: &RenameSpec) -> Option<String> {
    let mut current: Option<String> = None;

    for variant in spec.variants.iter().filter(|v| v.from != v.to) {
        let source = current.as_deref().unwrap_or(content);
        if let Some(next) = replace_all_literal(source, &variant.from, &variant.to) {
            current = Some(next);
        }
    }

    current
}

/// Rewrite one eligible file in place.
///
/// Returns `Ok(true)` when a substitution fired. With `dry_run` set the file
/// is read but never written. Unchanged files are never written, so their
/// modification time is preserved.
pub(crate) fn rewrite_file(
    path: &Path,
    spec: &RenameSpec,
    dry_run: bool,
) -> Result<bool, (FailureStage, Error)> {
    let content = io::read_file(path, "read").map_err(|e| (FailureStage::Read, e))?;

    let Some(updated) = rewrite_content(&content, spec) else {
        return Ok(false);
    };

    if !dry_run {
        io::write_file(path, &updated, "write").map_err(|e| (FailureStage::Write, e))?;
    }

    Ok(true)
}
