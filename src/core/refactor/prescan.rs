//! Read-only existence check run before any destructive pass.

use super::matcher::find_case_insensitive;
use super::variants::RenameSpec;
use super::walker::{list_entries, EntryKind};
use super::RenameOptions;
use crate::utils::io;
use std::path::Path;

/// Whether the old token occurs anywhere under `root`.
///
/// Looks at eligible files only: a hit is a file name containing the
/// plural variant (any case), or content containing the plural or
/// capitalized plural literal. Stops at the first hit.
pub fn token_exists(spec: &RenameSpec, root: &Path, options: &RenameOptions) -> bool {
    scan_dir(spec, root, options)
}

fn scan_dir(spec: &RenameSpec, dir: &Path, options: &RenameOptions) -> bool {
    let entries = match list_entries(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log_status!("prescan", "Skipping unreadable directory {}: {}", dir.display(), e);
            return false;
        }
    };

    for entry in entries {
        if entry.kind == EntryKind::Directory {
            if scan_dir(spec, &entry.path, options) {
                return true;
            }
        } else if entry.is_eligible(&options.extensions) && file_mentions(spec, &entry.path, &entry.name) {
            return true;
        }
    }

    false
}

fn file_mentions(spec: &RenameSpec, path: &Path, name: &str) -> bool {
    if find_case_insensitive(name, &spec.plural().from).is_some() {
        return true;
    }

    match io::read_file(path, "read") {
        Ok(content) => {
            content.contains(&spec.plural().from) || content.contains(&spec.plural_capital().from)
        }
        Err(e) => {
            log_status!("prescan", "Error reading file: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn options() -> RenameOptions {
        RenameOptions::default()
    }

    #[test]
    fn finds_token_in_nested_file_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("modules/admin")).unwrap();
        fs::write(dir.path().join("modules/admin/Users.controller.ts"), "").unwrap();

        let spec = RenameSpec::new("users", "members");
        assert!(token_exists(&spec, dir.path(), &options()));
    }

    #[test]
    fn finds_capitalized_plural_in_content() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.module.ts"), "imports: [UsersModule]").unwrap();

        let spec = RenameSpec::new("users", "members");
        assert!(token_exists(&spec, dir.path(), &options()));
    }

    #[test]
    fn ignores_non_eligible_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("users.json"), "users").unwrap();
        fs::write(dir.path().join("README.md"), "Users").unwrap();

        let spec = RenameSpec::new("users", "members");
        assert!(!token_exists(&spec, dir.path(), &options()));
    }

    #[test]
    fn singular_only_mentions_are_not_hits() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("user.entity.ts"), "class User {}").unwrap();

        let spec = RenameSpec::new("users", "members");
        assert!(!token_exists(&spec, dir.path(), &options()));
    }

    #[test]
    fn empty_or_missing_tree_is_not_found() {
        let dir = TempDir::new().unwrap();
        let spec = RenameSpec::new("users", "members");
        assert!(!token_exists(&spec, dir.path(), &options()));
        assert!(!token_exists(&spec, &dir.path().join("missing"), &options()));
    }

    #[test]
    fn unreadable_file_does_not_stop_the_scan() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.ts"), [0xffu8, 0xfe]).unwrap();
        fs::write(dir.path().join("b.ts"), "UsersService").unwrap();

        let spec = RenameSpec::new("users", "members");
        assert!(token_exists(&spec, dir.path(), &options()));
    }
}
