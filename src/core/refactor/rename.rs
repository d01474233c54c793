//! Rename engine: walk the tree, rename entries, rewrite eligible files.
//!
//! Directories are renamed before they are descended into, and the descent
//! always uses the path that is valid after the rename attempt. Failures are
//! recorded and skipped; nothing already committed is rolled back.

use super::matcher::replace_first_case_insensitive;
use super::report::{FailureStage, FileRename, RenameReport};
use super::rewrite::rewrite_file;
use super::variants::RenameSpec;
use super::walker::{list_entries, EntryKind};
use std::fs;
use std::path::{Path, PathBuf};

/// Knobs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// Extensions (without the dot) whose content is rewritten.
    pub extensions: Vec<String>,
    /// Walk and compute everything but change nothing on disk.
    pub dry_run: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["ts".to_string()],
            dry_run: false,
        }
    }
}

/// Compute the new leaf name for `name`.
///
/// The plural substitution runs first; the singular substitution then runs
/// on its result, so a name can be rewritten by both. Only the first
/// occurrence of each variant is replaced.
pub fn renamed_leaf(name: &str, spec: &RenameSpec) -> String {
    let mut leaf = name.to_string();

    for variant in [spec.plural(), spec.singular()] {
        if variant.from == variant.to {
            continue;
        }
        if let Some(next) = replace_first_case_insensitive(&leaf, &variant.from, &variant.to) {
            leaf = next;
        }
    }

    leaf
}

/// Rename and rewrite everything under `root` (the root itself is kept).
pub fn rename_tree(spec: &RenameSpec, root: &Path, options: &RenameOptions) -> RenameReport {
    let mut report = RenameReport {
        applied: !options.dry_run,
        ..RenameReport::default()
    };

    if spec.is_noop() {
        return report;
    }

    walk_dir(spec, root, root, options, &mut report);
    report
}

/// Process one directory level.
///
/// `current` is where the directory lives on disk right now. `projected` is
/// where it would live had every rename been committed; the two differ only
/// in dry runs, and the report always speaks in projected paths.
fn walk_dir(
    spec: &RenameSpec,
    current: &Path,
    projected: &Path,
    options: &RenameOptions,
    report: &mut RenameReport,
) {
    let entries = match list_entries(current) {
        Ok(entries) => entries,
        Err(e) => {
            report.fail(FailureStage::ListDir, projected.to_path_buf(), e.to_string());
            return;
        }
    };

    for entry in entries {
        let new_name = renamed_leaf(&entry.name, spec);
        let (next_current, next_projected) =
            rename_entry(&entry.path, current, projected, &entry.name, &new_name, options, report);

        match entry.kind {
            EntryKind::Directory => walk_dir(spec, &next_current, &next_projected, options, report),
            EntryKind::File if entry.is_eligible(&options.extensions) => {
                match rewrite_file(&next_current, spec, options.dry_run) {
                    Ok(true) => report.rewritten.push(next_projected),
                    Ok(false) => {}
                    Err((stage, e)) => report.fail(stage, next_projected, e.message),
                }
            }
            _ => {}
        }
    }
}

/// Attempt one rename. Returns the (current, projected) paths to use from
/// here on: the new ones on success, the old ones on failure.
fn rename_entry(
    old_path: &Path,
    current_parent: &Path,
    projected_parent: &Path,
    old_name: &str,
    new_name: &str,
    options: &RenameOptions,
    report: &mut RenameReport,
) -> (PathBuf, PathBuf) {
    let projected_old = projected_parent.join(old_name);
    if new_name == old_name {
        return (old_path.to_path_buf(), projected_old);
    }

    let projected_new = projected_parent.join(new_name);

    if options.dry_run {
        report.renamed.push(FileRename {
            from: projected_old,
            to: projected_new.clone(),
        });
        return (old_path.to_path_buf(), projected_new);
    }

    let new_path = current_parent.join(new_name);
    match fs::rename(old_path, &new_path) {
        Ok(()) => {
            log_status!("rename", "{} -> {}", old_path.display(), new_path.display());
            report.renamed.push(FileRename {
                from: old_path.to_path_buf(),
                to: new_path.clone(),
            });
            (new_path, projected_new)
        }
        Err(e) => {
            report.fail_rename(old_path.to_path_buf(), &new_path, e.to_string());
            (old_path.to_path_buf(), projected_old)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn spec() -> RenameSpec {
        RenameSpec::new("users", "members")
    }

    #[test]
    fn renamed_leaf_plural_then_singular() {
        let spec = spec();
        assert_eq!(renamed_leaf("users.controller.ts", &spec), "members.controller.ts");
        assert_eq!(renamed_leaf("user.entity.ts", &spec), "member.entity.ts");
        assert_eq!(renamed_leaf("app.module.ts", &spec), "app.module.ts");
    }

    #[test]
    fn renamed_leaf_applies_both_variants() {
        let spec = spec();
        assert_eq!(renamed_leaf("users-to-user.ts", &spec), "members-to-member.ts");
    }

    #[test]
    fn renamed_leaf_lowercases_matched_span_only() {
        let spec = spec();
        assert_eq!(renamed_leaf("CreateUserDto.ts", &spec), "CreatememberDto.ts");
    }

    #[test]
    fn renamed_leaf_layers_over_new_token() {
        let spec = RenameSpec::new("users", "superusers");
        assert_eq!(renamed_leaf("users.ts", &spec), "supersuperusers.ts");
    }

    #[test]
    fn renames_directory_then_recurses_into_new_path() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("users")).unwrap();
        fs::write(dir.path().join("users/users.module.ts"), "export class UsersModule {}").unwrap();

        let report = rename_tree(&spec(), dir.path(), &RenameOptions::default());

        let module = dir.path().join("members/members.module.ts");
        assert!(module.is_file());
        assert!(!dir.path().join("users").exists());
        assert_eq!(fs::read_to_string(&module).unwrap(), "export class MembersModule {}");
        assert_eq!(
            report.renamed,
            vec![
                FileRename {
                    from: dir.path().join("users"),
                    to: dir.path().join("members"),
                },
                FileRename {
                    from: dir.path().join("members/users.module.ts"),
                    to: module.clone(),
                },
            ]
        );
        assert_eq!(report.rewritten, vec![module]);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn root_directory_itself_is_not_renamed() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("users");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("main.ts"), "bootstrap();").unwrap();

        let report = rename_tree(&spec(), &root, &RenameOptions::default());
        assert!(root.is_dir());
        assert!(report.is_empty());
    }

    #[test]
    fn non_eligible_files_are_renamed_but_not_rewritten() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("users.json"), "{\"users\": []}").unwrap();

        let report = rename_tree(&spec(), dir.path(), &RenameOptions::default());
        assert_eq!(report.renamed.len(), 1);
        assert!(report.rewritten.is_empty());
        assert_eq!(
            fs::read_to_string(dir.path().join("members.json")).unwrap(),
            "{\"users\": []}"
        );
    }

    #[test]
    fn failed_directory_rename_recurses_into_old_path() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("users")).unwrap();
        fs::write(dir.path().join("users/index.ts"), "export * from './user.entity';").unwrap();
        // A non-empty directory at the target makes the rename fail.
        fs::create_dir(dir.path().join("members")).unwrap();
        fs::write(dir.path().join("members/keep.txt"), "").unwrap();

        let report = rename_tree(&spec(), dir.path(), &RenameOptions::default());

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].stage, FailureStage::Rename);
        assert_eq!(report.failures[0].path, dir.path().join("users"));
        assert!(!report.failures[0].reason.contains(" -> "));
        assert_eq!(
            fs::read_to_string(dir.path().join("users/index.ts")).unwrap(),
            "export * from './member.entity';"
        );
        assert_eq!(report.rewritten, vec![dir.path().join("users/index.ts")]);
    }

    #[test]
    fn dry_run_reports_projected_paths_without_touching_disk() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("users")).unwrap();
        fs::write(dir.path().join("users/users.service.ts"), "class UsersService {}").unwrap();

        let options = RenameOptions {
            dry_run: true,
            ..RenameOptions::default()
        };
        let report = rename_tree(&spec(), dir.path(), &options);

        assert!(!report.applied);
        assert_eq!(
            report.renamed[1],
            FileRename {
                from: dir.path().join("members/users.service.ts"),
                to: dir.path().join("members/members.service.ts"),
            }
        );
        assert_eq!(report.rewritten, vec![dir.path().join("members/members.service.ts")]);
        assert!(dir.path().join("users/users.service.ts").is_file());
        assert_eq!(
            fs::read_to_string(dir.path().join("users/users.service.ts")).unwrap(),
            "class UsersService {}"
        );
    }

    #[test]
    fn noop_spec_touches_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Users.controller.ts"), "class UsersController {}").unwrap();

        let report = rename_tree(&RenameSpec::new("users", "users"), dir.path(), &RenameOptions::default());
        assert!(report.is_empty());
        assert!(dir.path().join("Users.controller.ts").is_file());
    }

    #[test]
    fn unlistable_root_is_recorded() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let report = rename_tree(&spec(), &missing, &RenameOptions::default());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].stage, FailureStage::ListDir);
    }
}
