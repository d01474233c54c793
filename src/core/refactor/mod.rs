//! Resource renaming — rename a concept across a source tree.
//!
//! Derives singular/plural and capitalized variants of the old and new
//! tokens, checks the old token actually occurs, then renames files and
//! directories in place and rewrites the content of eligible source files.

mod matcher;
mod morphology;
mod prescan;
mod rename;
mod report;
mod rewrite;
mod variants;
mod walker;

pub use matcher::{find_case_insensitive, replace_all_literal, replace_first_case_insensitive};
pub use morphology::{capitalize, pluralize, singularize};
pub use prescan::token_exists;
pub use rename::{rename_tree, renamed_leaf, RenameOptions};
pub use report::{FailureStage, FileRename, RenameFailure, RenameReport};
pub use rewrite::rewrite_content;
pub use variants::{CaseVariant, RenameSpec};
pub use walker::{list_entries, Entry, EntryKind};
