//! Project preconditions: manifest present, framework declared, source root present.

use crate::config::RenameConfig;
use crate::error::{Error, Result};
use crate::utils::io;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub manifest: PathBuf,
    pub source_root: PathBuf,
}

/// Validate `root` as a supported project and locate its source root.
pub fn resolve(root: &Path, config: &RenameConfig) -> Result<ProjectLayout> {
    let manifest = root.join(&config.manifest);
    if !manifest.is_file() {
        return Err(Error::project_manifest_not_found(
            manifest.display().to_string(),
        ));
    }

    let raw = io::read_file(&manifest, "read manifest")?;
    let parsed: Value = serde_json::from_str(&raw)
        .map_err(|e| Error::config_invalid_json(manifest.display().to_string(), e))?;

    if !declares_framework(&parsed, &config.frameworks) {
        return Err(Error::project_unsupported(
            manifest.display().to_string(),
            config.frameworks.clone(),
        ));
    }

    let source_root = root.join(&config.source_dir);
    if !source_root.is_dir() {
        return Err(Error::project_source_root_not_found(
            source_root.display().to_string(),
        ));
    }

    Ok(ProjectLayout {
        root: root.to_path_buf(),
        manifest,
        source_root,
    })
}

/// True when any framework has a truthy entry once both sections are merged.
/// An entry in `devDependencies` shadows the same name in `dependencies`.
fn declares_framework(manifest: &Value, frameworks: &[String]) -> bool {
    let section = |name: &str| manifest.get(name).and_then(Value::as_object);
    let (deps, dev_deps) = (section("dependencies"), section("devDependencies"));

    frameworks.iter().any(|name| {
        dev_deps
            .and_then(|d| d.get(name))
            .or_else(|| deps.and_then(|d| d.get(name)))
            .map(is_truthy)
            .unwrap_or(false)
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, manifest: &Value) {
        std::fs::write(dir.join("package.json"), manifest.to_string()).unwrap();
    }

    #[test]
    fn resolves_nest_project_with_src() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), &json!({ "dependencies": { "@nestjs/core": "^10.0.0" } }));
        std::fs::create_dir(dir.path().join("src")).unwrap();

        let layout = resolve(dir.path(), &RenameConfig::default()).unwrap();
        assert_eq!(layout.source_root, dir.path().join("src"));
        assert_eq!(layout.manifest, dir.path().join("package.json"));
    }

    #[test]
    fn dev_dependency_is_enough() {
        let manifest = json!({ "devDependencies": { "@nestjs/common": "10.3.1" } });
        assert!(declares_framework(&manifest, &RenameConfig::default().frameworks));
    }

    #[test]
    fn dev_dependency_entry_shadows_dependency_entry() {
        let manifest = json!({
            "dependencies": { "@nestjs/core": "^10.0.0" },
            "devDependencies": { "@nestjs/core": "" }
        });
        assert!(!declares_framework(&manifest, &RenameConfig::default().frameworks));

        let manifest = json!({
            "dependencies": { "@nestjs/core": "" },
            "devDependencies": { "@nestjs/core": "^10.0.0" }
        });
        assert!(declares_framework(&manifest, &RenameConfig::default().frameworks));
    }

    #[test]
    fn empty_version_is_not_a_declaration() {
        let manifest = json!({ "dependencies": { "@nestjs/core": "" } });
        assert!(!declares_framework(&manifest, &RenameConfig::default().frameworks));
    }

    #[test]
    fn missing_manifest_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = resolve(dir.path(), &RenameConfig::default()).unwrap_err();
        assert_eq!(err.code.as_str(), "project.manifest_not_found");
    }

    #[test]
    fn non_nest_project_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), &json!({ "dependencies": { "express": "^4.0.0" } }));
        std::fs::create_dir(dir.path().join("src")).unwrap();

        let err = resolve(dir.path(), &RenameConfig::default()).unwrap_err();
        assert_eq!(err.code.as_str(), "project.unsupported");
        assert_eq!(err.message, "This is not a NestJS project.");
    }

    #[test]
    fn malformed_manifest_is_config_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), "{").unwrap();

        let err = resolve(dir.path(), &RenameConfig::default()).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
    }

    #[test]
    fn missing_source_root_is_reported() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), &json!({ "dependencies": { "@nestjs/core": "^10.0.0" } }));

        let err = resolve(dir.path(), &RenameConfig::default()).unwrap_err();
        assert_eq!(err.code.as_str(), "project.source_root_not_found");
        assert_eq!(err.message, "src directory not found.");
    }
}
