//! Project-level settings, read from an optional `nestch.json` next to the manifest.

use crate::error::{Error, Result};
use crate::utils::io;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "nestch.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Package manifest that marks the project root.
    pub manifest: String,
    /// Source root, relative to the project root.
    pub source_dir: String,
    /// File extensions whose content is rewritten.
    pub extensions: Vec<String>,
    /// Dependency names, any of which marks the project as supported.
    pub frameworks: Vec<String>,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            manifest: "package.json".to_string(),
            source_dir: "src".to_string(),
            extensions: vec!["ts".to_string()],
            frameworks: vec!["@nestjs/core".to_string(), "@nestjs/common".to_string()],
        }
    }
}

impl RenameConfig {
    /// Load `nestch.json` from the project root, falling back to defaults when absent.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let raw = io::read_file(&path, "read config")?;
        let config: RenameConfig = serde_json::from_str(&raw)
            .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;
        config.normalized()
    }

    /// Apply command-line overrides on top of the loaded settings.
    pub fn with_overrides(mut self, source_dir: Option<&str>, extensions: &[String]) -> Result<Self> {
        if let Some(dir) = source_dir {
            self.source_dir = dir.to_string();
        }
        if !extensions.is_empty() {
            self.extensions = extensions.to_vec();
        }
        self.normalized()
    }

    fn normalized(mut self) -> Result<Self> {
        self.extensions = self
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();

        if self.extensions.is_empty() {
            return Err(Error::config_invalid_value(
                "extensions",
                None,
                "at least one source extension is required",
            ));
        }
        if self.source_dir.trim().is_empty() {
            return Err(Error::config_invalid_value(
                "source_dir",
                Some(self.source_dir.clone()),
                "source directory cannot be empty",
            ));
        }
        if self.frameworks.is_empty() {
            return Err(Error::config_invalid_value(
                "frameworks",
                None,
                "at least one framework dependency is required",
            ));
        }
        Ok(self)
    }
}
