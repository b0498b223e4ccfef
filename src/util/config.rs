//! Project configuration (`Bosun.toml`).
//!
//! Entirely optional: a project with no `Bosun.toml` gets the defaults,
//! which match an in-tree CMake + Ninja checkout named after its
//! directory.
//!
//! ```toml
//! [project]
//! name = "skiff"         # product name for the <name>-build tree
//! docs = "docs"          # documentation directory under the project root
//!
//! [tools]
//! generator = "cmake"    # project-file generator
//! executor = "ninja"     # build executor
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the per-project configuration file.
pub const CONFIG_FILE: &str = "Bosun.toml";

/// Bosun configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project settings
    pub project: ProjectConfig,

    /// External tool overrides
    pub tools: ToolsConfig,
}

/// Project-level settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Product name; the build tree lands in `<name>-build` beside the
    /// checkout. Defaults to the project root's directory name.
    pub name: Option<String>,

    /// Documentation directory under the project root, copied into the
    /// install tree. Defaults to `docs`.
    pub docs: Option<String>,
}

/// External tool overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Project-file generator (name or path). Defaults to `cmake`.
    pub generator: Option<PathBuf>,

    /// Build executor (name or path). Defaults to `ninja`.
    pub executor: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't
    /// exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("ignoring {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// The generator program to invoke.
    pub fn generator(&self) -> PathBuf {
        self.tools
            .generator
            .clone()
            .unwrap_or_else(|| PathBuf::from("cmake"))
    }

    /// The executor program to invoke.
    pub fn executor(&self) -> PathBuf {
        self.tools
            .executor
            .clone()
            .unwrap_or_else(|| PathBuf::from("ninja"))
    }

    /// Documentation directory name under the project root.
    pub fn docs_dir(&self) -> String {
        self.project.docs.clone().unwrap_or_else(|| "docs".to_string())
    }

    /// Product name for the `<product>-build` tree.
    pub fn product_name(&self, project_root: &Path) -> Result<String> {
        if let Some(ref name) = self.project.name {
            return Ok(name.clone());
        }

        match project_root.file_name().and_then(|n| n.to_str()) {
            Some(name) => Ok(name.to_string()),
            None => bail!(
                "cannot derive a product name from `{}`; set [project] name in {}",
                project_root.display(),
                CONFIG_FILE
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.generator(), PathBuf::from("cmake"));
        assert_eq!(config.executor(), PathBuf::from("ninja"));
        assert_eq!(config.docs_dir(), "docs");
        assert_eq!(
            config.product_name(Path::new("/work/skiff")).unwrap(),
            "skiff"
        );
    }

    #[test]
    fn test_parse_overrides() {
        let config: Config = toml::from_str(
            r#"
            [project]
            name = "skiff"

            [tools]
            generator = "/opt/cmake/bin/cmake"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.product_name(Path::new("/somewhere/checkout")).unwrap(),
            "skiff"
        );
        assert_eq!(config.generator(), PathBuf::from("/opt/cmake/bin/cmake"));
        // Unset sections keep their defaults.
        assert_eq!(config.executor(), PathBuf::from("ninja"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/Bosun.toml"));
        assert_eq!(config.generator(), PathBuf::from("cmake"));
    }

    #[test]
    fn test_load_or_default_malformed_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "not [valid toml").unwrap();

        let config = Config::load_or_default(&path);
        assert_eq!(config.executor(), PathBuf::from("ninja"));
    }
}
