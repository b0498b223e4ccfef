//! High-level operations.
//!
//! One entry-point function per pipeline, each taking its resolved inputs
//! explicitly. No module-scope execution and no process-wide mutable
//! state: everything a pipeline reads is computed once into a
//! [`BuildContext`] and shared immutably with its phases.

pub mod build;
pub mod examples;
pub mod install;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::layout::PathSet;
use crate::core::params::BuildConfig;
use crate::util::config::Config;

pub use build::build;
pub use examples::examples;
pub use install::install;

/// Immutable inputs shared by the phases of one pipeline invocation.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Directory layout for the selected configuration.
    pub paths: PathSet,
    /// Project-file generator program.
    pub generator: PathBuf,
    /// Build executor program.
    pub executor: PathBuf,
    /// Documentation directory name under the project root.
    pub docs_dir: String,
}

impl BuildContext {
    /// Resolve the context for one invocation.
    pub fn new(project_root: &Path, config: &Config, build_config: BuildConfig) -> Result<Self> {
        let product = config.product_name(project_root)?;
        let paths = PathSet::resolve(project_root, &product, build_config)?;

        Ok(BuildContext {
            paths,
            generator: config.generator(),
            executor: config.executor(),
            docs_dir: config.docs_dir(),
        })
    }
}

/// Project root for the current invocation.
///
/// Layout derivation anchors on the working directory: the tool is run
/// from inside the project checkout.
pub fn project_root() -> Result<PathBuf> {
    std::env::current_dir().context("failed to determine the current directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_uses_config_overrides() {
        let config: Config = toml::from_str(
            r#"
            [project]
            name = "skiff"

            [tools]
            executor = "samu"
            "#,
        )
        .unwrap();

        let ctx =
            BuildContext::new(Path::new("/work/checkout"), &config, BuildConfig::Debug).unwrap();

        assert_eq!(
            ctx.paths.build_root,
            Path::new("/work/skiff-build")
        );
        assert_eq!(ctx.generator, PathBuf::from("cmake"));
        assert_eq!(ctx.executor, PathBuf::from("samu"));
        assert_eq!(ctx.docs_dir, "docs");
    }
}
