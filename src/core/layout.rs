//! Build directory layout.
//!
//! All build state lives in an isolated tree next to the project checkout:
//!
//! ```text
//! <source_root>/
//!   <project>/                  project checkout (the anchor)
//!   <product>-build/
//!     build/<configuration>/    generator + executor working state
//!     install/                  installed artifacts and docs
//!     examples-build/           examples build state
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::core::params::BuildConfig;

/// The canonical set of directories for one invocation.
///
/// Derivation is a pure computation; nothing is created on disk here.
/// Recomputed per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    /// The project checkout the tool was invoked in.
    pub project_root: PathBuf,
    /// Parent of the project root; the build tree is placed beside the
    /// checkout, never inside it.
    pub source_root: PathBuf,
    /// Root of all generated state: `<source_root>/<product>-build`.
    pub build_root: PathBuf,
    /// Per-configuration generator/executor state.
    pub config_build_dir: PathBuf,
    /// Install prefix for artifacts and docs.
    pub install_dir: PathBuf,
    /// Example projects shipped with the checkout.
    pub examples_source_dir: PathBuf,
    /// Build state for the example projects.
    pub examples_build_dir: PathBuf,
}

impl PathSet {
    /// Derive the layout for `product` anchored at `project_root`.
    pub fn resolve(project_root: &Path, product: &str, config: BuildConfig) -> Result<PathSet> {
        let source_root = match project_root.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => bail!(
                "project root `{}` has no parent directory to hold the build tree",
                project_root.display()
            ),
        };

        let build_root = source_root.join(format!("{}-build", product));

        Ok(PathSet {
            project_root: project_root.to_path_buf(),
            source_root,
            config_build_dir: build_root.join("build").join(config.as_str()),
            install_dir: build_root.join("install"),
            examples_source_dir: project_root.join("examples"),
            examples_build_dir: build_root.join("examples-build"),
            build_root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_derivation() {
        let paths =
            PathSet::resolve(Path::new("/work/skiff"), "skiff", BuildConfig::Release).unwrap();

        assert_eq!(paths.source_root, Path::new("/work"));
        assert_eq!(paths.build_root, Path::new("/work/skiff-build"));
        assert_eq!(
            paths.config_build_dir,
            Path::new("/work/skiff-build/build/release")
        );
        assert_eq!(paths.install_dir, Path::new("/work/skiff-build/install"));
        assert_eq!(
            paths.examples_source_dir,
            Path::new("/work/skiff/examples")
        );
        assert_eq!(
            paths.examples_build_dir,
            Path::new("/work/skiff-build/examples-build")
        );
    }

    #[test]
    fn test_resolve_is_pure() {
        let a = PathSet::resolve(Path::new("/work/proj"), "proj", BuildConfig::Debug).unwrap();
        let b = PathSet::resolve(Path::new("/work/proj"), "proj", BuildConfig::Debug).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_configuration_selects_build_dir() {
        let debug =
            PathSet::resolve(Path::new("/work/proj"), "proj", BuildConfig::Debug).unwrap();
        let release =
            PathSet::resolve(Path::new("/work/proj"), "proj", BuildConfig::Release).unwrap();

        assert_eq!(
            debug.config_build_dir,
            Path::new("/work/proj-build/build/debug")
        );
        assert_eq!(
            release.config_build_dir,
            Path::new("/work/proj-build/build/release")
        );
        // Everything else is configuration-independent.
        assert_eq!(debug.install_dir, release.install_dir);
        assert_eq!(debug.examples_build_dir, release.examples_build_dir);
    }

    #[test]
    fn test_derived_dirs_descend_from_build_root() {
        let paths = PathSet::resolve(Path::new("/work/proj"), "proj", BuildConfig::Debug).unwrap();
        assert!(paths.config_build_dir.starts_with(&paths.build_root));
        assert!(paths.install_dir.starts_with(&paths.build_root));
        assert!(paths.examples_build_dir.starts_with(&paths.build_root));
    }

    #[test]
    fn test_root_without_parent_is_rejected() {
        assert!(PathSet::resolve(Path::new("/"), "proj", BuildConfig::Debug).is_err());
    }
}
