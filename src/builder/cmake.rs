//! CMake generator adapter.
//!
//! Two pipeline phases wrap the generator: project-file generation
//! (`ConfigurePhase`) and artifact installation (`InstallPhase`). The
//! generator binary is whatever the project configuration names; its
//! internals are opaque here.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::params::BuildConfig;
use crate::pipeline::Phase;
use crate::util::fs::ensure_dir;
use crate::util::process::ProcessBuilder;

/// Generate Ninja project files for `source_dir` into `build_dir`.
pub struct ConfigurePhase {
    generator: PathBuf,
    source_dir: PathBuf,
    build_dir: PathBuf,
    config: BuildConfig,
    prefix_path: Option<PathBuf>,
    install_prefix: Option<PathBuf>,
}

impl ConfigurePhase {
    pub fn new(
        generator: impl Into<PathBuf>,
        source_dir: impl Into<PathBuf>,
        build_dir: impl Into<PathBuf>,
        config: BuildConfig,
    ) -> Self {
        ConfigurePhase {
            generator: generator.into(),
            source_dir: source_dir.into(),
            build_dir: build_dir.into(),
            config,
            prefix_path: None,
            install_prefix: None,
        }
    }

    /// Directory the generator searches for already-installed dependencies.
    pub fn prefix_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.prefix_path = Some(dir.into());
        self
    }

    /// Install prefix baked into the generated project files.
    pub fn install_prefix(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_prefix = Some(dir.into());
        self
    }
}

impl Phase for ConfigurePhase {
    fn name(&self) -> &'static str {
        "Configure"
    }

    fn run(&self) -> Result<()> {
        ensure_dir(&self.build_dir)?;

        tracing::info!(
            "Configuring {} build in {}",
            self.config,
            self.build_dir.display()
        );

        let mut cmd = ProcessBuilder::new(&self.generator)
            .arg("-G")
            .arg("Ninja")
            .arg("-B")
            .arg(&self.build_dir)
            .arg("-S")
            .arg(&self.source_dir)
            .arg(format!("-DCMAKE_BUILD_TYPE={}", self.config));

        if let Some(ref prefix) = self.prefix_path {
            cmd = cmd.arg(format!("-DCMAKE_PREFIX_PATH={}", prefix.display()));
        }
        if let Some(ref prefix) = self.install_prefix {
            cmd = cmd.arg(format!("-DCMAKE_INSTALL_PREFIX={}", prefix.display()));
        }

        cmd.stream()?;
        Ok(())
    }
}

/// Install built artifacts out of `build_dir`.
///
/// Without an explicit prefix the install prefix recorded at configure
/// time applies.
pub struct InstallPhase {
    generator: PathBuf,
    build_dir: PathBuf,
    prefix: Option<PathBuf>,
}

impl InstallPhase {
    pub fn new(generator: impl Into<PathBuf>, build_dir: impl Into<PathBuf>) -> Self {
        InstallPhase {
            generator: generator.into(),
            build_dir: build_dir.into(),
            prefix: None,
        }
    }

    /// Install under `dir` instead of the configured prefix.
    pub fn prefix(mut self, dir: impl Into<PathBuf>) -> Self {
        self.prefix = Some(dir.into());
        self
    }
}

impl Phase for InstallPhase {
    fn name(&self) -> &'static str {
        "Install"
    }

    fn run(&self) -> Result<()> {
        tracing::info!("Installing from {}", self.build_dir.display());

        let mut cmd = ProcessBuilder::new(&self.generator)
            .arg("--install")
            .arg(&self.build_dir);

        if let Some(ref prefix) = self.prefix {
            cmd = cmd.arg("--prefix").arg(prefix);
        }

        cmd.stream()?;
        Ok(())
    }
}
