//! Ninja executor adapter.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::params::BuildTarget;
use crate::pipeline::Phase;
use crate::util::process::ProcessBuilder;

/// Run the build executor against a configured build directory.
pub struct CompilePhase {
    executor: PathBuf,
    build_dir: PathBuf,
    target: BuildTarget,
}

impl CompilePhase {
    pub fn new(
        executor: impl Into<PathBuf>,
        build_dir: impl Into<PathBuf>,
        target: BuildTarget,
    ) -> Self {
        CompilePhase {
            executor: executor.into(),
            build_dir: build_dir.into(),
            target,
        }
    }
}

impl Phase for CompilePhase {
    fn name(&self) -> &'static str {
        "Build"
    }

    fn run(&self) -> Result<()> {
        tracing::info!(
            "Building {} in {}",
            self.target,
            self.build_dir.display()
        );

        let mut cmd = ProcessBuilder::new(&self.executor)
            .arg("-C")
            .arg(&self.build_dir);

        // The executor builds its default targets unless one is named.
        if let BuildTarget::Named(ref name) = self.target {
            cmd = cmd.arg(name);
        }

        cmd.stream()?;
        Ok(())
    }
}
