//! Examples pipeline: build the example projects against the installed
//! artifacts.
//!
//! Assumes the install tree is already populated by the install pipeline.
//! When it isn't, the generator fails to resolve the project's packages
//! during Configure and its diagnostic is surfaced as-is.

use std::path::Path;

use anyhow::Result;

use crate::builder::{CompilePhase, ConfigurePhase, InstallPhase};
use crate::core::params::{BuildConfig, BuildTarget};
use crate::ops::BuildContext;
use crate::pipeline::Pipeline;
use crate::util::config::Config;

/// Build and install the example projects.
pub fn examples(project_root: &Path, config: &Config) -> Result<()> {
    let ctx = BuildContext::new(project_root, config, BuildConfig::Release)?;
    let paths = &ctx.paths;

    println!("Building examples using installed libraries...");
    println!("Install directory: {}", paths.install_dir.display());
    println!("Examples source: {}", paths.examples_source_dir.display());
    println!("Build directory: {}", paths.examples_build_dir.display());

    Pipeline::new()
        .phase(
            ConfigurePhase::new(
                &ctx.generator,
                &paths.examples_source_dir,
                &paths.examples_build_dir,
                BuildConfig::Release,
            )
            .prefix_path(&paths.install_dir)
            .install_prefix(&paths.install_dir),
        )
        .phase(CompilePhase::new(
            &ctx.executor,
            &paths.examples_build_dir,
            BuildTarget::All,
        ))
        // Installs under the prefix recorded at configure time.
        .phase(InstallPhase::new(&ctx.generator, &paths.examples_build_dir))
        .run()
        .into_result()?;

    println!();
    println!("Examples built and installed to: {}", paths.install_dir.display());
    Ok(())
}
