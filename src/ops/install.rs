//! Install pipeline: release build, install, then documentation copy.

use std::path::Path;

use anyhow::Result;

use crate::builder::{CompilePhase, ConfigurePhase, CopyDocsPhase, InstallPhase};
use crate::core::params::{BuildConfig, BuildTarget};
use crate::ops::BuildContext;
use crate::pipeline::Pipeline;
use crate::util::config::Config;

/// Build the release configuration and install it.
///
/// Always release; the install tree is not configuration-addressed.
/// Self-contained: runs its own Configure and Build, so it succeeds
/// against an empty build root.
pub fn install(project_root: &Path, config: &Config) -> Result<()> {
    let ctx = BuildContext::new(project_root, config, BuildConfig::Release)?;
    let paths = &ctx.paths;

    println!("Install directory: {}", paths.install_dir.display());

    Pipeline::new()
        .phase(ConfigurePhase::new(
            &ctx.generator,
            &paths.project_root,
            &paths.config_build_dir,
            BuildConfig::Release,
        ))
        .phase(CompilePhase::new(
            &ctx.executor,
            &paths.config_build_dir,
            BuildTarget::All,
        ))
        .phase(InstallPhase::new(&ctx.generator, &paths.config_build_dir).prefix(&paths.install_dir))
        .phase(CopyDocsPhase::new(
            paths.project_root.join(&ctx.docs_dir),
            paths.install_dir.join(&ctx.docs_dir),
        ))
        .run()
        .into_result()?;

    println!("Installed to: {}", paths.install_dir.display());
    Ok(())
}
