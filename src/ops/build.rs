//! Primary build pipeline: Configure, then Build.

use std::path::Path;

use anyhow::Result;

use crate::builder::{CompilePhase, ConfigurePhase};
use crate::core::params::BuildParams;
use crate::ops::BuildContext;
use crate::pipeline::Pipeline;
use crate::util::config::Config;

/// Configure and build the project for the resolved parameters.
pub fn build(project_root: &Path, config: &Config, params: &BuildParams) -> Result<()> {
    let ctx = BuildContext::new(project_root, config, params.config)?;
    let paths = &ctx.paths;

    Pipeline::new()
        .phase(ConfigurePhase::new(
            &ctx.generator,
            &paths.project_root,
            &paths.config_build_dir,
            params.config,
        ))
        .phase(CompilePhase::new(
            &ctx.executor,
            &paths.config_build_dir,
            params.target.clone(),
        ))
        .run()
        .into_result()?;

    println!();
    println!("Build completed successfully!");
    Ok(())
}
