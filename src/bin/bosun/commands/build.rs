//! `bosun build` command

use anyhow::{bail, Result};

use crate::cli::BuildArgs;
use bosun::core::params;
use bosun::ops;
use bosun::util::config::{Config, CONFIG_FILE};

const USAGE: &str = "Usage: bosun build --config <debug|release> [--target <target>]";

pub fn execute(args: BuildArgs) -> Result<()> {
    let params = match params::resolve(args.config.as_deref(), args.target) {
        Ok(params) => params,
        Err(e) => bail!("{}\n\n{}", e, USAGE),
    };

    let project_root = ops::project_root()?;
    let config = Config::load_or_default(&project_root.join(CONFIG_FILE));

    ops::build(&project_root, &config, &params)
}
