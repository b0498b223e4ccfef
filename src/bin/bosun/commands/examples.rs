//! `bosun examples` command

use anyhow::Result;

use bosun::ops;
use bosun::util::config::{Config, CONFIG_FILE};

pub fn execute() -> Result<()> {
    let project_root = ops::project_root()?;
    let config = Config::load_or_default(&project_root.join(CONFIG_FILE));

    ops::examples(&project_root, &config)
}
