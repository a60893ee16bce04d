//! Configuration loading with defaults

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Load configuration for a working directory, falling back to defaults.
///
/// Looks for `.hostboard/config.json` in `cwd` or its nearest ancestor that
/// has a `.hostboard` directory. Missing file means defaults; the loaded
/// config is validated before it is returned.
pub fn load_config(cwd: &Path) -> Result<Config> {
    let config = match fs::find_project_root(cwd) {
        Some(root) => fs::read_config(&root)?,
        None => Config::default(),
    };
    config.validate()?;
    tracing::debug!(schema_version = config.schema_version, "configuration loaded");
    Ok(config)
}

/// Load configuration from an explicit file path.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let config: Config = fs::read_json(path)?;
    config.validate()?;
    Ok(config)
}
