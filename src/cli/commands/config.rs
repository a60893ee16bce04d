//! Config command - Print the resolved configuration

use crate::config::load_config;
use crate::errors::{HostboardError, Result};
use crate::fs::resolve_cwd;
use std::path::Path;

/// Print the configuration the wizard would run with
pub async fn run(cwd: Option<&Path>) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config = load_config(&root)?;
    let json = serde_json::to_string_pretty(&config)
        .map_err(|e| HostboardError::wrap(e, "Failed to serialize config"))?;
    println!("{}", json);
    Ok(())
}
