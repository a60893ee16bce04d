//! File system utilities for hostboard
//!
//! Provides path resolution and JSON file reading.

mod json;
mod paths;

pub use json::{read_config, read_json};
pub use paths::{find_project_root, get_config_path, get_hostboard_dir, resolve_cwd};
