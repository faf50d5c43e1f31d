//! Workspace configuration handling.
//! A workspace may pin default generator options in `dappforge.json`,
//! `dappforge.yml` or `dappforge.yaml` at its root.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use crate::options::RawOptions;
use log::debug;
use std::io::Read;
use std::path::Path;

/// Loads the first configuration file found in `workspace_root`.
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the file, `None` if there is none
pub fn load_config<P: AsRef<Path>>(workspace_root: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = workspace_root.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }
    Ok(None)
}

/// Parses configuration content as JSON, falling back to YAML.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither
pub fn parse_config(content: &str) -> Result<RawOptions> {
    match serde_json::from_str(content) {
        Ok(options) => Ok(options),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Returns the option defaults configured for the workspace.
pub fn get_config<P: AsRef<Path>>(workspace_root: P) -> Result<RawOptions> {
    match load_config(workspace_root, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => Ok(RawOptions::default()),
    }
}

/// Reads options from a reader (stdin). Empty input yields no options.
pub fn load_from_reader<R: Read>(mut reader: R) -> Result<RawOptions> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    let content = buffer.trim();
    if content.is_empty() {
        return Ok(RawOptions::default());
    }
    parse_config(content)
}
