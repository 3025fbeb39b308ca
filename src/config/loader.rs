//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    ShellSettings,
};

/// Name of the optional settings file in the working directory.
const CONFIG_FILE_NAME: &str = ".i18n-shell.json";

/// Load settings from `dir`, looking for `.i18n-shell.json`.
///
/// # Returns
/// - `Ok(Some(settings))`: file found and parsed
/// - `Ok(None)`: no settings file present
/// - `Err(ConfigError)`: file read or parse error
pub(super) fn load_from_dir(dir: &Path) -> Result<Option<ShellSettings>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: ShellSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
