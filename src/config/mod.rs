//! Shell configuration.
//!
//! Settings come from an optional `.i18n-shell.json` in the working
//! directory; anything not set there falls back to defaults. The shell
//! reads its settings once at startup and never mutates them afterwards.

mod loader;
mod types;

use std::path::Path;

pub use types::{
    ConfigError,
    MockApiConfig,
    ShellSettings,
    ValidationError,
};

/// Load and validate settings for the shell.
///
/// A missing settings file yields the defaults; a present but unreadable,
/// unparsable, or invalid file is a startup error.
///
/// # Errors
/// - File read error
/// - JSON parse error
/// - Validation error
pub fn load(dir: &Path) -> Result<ShellSettings, ConfigError> {
    tracing::debug!("Loading settings from: {:?}", dir);

    let settings = loader::load_from_dir(dir)?.map_or_else(ShellSettings::default, |loaded| {
        tracing::debug!("Loaded settings file: {:?}", loaded);
        loaded
    });

    settings.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(settings)
}
