//! Shell settings types and validation.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::TranslationTable;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "mockApi.supportedLocales[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Top-level shell settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellSettings {
    /// Directory holding the persistent translation slot.
    pub data_dir: PathBuf,

    pub mock_api: MockApiConfig,
}

/// Settings for the development-time mock i18n service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MockApiConfig {
    /// Whether the mock service is started at all. Disable when the UI
    /// talks to a real backend.
    pub enabled: bool,

    pub port: u16,

    /// Locales the service advertises in every response.
    pub supported_locales: Vec<String>,

    /// Lookup table served when no per-locale override matches.
    pub lookup: TranslationTable,

    /// Per-locale override tables, keyed by full locale (e.g. "de-DE").
    ///
    /// Requested locales are not validated against `supported_locales`;
    /// an unknown locale simply falls back to `lookup`.
    pub locale_lookups: HashMap<String, TranslationTable>,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data"), mock_api: MockApiConfig::default() }
    }
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: 8081,
            supported_locales: vec!["en-US".to_string(), "de-DE".to_string()],
            lookup: sample_lookup(),
            locale_lookups: HashMap::new(),
        }
    }
}

/// Fixed sample table served by a fresh mock service.
fn sample_lookup() -> TranslationTable {
    TranslationTable::from([
        ("some.button".to_string(), "Increment (API)".to_string()),
        ("some.label".to_string(), "A simple counter".to_string()),
        ("some.search".to_string(), "Browse...".to_string()),
    ])
}

impl ShellSettings {
    /// # Errors
    /// - Data directory path is empty
    /// - Mock API port is 0
    /// - Supported locale list is empty or holds empty entries
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.data_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "dataDir",
                "The data directory cannot be empty. Example: \"data\"",
            ));
        }

        if self.mock_api.port == 0 {
            errors.push(ValidationError::new(
                "mockApi.port",
                "Port 0 is not a usable listen port. Example: 8081",
            ));
        }

        if self.mock_api.supported_locales.is_empty() {
            errors.push(ValidationError::new(
                "mockApi.supportedLocales",
                "At least one locale is required. Example: [\"en-US\", \"de-DE\"]",
            ));
        }

        for (index, locale) in self.mock_api.supported_locales.iter().enumerate() {
            if locale.is_empty() {
                errors.push(ValidationError::new(
                    format!("mockApi.supportedLocales[{index}]"),
                    "Locale identifiers cannot be empty. Example: \"en-US\"",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = ShellSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"mockApi": {"port": 9000}}"#;

        let settings: ShellSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.mock_api.port, eq(9000));
        assert_that!(settings.mock_api.enabled, eq(true));
        assert_that!(settings.data_dir.to_str(), some(eq("data")));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: ShellSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.mock_api.enabled, eq(true));
        assert_that!(settings.mock_api.port, eq(8081));
        assert_that!(
            settings.mock_api.supported_locales,
            elements_are![eq("en-US"), eq("de-DE")]
        );
        assert_that!(settings.mock_api.lookup.len(), eq(3));
        assert_that!(settings.mock_api.locale_lookups, is_empty());
    }

    #[rstest]
    fn deserialize_locale_lookups() {
        let json = r#"{
            "mockApi": {
                "localeLookups": {
                    "de-DE": {"some.button": "Erhöhen (API)"}
                }
            }
        }"#;

        let settings: ShellSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.mock_api.locale_lookups.len(), eq(1));
        assert_that!(
            settings.mock_api.locale_lookups.get("de-DE").and_then(|t| t.get("some.button")),
            some(eq(&"Erhöhen (API)".to_string()))
        );
    }

    #[rstest]
    fn validate_invalid_port_zero() {
        let mut settings = ShellSettings::default();
        settings.mock_api.port = 0;

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("mockApi.port")),
                field!(ValidationError.message, contains_substring("not a usable listen port"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_supported_locales_empty() {
        let mut settings = ShellSettings::default();
        settings.mock_api.supported_locales = vec![];

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("mockApi.supportedLocales")),
                field!(ValidationError.message, contains_substring("At least one locale"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_supported_locale_entry_empty() {
        let mut settings = ShellSettings::default();
        settings.mock_api.supported_locales = vec!["en-US".to_string(), String::new()];

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("mockApi.supportedLocales[1]")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_data_dir_empty() {
        let settings = ShellSettings { data_dir: PathBuf::new(), ..ShellSettings::default() };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("dataDir")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let mut settings = ShellSettings::default();
        settings.data_dir = PathBuf::new();
        settings.mock_api.port = 0;

        let validation_result = settings.validate();
        let errors = validation_result.unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. dataDir"));
        assert_that!(error_message, contains_substring("2. mockApi.port"));
    }
}
