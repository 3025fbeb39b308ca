//! Core types shared across the shell.

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

/// Flat translation key map (e.g. "some.button" -> "Increment").
///
/// Keys are unique and insertion order carries no meaning; an empty table
/// is a valid state (a UI with no translations falls back to showing keys
/// verbatim).
pub type TranslationTable = HashMap<String, String>;

/// Response body served by the mock i18n API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleResponse {
    /// Primary language subtag (e.g. "en" for "en-US").
    pub language: String,
    /// Primary requested locale (e.g. "en-US").
    pub locale: String,
    /// Translation table resolved for the primary locale.
    pub lookup: TranslationTable,
    /// Locales the service advertises support for.
    pub supported_locales: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// Wire names are camelCase, matching the client contract.
    #[rstest]
    fn serialize_uses_camel_case_wire_names() {
        let response = LocaleResponse {
            language: "en".to_string(),
            locale: "en-US".to_string(),
            lookup: TranslationTable::new(),
            supported_locales: vec!["en-US".to_string(), "de-DE".to_string()],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_that!(json.get("supportedLocales"), some(anything()));
        assert_that!(json.get("supported_locales"), none());
        assert_that!(json.get("language"), some(anything()));
        assert_that!(json.get("lookup"), some(anything()));
    }
}
