//! Locale request parsing.
//!
//! Clients send an ordered locale preference list in transport form:
//! locale identifiers joined with `;` (e.g. `en-US;de-DE`). The first
//! entry is the *primary* locale.

/// Locale used when the client sends no usable preference.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Ordered locale preference list. Always holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRequest {
    /// Requested locales, primary first.
    locales: Vec<String>,
}

impl LocaleRequest {
    /// Parse the transport form (`;`-delimited locale identifiers).
    ///
    /// Empty segments are dropped; an empty or all-empty input falls back
    /// to [`DEFAULT_LOCALE`]. Parsing never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let locales: Vec<String> = raw
            .split(';')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(ToString::to_string)
            .collect();

        if locales.is_empty() {
            return Self::default();
        }

        Self { locales }
    }

    /// The primary (first) requested locale.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.locales.first().map_or(DEFAULT_LOCALE, String::as_str)
    }

    /// All requested locales, primary first.
    #[must_use]
    pub fn locales(&self) -> &[String] {
        &self.locales
    }
}

impl Default for LocaleRequest {
    fn default() -> Self {
        Self { locales: vec![DEFAULT_LOCALE.to_string()] }
    }
}

/// Language subtag of a locale: everything before the first `-`.
///
/// A locale with no `-` separator is used verbatim as its own language,
/// so malformed identifiers degrade gracefully instead of erroring.
///
/// # Examples
/// - `en-US` -> `en`
/// - `de-DE` -> `de`
/// - `klingon` -> `klingon`
#[must_use]
pub fn language_of(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    // Single and multiple locales
    #[case("en-US", vec!["en-US"])]
    #[case("en-US;de-DE", vec!["en-US", "de-DE"])]
    #[case("de-DE;en-US;fr-FR", vec!["de-DE", "en-US", "fr-FR"])]
    // Empty segments are dropped
    #[case("en-US;;de-DE", vec!["en-US", "de-DE"])]
    #[case(";de-DE", vec!["de-DE"])]
    #[case("de-DE;", vec!["de-DE"])]
    // Nothing usable falls back to the default
    #[case("", vec!["en-US"])]
    #[case(";;", vec!["en-US"])]
    fn test_parse(#[case] raw: &str, #[case] expected: Vec<&str>) {
        let request = LocaleRequest::parse(raw);

        let locales: Vec<&str> = request.locales().iter().map(String::as_str).collect();
        assert_eq!(locales, expected);
    }

    #[rstest]
    #[case("en-US;de-DE", "en-US")]
    #[case("de-DE", "de-DE")]
    #[case("", "en-US")]
    fn test_primary(#[case] raw: &str, #[case] expected: &str) {
        assert_that!(LocaleRequest::parse(raw).primary(), eq(expected));
    }

    #[rstest]
    #[case("en-US", "en")]
    #[case("de-DE", "de")]
    #[case("az-Cyrl-AZ", "az")]
    // No separator: the whole string is the language
    #[case("en", "en")]
    #[case("klingon", "klingon")]
    #[case("", "")]
    fn test_language_of(#[case] locale: &str, #[case] expected: &str) {
        assert_that!(language_of(locale), eq(expected));
    }

    #[rstest]
    fn test_default_is_en_us() {
        let request = LocaleRequest::default();

        assert_that!(request.primary(), eq(DEFAULT_LOCALE));
        assert_that!(request.locales(), len(eq(1)));
    }
}
