//! Mock i18n service.
//!
//! Development-time stand-in for a real internationalization backend,
//! so the UI can be developed against `GET /api/i18n/{locales}` without
//! one. Responses are static per locale and requests are handled
//! independently; this is a stub, not a resolver, and requested locales
//! are deliberately not validated against the supported list.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{
    Path,
    State,
};
use axum::response::Json;
use axum::routing::get;
use axum::Router;

use crate::config::MockApiConfig;
use crate::locale::{
    LocaleRequest,
    language_of,
};
use crate::types::{
    LocaleResponse,
    TranslationTable,
};

/// Serves translation payloads for requested locale lists.
#[derive(Debug, Clone)]
pub struct MockI18nService {
    /// Locales advertised in every response.
    supported_locales: Vec<String>,
    /// Table served when no per-locale override matches.
    default_lookup: TranslationTable,
    /// Per-locale override tables, keyed by full locale.
    locale_lookups: HashMap<String, TranslationTable>,
}

impl MockI18nService {
    /// Build the service from mock API settings.
    #[must_use]
    pub fn new(config: &MockApiConfig) -> Self {
        Self {
            supported_locales: config.supported_locales.clone(),
            default_lookup: config.lookup.clone(),
            locale_lookups: config.locale_lookups.clone(),
        }
    }

    /// Answer one locale request (transport form, `;`-delimited).
    ///
    /// The primary locale decides `locale`, `language`, and the lookup
    /// table; the remaining entries only express client-side preference
    /// order and are ignored here.
    #[must_use]
    pub fn respond(&self, raw_locales: &str) -> LocaleResponse {
        let request = LocaleRequest::parse(raw_locales);
        let locale = request.primary();

        let lookup = self
            .locale_lookups
            .get(locale)
            .cloned()
            .unwrap_or_else(|| self.default_lookup.clone());

        LocaleResponse {
            language: language_of(locale).to_string(),
            locale: locale.to_string(),
            lookup,
            supported_locales: self.supported_locales.clone(),
        }
    }

    /// Router exposing the mock API routes.
    #[must_use]
    pub fn into_router(self) -> Router {
        Router::new()
            .route("/api/i18n", get(serve_default))
            .route("/api/i18n/{locales}", get(serve_locales))
            .with_state(Arc::new(self))
    }
}

/// `GET /api/i18n`: no locale segment, serve the default request.
async fn serve_default(State(service): State<Arc<MockI18nService>>) -> Json<LocaleResponse> {
    tracing::debug!("GET /api/i18n (default locale request)");
    Json(service.respond(""))
}

/// `GET /api/i18n/{locales}`: `;`-delimited locale preference list.
async fn serve_locales(
    State(service): State<Arc<MockI18nService>>,
    Path(locales): Path<String>,
) -> Json<LocaleResponse> {
    tracing::debug!(%locales, "GET /api/i18n/{{locales}}");
    Json(service.respond(&locales))
}
