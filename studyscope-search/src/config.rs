//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which sources are queried, API credentials,
//! endpoints, per-source result caps and request behaviour. Every section
//! deserialises with defaults so a partial TOML table is enough.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SearchError;
use crate::types::SourceKind;

/// Configuration for one fan-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Which sources to query. Queried concurrently; reported in this order.
    pub sources: Vec<SourceKind>,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, `studyscope/<version>` is sent.
    pub user_agent: Option<String>,
    /// Static API credentials.
    pub keys: ApiKeys,
    /// Base URLs of the external APIs.
    pub endpoints: Endpoints,
    /// Per-source result caps and display truncation.
    pub limits: ResultLimits,
    /// AI completion model selection.
    pub models: ModelConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sources: SourceKind::all().to_vec(),
            timeout_seconds: 15,
            user_agent: None,
            keys: ApiKeys::default(),
            endpoints: Endpoints::default(),
            limits: ResultLimits::default(),
            models: ModelConfig::default(),
        }
    }
}

/// API credentials passed to the external services.
///
/// `Debug` never prints the values.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeys {
    /// Gemini API key.
    pub gemini: String,
    /// YouTube Data API v3 key.
    pub youtube: String,
    /// Custom Search JSON API key.
    pub custom_search: String,
    /// Programmable Search Engine id (`cx`).
    pub custom_search_engine_id: String,
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mask(value: &str) -> &'static str {
            if value.is_empty() {
                "<unset>"
            } else {
                "<redacted>"
            }
        }
        f.debug_struct("ApiKeys")
            .field("gemini", &mask(&self.gemini))
            .field("youtube", &mask(&self.youtube))
            .field("custom_search", &mask(&self.custom_search))
            .field(
                "custom_search_engine_id",
                &mask(&self.custom_search_engine_id),
            )
            .finish()
    }
}

/// Base URLs of the external APIs. Overridable so tests can point at mocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Gemini API base (`/v1beta/models/...` is appended).
    pub gemini: String,
    /// YouTube Data API base (`/youtube/v3/search` is appended).
    pub youtube: String,
    /// Custom Search API base (`/customsearch/v1` is appended).
    pub custom_search: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            gemini: "https://generativelanguage.googleapis.com".to_owned(),
            youtube: "https://www.googleapis.com".to_owned(),
            custom_search: "https://www.googleapis.com".to_owned(),
        }
    }
}

impl Endpoints {
    /// Point every endpoint at the same base URL.
    pub fn all(base: &str) -> Self {
        Self {
            gemini: base.to_owned(),
            youtube: base.to_owned(),
            custom_search: base.to_owned(),
        }
    }
}

/// Largest `num` a single Custom Search request accepts.
pub const CUSTOM_SEARCH_MAX_RESULTS: usize = 10;

/// Result caps per source.
///
/// The caps differ between sources (three quick-reference hits next to
/// five of everything else) and only video descriptions are truncated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultLimits {
    /// Maximum videos kept.
    pub videos: usize,
    /// Maximum articles kept.
    pub articles: usize,
    /// Maximum hits kept per study-material sub-query.
    pub study_materials: usize,
    /// Maximum hits kept from the `cheat sheet` sub-query.
    pub cheat_sheets: usize,
    /// Maximum hits kept from the `quick reference guide` sub-query.
    pub quick_reference: usize,
    /// Video descriptions longer than this many characters are cut.
    pub snippet_chars: usize,
}

impl Default for ResultLimits {
    fn default() -> Self {
        Self {
            videos: 5,
            articles: 5,
            study_materials: 5,
            cheat_sheets: 5,
            quick_reference: 3,
            snippet_chars: 120,
        }
    }
}

/// AI completion model selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model asked first.
    pub primary: String,
    /// Model asked once when the primary answers 404. Empty disables it.
    pub fallback: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            primary: "gemini-2.5-flash".to_owned(),
            fallback: "gemini-pro".to_owned(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `sources` must not be empty or contain duplicates
    /// - every result cap must be greater than 0
    /// - every endpoint must parse as an absolute URL
    /// - the primary model must be named
    ///
    /// Missing credentials are not a config error: the affected source
    /// reports them in its own section.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.sources.is_empty() {
            return Err(SearchError::Config(
                "at least one source must be enabled".into(),
            ));
        }
        for (idx, source) in self.sources.iter().enumerate() {
            if self.sources[..idx].contains(source) {
                return Err(SearchError::Config(format!(
                    "source {source} is listed more than once"
                )));
            }
        }

        let caps = [
            ("videos", self.limits.videos),
            ("articles", self.limits.articles),
            ("study_materials", self.limits.study_materials),
            ("cheat_sheets", self.limits.cheat_sheets),
            ("quick_reference", self.limits.quick_reference),
            ("snippet_chars", self.limits.snippet_chars),
        ];
        if let Some((name, _)) = caps.iter().find(|(_, cap)| *cap == 0) {
            return Err(SearchError::Config(format!(
                "limits.{name} must be greater than 0"
            )));
        }

        let custom_search_caps = [
            ("articles", self.limits.articles),
            ("study_materials", self.limits.study_materials),
            ("cheat_sheets", self.limits.cheat_sheets),
            ("quick_reference", self.limits.quick_reference),
        ];
        if let Some((name, _)) = custom_search_caps
            .iter()
            .find(|(_, cap)| *cap > CUSTOM_SEARCH_MAX_RESULTS)
        {
            return Err(SearchError::Config(format!(
                "limits.{name} must be at most {CUSTOM_SEARCH_MAX_RESULTS}"
            )));
        }

        for (name, base) in [
            ("gemini", &self.endpoints.gemini),
            ("youtube", &self.endpoints.youtube),
            ("custom_search", &self.endpoints.custom_search),
        ] {
            Url::parse(base).map_err(|e| {
                SearchError::Config(format!("endpoints.{name} is not a valid URL: {e}"))
            })?;
        }

        if self.models.primary.trim().is_empty() {
            return Err(SearchError::Config(
                "models.primary must not be empty".into(),
            ));
        }
        Ok(())
    }
}
