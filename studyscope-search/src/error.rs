//! Error types for the studyscope-search crate.
//!
//! All errors use stable string messages suitable for display inside a
//! single result section. No API keys or request URLs carrying keys
//! appear in error messages.

use serde::{Deserialize, Serialize};

/// Errors that can occur while querying a source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SearchError {
    /// The query was empty or whitespace-only. Raised before any request.
    #[error("please enter a question")]
    EmptyQuery,

    /// A required API key or engine id is not configured. No request was sent.
    #[error("missing credential: {0}")]
    MissingCredential(String),

    /// The HTTP request could not be completed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API answered with a non-2xx status.
    #[error("API error: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Short reason, kept for logs and debugging output.
        message: String,
    },

    /// The response body was not the JSON shape the source expects.
    #[error("parse error: {0}")]
    Parse(String),

    /// Every sub-query of a multi-query source failed.
    #[error("all queries failed: {0}")]
    AllQueriesFailed(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Returns the HTTP status code when this error came from a non-2xx answer.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        // Strip the URL: it carries the API key as a query parameter.
        let err = err.without_url();
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_owned(),
            }
        } else {
            Self::Http(err.to_string())
        }
    }
}

/// Convenience type alias for studyscope-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_query() {
        assert_eq!(SearchError::EmptyQuery.to_string(), "please enter a question");
    }

    #[test]
    fn display_missing_credential() {
        let err = SearchError::MissingCredential("YouTube API key".into());
        assert_eq!(err.to_string(), "missing credential: YouTube API key");
    }

    #[test]
    fn display_status_shows_code_only() {
        let err = SearchError::Status {
            status: 403,
            message: "Forbidden".into(),
        };
        assert_eq!(err.to_string(), "API error: 403");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("invalid response format".into());
        assert_eq!(err.to_string(), "parse error: invalid response format");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn display_all_queries_failed() {
        let err = SearchError::AllQueriesFailed("pdf: API error: 500".into());
        assert_eq!(err.to_string(), "all queries failed: pdf: API error: 500");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("timeout_seconds must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "config error: timeout_seconds must be greater than 0"
        );
    }

    #[test]
    fn serialises_with_kind_tag() {
        let json = serde_json::to_value(SearchError::Http("refused".into())).expect("serialize");
        assert_eq!(json["kind"], "http");
        assert_eq!(json["detail"], "refused");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
