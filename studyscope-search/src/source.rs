//! Trait definition for pluggable source backends.
//!
//! Each source (AI answer, videos, articles, study materials, cheat sheets)
//! implements [`Source`] to provide a uniform interface for querying its
//! API and shaping the result set.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{SourceKind, SourcePayload};

/// A pluggable source backend.
///
/// Each implementation handles its own:
///
/// - query transformation (e.g. appending `filetype:pdf`)
/// - credential checks, failing before any request when keys are missing
/// - one or more HTTP requests through the shared client
/// - truncation of the result set to its configured cap
///
/// All implementations must be `Send + Sync` for concurrent fan-out.
pub trait Source: Send + Sync {
    /// Query the backend and return the shaped result set.
    ///
    /// `query` is already trimmed and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if credentials are missing, the request
    /// fails, the API answers non-2xx, or the body has an unexpected shape.
    fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<SourcePayload, SearchError>> + Send;

    /// Returns which [`SourceKind`] this implementation represents.
    fn kind(&self) -> SourceKind;

    /// Number of HTTP requests one fetch issues on the happy path.
    fn request_count(&self) -> usize {
        1
    }
}
