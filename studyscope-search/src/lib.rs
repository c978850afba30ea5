//! # studyscope-search
//!
//! Concurrent fan-out of one study question to several third-party APIs.
//!
//! A single question is sent at once to an AI completion API, a video
//! search API and a web search API (used three ways: articles, study
//! documents, cheat sheets). Each source settles independently and is
//! handed to a [`SectionSink`] as soon as it does.
//!
//! ## Design
//!
//! - Empty or whitespace-only questions are rejected before any request
//! - All sources start together; completion is gated by a settle-all join
//! - A failing source (network, non-2xx, malformed JSON, missing key) is
//!   reported in its own section only and never fails the whole query
//! - Result order is the API's order, truncated to a per-source cap
//! - Overlapping cheat-sheet sub-queries are merged in first-seen order
//! - No retries, caching, rate limiting or cancellation
//!
//! ## Security
//!
//! - API keys are sent only as the query parameter each API requires
//! - Keys never appear in `Debug` output, error messages or logs
//! - Query text is logged only at trace level

pub mod config;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod sink;
pub mod source;
pub mod sources;
pub mod types;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use orchestrator::fanout::validate_query;
pub use orchestrator::settle::{run_independent, Outcome};
pub use sink::{DiscardSink, FanOutReport, SectionOutcome, SectionSink};
pub use source::Source;
pub use types::{SourceKind, SourcePayload};

/// Query every configured source concurrently, reporting to `sink` as each settles.
///
/// # Errors
///
/// Returns [`SearchError::EmptyQuery`] for a blank question and
/// [`SearchError::Config`] for an invalid config, both before any request.
/// Individual source failures are reported through `sink` and the returned
/// [`FanOutReport`], never as an `Err`.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> studyscope_search::Result<()> {
/// let config = studyscope_search::SearchConfig::default();
/// let mut sink = studyscope_search::DiscardSink;
/// let report = studyscope_search::search_all("photosynthesis", &config, &mut sink).await?;
/// println!("{} of {} sources answered", report.succeeded(), report.sections.len());
/// # Ok(())
/// # }
/// ```
pub async fn search_all<S>(query: &str, config: &SearchConfig, sink: &mut S) -> Result<FanOutReport>
where
    S: SectionSink + ?Sized,
{
    orchestrator::fanout::fan_out(query, config, sink).await
}

/// Query every configured source and return only the ordered report.
///
/// Convenience wrapper around [`search_all`] with a [`DiscardSink`].
///
/// # Errors
///
/// Same as [`search_all`].
pub async fn search_report(query: &str, config: &SearchConfig) -> Result<FanOutReport> {
    search_all(query, config, &mut DiscardSink).await
}
