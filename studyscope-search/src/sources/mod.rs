//! Source implementations.
//!
//! Each module provides a struct implementing [`crate::source::Source`].
//! The three web-search sources share [`custom_search`].

pub mod articles;
pub mod cheat_sheets;
pub mod custom_search;
pub mod gemini;
pub mod study_materials;
pub mod youtube;

pub use articles::ArticlesSource;
pub use cheat_sheets::CheatSheetsSource;
pub use gemini::GeminiSource;
pub use study_materials::StudyMaterialsSource;
pub use youtube::YouTubeSource;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::orchestrator::settle::{run_independent, Outcome};
use crate::types::WebResult;

/// One labelled Custom Search sub-query of a multi-query source.
#[derive(Debug, Clone)]
pub(crate) struct SubQuery {
    /// Name used in logs and in the combined error.
    pub label: &'static str,
    /// Transformed query text sent to the API.
    pub query: String,
    /// Result cap for this sub-query.
    pub num: usize,
}

/// Run sub-queries concurrently, tolerating individual failures.
///
/// A failed sub-query is logged and contributes an empty group. Only when
/// every sub-query fails does the source fail, with
/// [`SearchError::AllQueriesFailed`] listing each reason. Credential
/// errors short-circuit before any request is sent.
pub(crate) async fn settle_subqueries(
    client: &reqwest::Client,
    config: &SearchConfig,
    subqueries: &[SubQuery],
) -> Result<Vec<Vec<WebResult>>, SearchError> {
    custom_search::require_credentials(config)?;

    let outcomes = run_independent(
        subqueries
            .iter()
            .map(|sq| custom_search::query(client, config, &sq.query, sq.num)),
    )
    .await;

    let mut groups = Vec::with_capacity(outcomes.len());
    let mut errors = Vec::new();
    for (sq, outcome) in subqueries.iter().zip(outcomes) {
        match outcome {
            Outcome::Success(results) => {
                tracing::debug!(subquery = sq.label, count = results.len(), "sub-query returned results");
                groups.push(results);
            }
            Outcome::Failure(err) => {
                tracing::warn!(subquery = sq.label, error = %err, "sub-query failed");
                errors.push(format!("{}: {err}", sq.label));
                groups.push(Vec::new());
            }
        }
    }

    if !subqueries.is_empty() && errors.len() == subqueries.len() {
        return Err(SearchError::AllQueriesFailed(errors.join("; ")));
    }
    Ok(groups)
}
