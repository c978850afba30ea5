//! Core fan-out: validate, query every source concurrently, report as they settle.

use futures::stream::{FuturesUnordered, StreamExt};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::sink::{FanOutReport, SectionOutcome, SectionSink};
use crate::source::Source;
use crate::sources::{
    ArticlesSource, CheatSheetsSource, GeminiSource, StudyMaterialsSource, YouTubeSource,
};
use crate::types::{SourceKind, SourcePayload};

use super::settle::Outcome;

/// Trim `raw` and reject it if nothing is left.
///
/// # Errors
///
/// Returns [`SearchError::EmptyQuery`] for empty or whitespace-only input.
pub fn validate_query(raw: &str) -> Result<String, SearchError> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(query.to_owned())
}

/// Orchestrate one query across all configured sources.
///
/// # Pipeline
///
/// 1. Validate the query; empty input fails here with no request and no sink call
/// 2. Validate the config
/// 3. Build one shared HTTP client
/// 4. Call [`SectionSink::begin`]
/// 5. Start every source concurrently via [`FuturesUnordered`]
/// 6. As each source settles, log it and hand it to the sink
/// 7. Re-order the outcomes by configured source order
/// 8. Call [`SectionSink::finish`] with the report
///
/// # Errors
///
/// Only [`SearchError::EmptyQuery`], [`SearchError::Config`] and a client
/// construction failure. Per-source failures are reported to the sink and
/// in the report, never here.
pub async fn fan_out<S>(
    raw_query: &str,
    config: &SearchConfig,
    sink: &mut S,
) -> Result<FanOutReport, SearchError>
where
    S: SectionSink + ?Sized,
{
    let query = validate_query(raw_query)?;
    config.validate()?;
    let client = http::build_client(config)?;

    sink.begin(&query, &config.sources);
    tracing::debug!(sources = config.sources.len(), "starting fan-out");

    // 1. Fan out to all sources concurrently.
    let mut pending: FuturesUnordered<_> = config
        .sources
        .iter()
        .enumerate()
        .map(|(idx, kind)| {
            let client = &client;
            let query = query.as_str();
            async move {
                let result = query_source(*kind, client, query, config).await;
                (idx, *kind, result)
            }
        })
        .collect();

    // 2. Report each source as soon as it settles.
    let mut slots: Vec<Option<SectionOutcome>> = vec![None; config.sources.len()];
    while let Some((idx, kind, result)) = pending.next().await {
        match &result {
            Ok(payload) => {
                tracing::debug!(source = %kind, count = payload.item_count(), "source returned results");
                sink.render_results(kind, payload);
            }
            Err(err) => {
                tracing::warn!(source = %kind, error = %err, "source query failed");
                sink.render_error(kind, err);
            }
        }
        slots[idx] = Some(SectionOutcome {
            kind,
            outcome: Outcome::from(result),
        });
    }
    drop(pending);

    // 3. Configured order, independent of completion order.
    let report = FanOutReport {
        query,
        sections: slots.into_iter().flatten().collect(),
    };
    tracing::info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "fan-out complete"
    );

    sink.finish(&report);
    Ok(report)
}

/// Query a single source, dispatching to the concrete implementation.
async fn query_source(
    kind: SourceKind,
    client: &reqwest::Client,
    query: &str,
    config: &SearchConfig,
) -> Result<SourcePayload, SearchError> {
    match kind {
        SourceKind::AiAnswer => GeminiSource.fetch(client, query, config).await,
        SourceKind::Videos => YouTubeSource.fetch(client, query, config).await,
        SourceKind::Articles => ArticlesSource.fetch(client, query, config).await,
        SourceKind::StudyMaterials => StudyMaterialsSource.fetch(client, query, config).await,
        SourceKind::CheatSheets => CheatSheetsSource.fetch(client, query, config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every callback in call order.
    #[derive(Default)]
    struct RecordingSink {
        events: Vec<String>,
    }

    impl SectionSink for RecordingSink {
        fn begin(&mut self, query: &str, sources: &[SourceKind]) {
            self.events.push(format!("begin {query} {}", sources.len()));
        }

        fn render_results(&mut self, kind: SourceKind, _payload: &SourcePayload) {
            self.events.push(format!("ok {kind}"));
        }

        fn render_error(&mut self, kind: SourceKind, _error: &SearchError) {
            self.events.push(format!("err {kind}"));
        }

        fn finish(&mut self, report: &FanOutReport) {
            self.events.push(format!("finish {}", report.sections.len()));
        }
    }

    #[test]
    fn validate_query_trims() {
        assert_eq!(validate_query("  photosynthesis \n").expect("valid"), "photosynthesis");
    }

    #[test]
    fn validate_query_rejects_empty_and_whitespace() {
        assert_eq!(validate_query(""), Err(SearchError::EmptyQuery));
        assert_eq!(validate_query(" \t\n "), Err(SearchError::EmptyQuery));
    }

    #[tokio::test]
    async fn empty_query_never_touches_sink() {
        let mut sink = RecordingSink::default();
        let err = fan_out("   ", &SearchConfig::default(), &mut sink)
            .await
            .unwrap_err();
        assert_eq!(err, SearchError::EmptyQuery);
        assert!(sink.events.is_empty());
    }

    #[tokio::test]
    async fn invalid_config_never_touches_sink() {
        let config = SearchConfig {
            sources: vec![],
            ..Default::default()
        };
        let mut sink = RecordingSink::default();
        assert!(fan_out("rust", &config, &mut sink).await.is_err());
        assert!(sink.events.is_empty());
    }

    #[tokio::test]
    async fn missing_credentials_fail_each_source_independently() {
        // No keys configured: every source fails locally, the fan-out does not.
        let mut config = SearchConfig::default();
        config.endpoints = crate::config::Endpoints::all("http://127.0.0.1:1");
        let mut sink = RecordingSink::default();

        let report = fan_out("rust", &config, &mut sink)
            .await
            .expect("per-source failures must not fail the fan-out");

        assert_eq!(report.query, "rust");
        assert_eq!(report.failed(), 5);
        let kinds: Vec<_> = report.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SourceKind::all());

        assert_eq!(sink.events.first().map(String::as_str), Some("begin rust 5"));
        assert_eq!(sink.events.last().map(String::as_str), Some("finish 5"));
        let errors = sink.events.iter().filter(|e| e.starts_with("err ")).count();
        assert_eq!(errors, 5);
    }
}
