//! Article source: one Custom Search query for the question as typed.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::source::Source;
use crate::types::{SourceKind, SourcePayload};

use super::custom_search;

/// General web article source.
pub struct ArticlesSource;

impl Source for ArticlesSource {
    async fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        config: &SearchConfig,
    ) -> Result<SourcePayload, SearchError> {
        let results = custom_search::query(client, config, query, config.limits.articles).await?;
        tracing::debug!(count = results.len(), "articles returned results");
        Ok(SourcePayload::Articles(results))
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Articles
    }
}
