//! Cheat-sheet source: cheat sheets plus quick reference guides.
//!
//! Two Custom Search sub-queries run concurrently (`<q> cheat sheet` and
//! `<q> quick reference guide`). Their results overlap often, so they are
//! merged in first-seen order with duplicates removed by URL, then each
//! hit is classified by the site it comes from.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::orchestrator::dedup::merge_unique;
use crate::source::Source;
use crate::types::{CheatSheet, SourceKind, SourcePayload};

use super::{settle_subqueries, SubQuery};

/// Well-known cheat-sheet collections, shown when nothing was found.
pub const RECOMMENDED_SITES: &[(&str, &str)] = &[
    ("Cheatography - 6,000+ Free Cheat Sheets", "https://cheatography.com"),
    ("OverAPI - Programming Cheat Sheets", "https://overapi.com"),
    (
        "Codecademy - Coding Cheat Sheets",
        "https://www.codecademy.com/resources/cheatsheets/all",
    ),
    (
        "GeeksforGeeks - All Coding Cheat Sheets",
        "https://www.geeksforgeeks.org/cheatsheets/",
    ),
    (
        "Zero to Mastery - Tech Cheat Sheets",
        "https://zerotomastery.io/cheatsheets/",
    ),
];

/// Cheat sheet and quick reference source.
pub struct CheatSheetsSource;

impl CheatSheetsSource {
    /// The two sub-queries issued for `query`, cheat sheets first.
    pub(crate) fn subqueries(query: &str, config: &SearchConfig) -> [SubQuery; 2] {
        [
            SubQuery {
                label: "cheat sheet",
                query: format!("{query} cheat sheet"),
                num: config.limits.cheat_sheets,
            },
            SubQuery {
                label: "quick reference",
                query: format!("{query} quick reference guide"),
                num: config.limits.quick_reference,
            },
        ]
    }
}

impl Source for CheatSheetsSource {
    async fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        config: &SearchConfig,
    ) -> Result<SourcePayload, SearchError> {
        let subqueries = Self::subqueries(query, config);
        let groups = settle_subqueries(client, config, &subqueries).await?;

        let merged = merge_unique(groups);
        tracing::debug!(count = merged.len(), "cheat sheets after dedup");
        Ok(SourcePayload::CheatSheets(
            merged.into_iter().map(CheatSheet::from).collect(),
        ))
    }

    fn kind(&self) -> SourceKind {
        SourceKind::CheatSheets
    }

    fn request_count(&self) -> usize {
        2
    }
}
