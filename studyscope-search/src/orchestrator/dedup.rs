//! Order-preserving result deduplication by canonical URL.
//!
//! Used when two sub-queries against the same backend return overlapping
//! results. The first occurrence of a page wins and keeps its position;
//! later duplicates are dropped.

use std::collections::HashSet;

use crate::types::WebResult;

use super::url_normalize::canonical_url;

/// Merge result groups into one list, keeping the first occurrence of each URL.
///
/// Groups are visited in order and items within a group in order, so the
/// output order is the first-seen order across all groups.
///
/// # Examples
///
/// ```
/// use studyscope_search::orchestrator::dedup::merge_unique;
/// use studyscope_search::types::WebResult;
///
/// let item = |url: &str| WebResult { title: url.into(), url: url.into(), snippet: String::new() };
/// let merged = merge_unique([vec![item("a"), item("b")], vec![item("b"), item("c")]]);
/// let urls: Vec<_> = merged.iter().map(|r| r.url.as_str()).collect();
/// assert_eq!(urls, ["a", "b", "c"]);
/// ```
pub fn merge_unique<I>(groups: I) -> Vec<WebResult>
where
    I: IntoIterator<Item = Vec<WebResult>>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();

    for result in groups.into_iter().flatten() {
        if seen.insert(canonical_url(&result.url)) {
            merged.push(result);
        }
    }

    merged
}
