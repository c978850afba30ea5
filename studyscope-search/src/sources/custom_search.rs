//! Google Custom Search JSON API client.
//!
//! Shared by the articles, study-materials and cheat-sheets sources. Each
//! call is one `GET /customsearch/v1` request with `key`, `cx`, `q` and `num`.

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::WebResult;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    title: String,
    link: String,
    #[serde(default)]
    snippet: Option<String>,
}

impl From<SearchItem> for WebResult {
    fn from(item: SearchItem) -> Self {
        Self {
            title: item.title,
            url: item.link,
            snippet: item.snippet.unwrap_or_default(),
        }
    }
}

/// Fail early when either Custom Search credential is missing.
///
/// # Errors
///
/// Returns [`SearchError::MissingCredential`] without touching the network.
pub fn require_credentials(config: &SearchConfig) -> Result<(), SearchError> {
    if config.keys.custom_search.is_empty() || config.keys.custom_search_engine_id.is_empty() {
        return Err(SearchError::MissingCredential(
            "API key or Search Engine ID is missing".into(),
        ));
    }
    Ok(())
}

/// Run one Custom Search query and keep at most `num` results, in API order.
///
/// # Errors
///
/// Returns [`SearchError`] on missing credentials, transport failure,
/// non-2xx status, or a malformed body. A body without `items` is an
/// empty result, not an error.
pub async fn query(
    client: &reqwest::Client,
    config: &SearchConfig,
    q: &str,
    num: usize,
) -> Result<Vec<WebResult>, SearchError> {
    require_credentials(config)?;
    tracing::trace!(query = q, num, "custom search");

    let url = http::endpoint(&config.endpoints.custom_search, "/customsearch/v1");
    let num_param = num.to_string();
    let request = client.get(url).query(&[
        ("key", config.keys.custom_search.as_str()),
        ("cx", config.keys.custom_search_engine_id.as_str()),
        ("q", q),
        ("num", num_param.as_str()),
    ]);

    let response: SearchResponse = http::send_json(request, "custom search").await?;
    Ok(response
        .items
        .into_iter()
        .take(num)
        .map(WebResult::from)
        .collect())
}
