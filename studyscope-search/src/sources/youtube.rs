//! Video source backed by the YouTube Data API v3 `search` endpoint.

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::source::Source;
use crate::types::{truncate_chars, SourceKind, SourcePayload, VideoResult};

/// Shown when a video has no description.
pub const NO_DESCRIPTION: &str = "No description available";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
}

/// YouTube-backed video source.
pub struct YouTubeSource;

impl Source for YouTubeSource {
    async fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        config: &SearchConfig,
    ) -> Result<SourcePayload, SearchError> {
        if config.keys.youtube.is_empty() {
            return Err(SearchError::MissingCredential("YouTube API key".into()));
        }
        tracing::trace!(query, "video search");

        let cap = config.limits.videos;
        let max_results = cap.to_string();
        let url = http::endpoint(&config.endpoints.youtube, "/youtube/v3/search");
        let request = client.get(url).query(&[
            ("part", "snippet"),
            ("q", query),
            ("maxResults", max_results.as_str()),
            ("type", "video"),
            ("order", "relevance"),
            ("key", config.keys.youtube.as_str()),
        ]);

        let response: SearchResponse = http::send_json(request, "youtube").await?;
        Ok(SourcePayload::Videos(shape_videos(
            response,
            cap,
            config.limits.snippet_chars,
        )))
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Videos
    }
}

/// Keep the first `cap` playable items in API order, truncating descriptions.
fn shape_videos(response: SearchResponse, cap: usize, snippet_chars: usize) -> Vec<VideoResult> {
    response
        .items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.id.video_id?;
            let description = if item.snippet.description.is_empty() {
                NO_DESCRIPTION.to_owned()
            } else {
                truncate_chars(&item.snippet.description, snippet_chars)
            };
            Some(VideoResult {
                title: item.snippet.title,
                description,
                video_id,
            })
        })
        .take(cap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(count: usize) -> SearchResponse {
        let items: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"id": {{"kind": "youtube#video", "videoId": "v{i}"}}, "snippet": {{"title": "Video {i}", "description": "About {i}"}}}}"#
                )
            })
            .collect();
        serde_json::from_str(&format!(r#"{{"items": [{}]}}"#, items.join(","))).expect("parse")
    }

    #[test]
    fn eight_items_capped_at_five_in_order() {
        let videos = shape_videos(response_with(8), 5, 120);
        assert_eq!(videos.len(), 5);
        let ids: Vec<_> = videos.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, ["v0", "v1", "v2", "v3", "v4"]);
    }

    #[test]
    fn fewer_items_than_cap_kept() {
        assert_eq!(shape_videos(response_with(2), 5, 120).len(), 2);
    }

    #[test]
    fn empty_description_replaced() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"items": [{"id": {"videoId": "x"}, "snippet": {"title": "T", "description": ""}}]}"#,
        )
        .expect("parse");
        let videos = shape_videos(response, 5, 120);
        assert_eq!(videos[0].description, NO_DESCRIPTION);
    }

    #[test]
    fn whitespace_description_kept_verbatim() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"items": [{"id": {"videoId": "x"}, "snippet": {"title": "T", "description": "  \n"}}]}"#,
        )
        .expect("parse");
        let videos = shape_videos(response, 5, 120);
        assert_eq!(videos[0].description, "  \n");
    }

    #[test]
    fn missing_description_replaced() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"items": [{"id": {"videoId": "x"}, "snippet": {"title": "T"}}]}"#)
                .expect("parse");
        let videos = shape_videos(response, 5, 120);
        assert_eq!(videos[0].description, NO_DESCRIPTION);
    }

    #[test]
    fn long_description_truncated() {
        let long = "d".repeat(200);
        let json = format!(
            r#"{{"items": [{{"id": {{"videoId": "x"}}, "snippet": {{"title": "T", "description": "{long}"}}}}]}}"#
        );
        let response: SearchResponse = serde_json::from_str(&json).expect("parse");
        let videos = shape_videos(response, 5, 120);
        assert_eq!(videos[0].description.chars().count(), 123);
        assert!(videos[0].description.ends_with("..."));
    }

    #[test]
    fn items_without_video_id_skipped() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"items": [
                {"id": {"kind": "youtube#channel", "channelId": "c"}, "snippet": {"title": "Channel"}},
                {"id": {"videoId": "v"}, "snippet": {"title": "Video"}}
            ]}"#,
        )
        .expect("parse");
        let videos = shape_videos(response, 5, 120);
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].video_id, "v");
    }

    #[test]
    fn missing_items_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").expect("parse");
        assert!(shape_videos(response, 5, 120).is_empty());
    }

    #[tokio::test]
    async fn missing_key_fails_without_request() {
        let client = reqwest::Client::new();
        let err = YouTubeSource
            .fetch(&client, "rust", &SearchConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::MissingCredential(_)));
    }
}
