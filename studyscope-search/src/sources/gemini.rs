//! AI answer source backed by the Gemini `generateContent` API.
//!
//! Sends one POST to the primary model. When, and only when, that model
//! answers 404 (retired or renamed), the same prompt goes once to the
//! fallback model. Any other failure is final.

use serde::Deserialize;
use serde_json::json;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::source::Source;
use crate::types::{AiAnswer, SourceKind, SourcePayload};

/// Prompt prefix; the user's question is appended.
const PROMPT_PREFIX: &str = "Explain this topic in detail for students (in 3-4 paragraphs): ";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Gemini-backed AI answer source.
pub struct GeminiSource;

impl GeminiSource {
    /// Build the prompt sent for `query`.
    pub fn prompt(query: &str) -> String {
        format!("{PROMPT_PREFIX}{query}")
    }

    async fn generate(
        client: &reqwest::Client,
        config: &SearchConfig,
        model: &str,
        prompt: &str,
    ) -> Result<String, SearchError> {
        let url = http::endpoint(
            &config.endpoints.gemini,
            &format!("/v1beta/models/{model}:generateContent"),
        );
        let body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });
        let request = client
            .post(url)
            .query(&[("key", config.keys.gemini.as_str())])
            .json(&body);

        let response: GenerateResponse = http::send_json(request, "gemini").await?;
        extract_text(response)
    }
}

impl Source for GeminiSource {
    async fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        config: &SearchConfig,
    ) -> Result<SourcePayload, SearchError> {
        if config.keys.gemini.is_empty() {
            return Err(SearchError::MissingCredential("Gemini API key".into()));
        }
        tracing::trace!(query, "AI answer");

        let prompt = Self::prompt(query);
        let primary = config.models.primary.as_str();

        let (model, result) = match Self::generate(client, config, primary, &prompt).await {
            Err(err) if err.status() == Some(404) && !config.models.fallback.is_empty() => {
                let fallback = config.models.fallback.as_str();
                tracing::info!(primary, fallback, "primary model not found, trying fallback");
                (
                    fallback,
                    Self::generate(client, config, fallback, &prompt).await,
                )
            }
            other => (primary, other),
        };

        let text = result?;
        Ok(SourcePayload::AiAnswer(AiAnswer {
            model: model.to_owned(),
            text,
        }))
    }

    fn kind(&self) -> SourceKind {
        SourceKind::AiAnswer
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response.
fn extract_text(response: GenerateResponse) -> Result<String, SearchError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| SearchError::Parse("invalid response format".into()))
}
