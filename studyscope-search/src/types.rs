//! Core types for sources and the result sets they return.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One external API queried for one category of result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Free-text explanation from the AI completion API.
    AiAnswer,
    /// Top videos from the video search API.
    Videos,
    /// General web articles.
    Articles,
    /// PDF documents and slide decks.
    StudyMaterials,
    /// Cheat sheets and quick reference guides.
    CheatSheets,
}

impl SourceKind {
    /// Returns the human-readable heading for this source's section.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::AiAnswer => "AI Answer",
            Self::Videos => "Top YouTube Videos",
            Self::Articles => "Related Articles",
            Self::StudyMaterials => "Study Materials",
            Self::CheatSheets => "Cheat Sheets & Quick References",
        }
    }

    /// Returns the stable section id used for in-page navigation.
    pub fn section_id(&self) -> &'static str {
        match self {
            Self::AiAnswer => "ai-answer",
            Self::Videos => "videos",
            Self::Articles => "articles",
            Self::StudyMaterials => "study-materials",
            Self::CheatSheets => "cheat-sheets",
        }
    }

    /// Returns the config/CLI name of this source.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AiAnswer => "ai_answer",
            Self::Videos => "videos",
            Self::Articles => "articles",
            Self::StudyMaterials => "study_materials",
            Self::CheatSheets => "cheat_sheets",
        }
    }

    /// Returns all sources in display order.
    pub fn all() -> &'static [SourceKind] {
        &[
            Self::AiAnswer,
            Self::Videos,
            Self::Articles,
            Self::StudyMaterials,
            Self::CheatSheets,
        ]
    }

    /// Parses a config/CLI name (`ai_answer`, `videos`, ...). Dashes are accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalised = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == normalised)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single web search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebResult {
    /// Page title.
    pub title: String,
    /// Target URL. Also the identity used for deduplication.
    pub url: String,
    /// Short text summary; empty when the API sent none.
    pub snippet: String,
}

/// A single video search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    /// Video title.
    pub title: String,
    /// Description, already truncated for display.
    pub description: String,
    /// Platform video id.
    pub video_id: String,
}

impl VideoResult {
    /// Public watch URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// The AI completion for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAnswer {
    /// Model that produced the answer (primary or fallback).
    pub model: String,
    /// Free text, possibly containing light markdown.
    pub text: String,
}

/// Study material hits, grouped by document type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyMaterials {
    /// `filetype:pdf` hits.
    pub pdfs: Vec<WebResult>,
    /// `filetype:ppt OR filetype:pptx` hits.
    pub presentations: Vec<WebResult>,
}

impl StudyMaterials {
    /// Returns `true` when neither group has results.
    pub fn is_empty(&self) -> bool {
        self.pdfs.is_empty() && self.presentations.is_empty()
    }
}

/// Which kind of site a cheat sheet comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheatSheetSite {
    /// Dedicated cheat-sheet collections.
    Featured,
    /// Coding-focused learning sites and repositories.
    Code,
    /// Anything else.
    Document,
}

impl CheatSheetSite {
    /// Classify a URL by the site it points at.
    pub fn classify(url: &str) -> Self {
        const FEATURED: &[&str] = &["cheatography.com", "overapi.com"];
        const CODE: &[&str] = &["codecademy.com", "geeksforgeeks.org", "github.com"];

        if FEATURED.iter().any(|site| url.contains(site)) {
            Self::Featured
        } else if CODE.iter().any(|site| url.contains(site)) {
            Self::Code
        } else {
            Self::Document
        }
    }

    /// Short marker shown before the title.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Featured => "⭐",
            Self::Code => "💻",
            Self::Document => "📄",
        }
    }
}

/// A cheat sheet hit with its site classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatSheet {
    /// The underlying web result.
    pub result: WebResult,
    /// Site classification derived from the URL.
    pub site: CheatSheetSite,
}

impl From<WebResult> for CheatSheet {
    fn from(result: WebResult) -> Self {
        let site = CheatSheetSite::classify(&result.url);
        Self { result, site }
    }
}

/// The successful result set of one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "data", rename_all = "snake_case")]
pub enum SourcePayload {
    /// See [`SourceKind::AiAnswer`].
    AiAnswer(AiAnswer),
    /// See [`SourceKind::Videos`].
    Videos(Vec<VideoResult>),
    /// See [`SourceKind::Articles`].
    Articles(Vec<WebResult>),
    /// See [`SourceKind::StudyMaterials`].
    StudyMaterials(StudyMaterials),
    /// See [`SourceKind::CheatSheets`].
    CheatSheets(Vec<CheatSheet>),
}

impl SourcePayload {
    /// Which source produced this payload.
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::AiAnswer(_) => SourceKind::AiAnswer,
            Self::Videos(_) => SourceKind::Videos,
            Self::Articles(_) => SourceKind::Articles,
            Self::StudyMaterials(_) => SourceKind::StudyMaterials,
            Self::CheatSheets(_) => SourceKind::CheatSheets,
        }
    }

    /// Number of items in the payload. An AI answer counts as one.
    pub fn item_count(&self) -> usize {
        match self {
            Self::AiAnswer(_) => 1,
            Self::Videos(items) => items.len(),
            Self::Articles(items) => items.len(),
            Self::StudyMaterials(materials) => {
                materials.pdfs.len() + materials.presentations.len()
            }
            Self::CheatSheets(items) => items.len(),
        }
    }

    /// Returns `true` when the source answered but found nothing.
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// Truncate `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_owned(),
    }
}
