//! StudyScope: one study question, five kinds of answers.
//!
//! A question is sent at once to an AI completion API, a video search API
//! and a web search API (articles, study documents, cheat sheets). Each
//! source is shown as soon as it settles; a failing source only affects
//! its own section.
//!
//! # Architecture
//!
//! - **studyscope-search**: source clients, the settle-all join, dedup
//! - **config**: TOML configuration with environment key overrides
//! - **preferences / theme**: persisted light/dark choice
//! - **render**: terminal streaming and a standalone HTML page

pub mod config;
pub mod error;
pub mod paths;
pub mod preferences;
pub mod render;
pub mod theme;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use preferences::{Preferences, ThemeSettings};
pub use render::{HtmlPage, TerminalRenderer};
pub use theme::Theme;

pub use studyscope_search::{FanOutReport, SectionSink, SourceKind};

/// Run one fan-out with the application config, reporting to `sink`.
///
/// # Errors
///
/// Returns an error for a blank question or an invalid config. Per-source
/// failures are reported through `sink` and the returned report.
pub async fn ask<S>(query: &str, config: &AppConfig, sink: &mut S) -> Result<FanOutReport>
where
    S: SectionSink + ?Sized,
{
    Ok(studyscope_search::search_all(query, &config.search, sink).await?)
}
