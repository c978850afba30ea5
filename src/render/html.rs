//! Standalone HTML results page.
//!
//! Sections are collected as they settle and laid out in fixed source
//! order when [`HtmlPage::render`] is called. Every string that came from
//! an API is escaped and link targets are limited to web and mail schemes.
//! The AI answer goes through markdown rendering, which escapes raw HTML.

use std::fmt::Write as _;
use std::path::Path;

use studyscope_search::sources::cheat_sheets::RECOMMENDED_SITES;
use studyscope_search::types::WebResult;
use studyscope_search::{SearchError, SectionSink, SourceKind, SourcePayload};

use super::{
    html_escape, icon, render_markdown_html, safe_href, troubleshooting, STUDY_MATERIAL_TIPS,
};
use crate::theme::Theme;

const STYLE: &str = r#"
:root[data-theme="light"] { --bg: #f7f7fb; --fg: #1d1d28; --card: #ffffff; --accent: #3b5bdb; --error: #c92a2a; }
:root[data-theme="dark"] { --bg: #14141c; --fg: #e6e6f0; --card: #1f1f2b; --accent: #8da2fb; --error: #ff8787; }
body { background: var(--bg); color: var(--fg); font-family: system-ui, sans-serif; margin: 0 auto; max-width: 60rem; padding: 1rem; }
nav a { color: var(--accent); margin-right: 1rem; }
section { background: var(--card); border-radius: 8px; margin: 1rem 0; padding: 1rem 1.5rem; }
a { color: var(--accent); }
.error { color: var(--error); }
.tips { opacity: 0.85; }
"#;

type Slot = Option<Result<SourcePayload, SearchError>>;

/// Collects settled sections and renders them as one HTML document.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    title: String,
    query: String,
    sources: Vec<SourceKind>,
    slots: Vec<Slot>,
}

impl HtmlPage {
    /// Empty page with the given `<title>`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            query: String::new(),
            sources: SourceKind::all().to_vec(),
            slots: vec![None; SourceKind::all().len()],
        }
    }

    fn slot_index(kind: SourceKind) -> usize {
        SourceKind::all()
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default()
    }

    /// Number of sections that have settled so far.
    pub fn settled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Render the full document.
    pub fn render(&self, theme: Theme) -> String {
        let mut out = String::with_capacity(8 * 1024);
        let _ = write!(
            out,
            "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"{theme}\">\n<head>\n\
             <meta charset=\"utf-8\">\n<title>{}</title>\n<style>{STYLE}</style>\n</head>\n\
             <body>\n<header id=\"top\">\n<h1>{}</h1>\n",
            html_escape(&self.title),
            html_escape(&self.title),
        );
        if !self.query.is_empty() {
            let _ = writeln!(
                out,
                "<p class=\"query\">Results for <strong>{}</strong></p>",
                html_escape(&self.query)
            );
        }
        out.push_str("</header>\n<nav>\n");
        for kind in self.ordered_sources() {
            let _ = writeln!(
                out,
                "<a href=\"#{}\">{} {}</a>",
                kind.section_id(),
                icon(kind),
                kind.heading()
            );
        }
        out.push_str("</nav>\n<main>\n");
        for kind in self.ordered_sources() {
            self.push_section(&mut out, kind);
        }
        out.push_str("</main>\n<footer><a href=\"#top\">Back to top</a></footer>\n</body>\n</html>\n");
        out
    }

    /// Render and write to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to(&self, path: &Path, theme: Theme) -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render(theme))
    }

    fn ordered_sources(&self) -> impl Iterator<Item = SourceKind> + '_ {
        SourceKind::all()
            .iter()
            .copied()
            .filter(|kind| self.sources.contains(kind))
    }

    fn push_section(&self, out: &mut String, kind: SourceKind) {
        let _ = writeln!(
            out,
            "<section id=\"{}\">\n<h2>{} {}</h2>",
            kind.section_id(),
            icon(kind),
            kind.heading()
        );
        match &self.slots[Self::slot_index(kind)] {
            None => out.push_str("<p>Loading...</p>\n"),
            Some(Ok(payload)) => self.push_payload(out, payload),
            Some(Err(error)) => push_error(out, kind, error),
        }
        out.push_str("</section>\n");
    }

    fn push_payload(&self, out: &mut String, payload: &SourcePayload) {
        let query = html_escape(&self.query);
        match payload {
            SourcePayload::AiAnswer(answer) => {
                let _ = writeln!(
                    out,
                    "<div class=\"answer\">{}</div>\n<p class=\"model\">Model: {}</p>",
                    render_markdown_html(&answer.text),
                    html_escape(&answer.model)
                );
            }
            SourcePayload::Videos(videos) if videos.is_empty() => {
                out.push_str("<p>No videos found.</p>\n");
            }
            SourcePayload::Videos(videos) => {
                out.push_str("<ol class=\"videos\">\n");
                for video in videos {
                    let _ = writeln!(
                        out,
                        "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a><p>{}</p></li>",
                        html_escape(&video.watch_url()),
                        html_escape(&video.title),
                        html_escape(&video.description)
                    );
                }
                out.push_str("</ol>\n");
            }
            SourcePayload::Articles(articles) if articles.is_empty() => {
                out.push_str("<p>No articles found.</p>\n");
            }
            SourcePayload::Articles(articles) => push_web_list(out, articles, "📄"),
            SourcePayload::StudyMaterials(materials) if materials.is_empty() => {
                let _ = writeln!(
                    out,
                    "<div class=\"tips\">\n<p>No study materials found for \"{query}\".</p>\n\
                     <p><strong>Tips:</strong></p>"
                );
                push_plain_list(out, STUDY_MATERIAL_TIPS);
                out.push_str("</div>\n");
            }
            SourcePayload::StudyMaterials(materials) => {
                if !materials.pdfs.is_empty() {
                    out.push_str("<h3>PDF Documents</h3>\n");
                    push_web_list(out, &materials.pdfs, "");
                }
                if !materials.presentations.is_empty() {
                    out.push_str("<h3>Presentations (PPT/PPTX)</h3>\n");
                    push_web_list(out, &materials.presentations, "");
                }
            }
            SourcePayload::CheatSheets(sheets) if sheets.is_empty() => {
                let _ = writeln!(
                    out,
                    "<div class=\"tips\">\n<p>No cheat sheets found for \"{query}\".</p>\n\
                     <p><strong>Recommended Cheat Sheet Websites:</strong></p>"
                );
                push_site_list(out, RECOMMENDED_SITES);
                out.push_str("</div>\n");
            }
            SourcePayload::CheatSheets(sheets) => {
                out.push_str("<ul>\n");
                for sheet in sheets {
                    push_web_item(out, &sheet.result, sheet.site.marker());
                }
                out.push_str("</ul>\n");
            }
        }
    }
}

impl SectionSink for HtmlPage {
    fn begin(&mut self, query: &str, sources: &[SourceKind]) {
        self.query = query.to_owned();
        self.sources = sources.to_vec();
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    fn render_results(&mut self, kind: SourceKind, payload: &SourcePayload) {
        self.slots[Self::slot_index(kind)] = Some(Ok(payload.clone()));
    }

    fn render_error(&mut self, kind: SourceKind, error: &SearchError) {
        self.slots[Self::slot_index(kind)] = Some(Err(error.clone()));
    }
}

fn push_error(out: &mut String, kind: SourceKind, error: &SearchError) {
    let _ = writeln!(
        out,
        "<p class=\"error\">❌ <strong>Error:</strong> {}</p>\n<p><strong>Troubleshooting:</strong></p>",
        html_escape(&error.to_string())
    );
    push_plain_list(out, troubleshooting(kind));
    if kind == SourceKind::CheatSheets {
        push_site_list(out, &RECOMMENDED_SITES[..3]);
    }
}

fn push_web_list(out: &mut String, items: &[WebResult], marker: &str) {
    out.push_str("<ul>\n");
    for item in items {
        push_web_item(out, item, marker);
    }
    out.push_str("</ul>\n");
}

fn push_web_item(out: &mut String, item: &WebResult, marker: &str) {
    let label = if marker.is_empty() {
        html_escape(&item.title)
    } else {
        format!("{marker} {}", html_escape(&item.title))
    };
    let _ = writeln!(
        out,
        "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{label}</a><p>{}</p></li>",
        html_escape(safe_href(&item.url)),
        html_escape(&item.snippet)
    );
}

fn push_plain_list(out: &mut String, items: &[&str]) {
    out.push_str("<ul>\n");
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", html_escape(item));
    }
    out.push_str("</ul>\n");
}

fn push_site_list(out: &mut String, sites: &[(&str, &str)]) {
    out.push_str("<ul class=\"sites\">\n");
    for (name, url) in sites {
        let _ = writeln!(
            out,
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>",
            html_escape(url),
            html_escape(name)
        );
    }
    out.push_str("</ul>\n");
}
