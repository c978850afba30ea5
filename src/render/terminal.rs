//! Plain-text renderer that prints each section as soon as its source settles.

use std::fmt::Write as _;
use std::io::{self, Write};

use studyscope_search::sources::cheat_sheets::RECOMMENDED_SITES;
use studyscope_search::types::{StudyMaterials, WebResult};
use studyscope_search::{FanOutReport, SearchError, SectionSink, SourceKind, SourcePayload};

use super::{icon, troubleshooting, STUDY_MATERIAL_TIPS};

/// Streams a fan-out to any [`Write`] (usually stdout).
///
/// Sections appear in completion order. Write failures are remembered and
/// surfaced by [`TerminalRenderer::into_inner`].
pub struct TerminalRenderer<W: Write> {
    out: W,
    query: String,
    io_error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            query: String::new(),
            io_error: None,
        }
    }

    /// Return the writer, or the first write error encountered.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error raised while rendering.
    pub fn into_inner(self) -> io::Result<W> {
        match self.io_error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, text: &str) {
        if self.io_error.is_some() {
            return;
        }
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "terminal output failed");
            self.io_error = Some(e);
        }
    }
}

impl<W: Write> SectionSink for TerminalRenderer<W> {
    fn begin(&mut self, query: &str, sources: &[SourceKind]) {
        self.query = query.to_owned();
        let names: Vec<&str> = sources.iter().map(|k| k.heading()).collect();
        let banner = format!("Searching for \"{query}\"...\n  ({})\n", names.join(", "));
        self.emit(&banner);
    }

    fn render_results(&mut self, kind: SourceKind, payload: &SourcePayload) {
        let text = format_results(kind, payload, &self.query);
        self.emit(&text);
    }

    fn render_error(&mut self, kind: SourceKind, error: &SearchError) {
        let text = format_error(kind, error);
        self.emit(&text);
    }

    fn finish(&mut self, report: &FanOutReport) {
        let summary = format!(
            "\nDone: {} succeeded, {} failed\n",
            report.succeeded(),
            report.failed()
        );
        self.emit(&summary);
    }
}

fn header(kind: SourceKind) -> String {
    format!("\n{} {}\n{}\n", icon(kind), kind.heading(), "-".repeat(40))
}

/// Plain-text rendering of one successful section.
pub fn format_results(kind: SourceKind, payload: &SourcePayload, query: &str) -> String {
    let mut out = header(kind);
    match payload {
        SourcePayload::AiAnswer(answer) => {
            let _ = writeln!(out, "{}", answer.text.trim_end());
            let _ = writeln!(out, "  (model: {})", answer.model);
        }
        SourcePayload::Videos(videos) if videos.is_empty() => {
            out.push_str("No videos found.\n");
        }
        SourcePayload::Videos(videos) => {
            for (i, video) in videos.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", i + 1, video.title);
                let _ = writeln!(out, "   {}", video.watch_url());
                let _ = writeln!(out, "   {}", video.description);
            }
        }
        SourcePayload::Articles(articles) if articles.is_empty() => {
            out.push_str("No articles found.\n");
        }
        SourcePayload::Articles(articles) => push_web_list(&mut out, articles, ""),
        SourcePayload::StudyMaterials(materials) => {
            push_study_materials(&mut out, materials, query);
        }
        SourcePayload::CheatSheets(sheets) if sheets.is_empty() => {
            let _ = writeln!(out, "No cheat sheets found for \"{query}\".");
            out.push_str("Recommended cheat sheet websites:\n");
            for (name, url) in RECOMMENDED_SITES {
                let _ = writeln!(out, "  - {name}: {url}");
            }
        }
        SourcePayload::CheatSheets(sheets) => {
            for (i, sheet) in sheets.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{}. {} {}",
                    i + 1,
                    sheet.site.marker(),
                    sheet.result.title
                );
                let _ = writeln!(out, "   {}", sheet.result.url);
                if !sheet.result.snippet.is_empty() {
                    let _ = writeln!(out, "   {}", sheet.result.snippet);
                }
            }
        }
    }
    out
}

fn push_study_materials(out: &mut String, materials: &StudyMaterials, query: &str) {
    if materials.is_empty() {
        let _ = writeln!(out, "No study materials found for \"{query}\".");
        out.push_str("Tips:\n");
        for tip in STUDY_MATERIAL_TIPS {
            let _ = writeln!(out, "  - {tip}");
        }
        return;
    }
    if !materials.pdfs.is_empty() {
        out.push_str("PDF documents:\n");
        push_web_list(out, &materials.pdfs, "  ");
    }
    if !materials.presentations.is_empty() {
        out.push_str("Presentations (PPT/PPTX):\n");
        push_web_list(out, &materials.presentations, "  ");
    }
}

fn push_web_list(out: &mut String, items: &[WebResult], indent: &str) {
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{indent}{}. {}", i + 1, item.title);
        let _ = writeln!(out, "{indent}   {}", item.url);
        if !item.snippet.is_empty() {
            let _ = writeln!(out, "{indent}   {}", item.snippet);
        }
    }
}

/// Plain-text rendering of one failed section.
pub fn format_error(kind: SourceKind, error: &SearchError) -> String {
    let mut out = header(kind);
    let _ = writeln!(out, "Error: {error}");
    out.push_str("Troubleshooting:\n");
    for hint in troubleshooting(kind) {
        let _ = writeln!(out, "  - {hint}");
    }
    if kind == SourceKind::CheatSheets {
        for (name, url) in RECOMMENDED_SITES.iter().take(3) {
            let _ = writeln!(out, "    {name}: {url}");
        }
    }
    out
}
