//! Presentation surfaces for a fan-out: streaming terminal output and a
//! standalone HTML page.
//!
//! Both implement [`SectionSink`](studyscope_search::SectionSink), so the
//! fan-out core never knows which one it is talking to.

pub mod html;
pub mod terminal;

pub use html::HtmlPage;
pub use terminal::TerminalRenderer;

use studyscope_search::{FanOutReport, SearchError, SectionSink, SourceKind, SourcePayload};

/// Forwards every callback to two sinks, `first` then `second`.
#[derive(Debug)]
pub struct Tee<A, B> {
    /// Receives each callback first.
    pub first: A,
    /// Receives each callback second.
    pub second: B,
}

impl<A: SectionSink, B: SectionSink> SectionSink for Tee<A, B> {
    fn begin(&mut self, query: &str, sources: &[SourceKind]) {
        self.first.begin(query, sources);
        self.second.begin(query, sources);
    }

    fn render_results(&mut self, kind: SourceKind, payload: &SourcePayload) {
        self.first.render_results(kind, payload);
        self.second.render_results(kind, payload);
    }

    fn render_error(&mut self, kind: SourceKind, error: &SearchError) {
        self.first.render_error(kind, error);
        self.second.render_error(kind, error);
    }

    fn finish(&mut self, report: &FanOutReport) {
        self.first.finish(report);
        self.second.finish(report);
    }
}

/// Heading icon per source.
pub fn icon(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::AiAnswer => "🤖",
        SourceKind::Videos => "📺",
        SourceKind::Articles => "📰",
        SourceKind::StudyMaterials => "📚",
        SourceKind::CheatSheets => "📋",
    }
}

/// Suggestions shown under a failed source.
pub fn troubleshooting(kind: SourceKind) -> &'static [&'static str] {
    match kind {
        SourceKind::AiAnswer => &[
            "Verify the Gemini API key in the config file or STUDYSCOPE_GEMINI_API_KEY",
            "Check the key at https://aistudio.google.com",
            "Make sure the API key is active and valid",
        ],
        SourceKind::Videos => &[
            "Check the YouTube Data API key (STUDYSCOPE_YOUTUBE_API_KEY)",
        ],
        SourceKind::Articles | SourceKind::StudyMaterials => &[
            "Check the Custom Search API key and engine id (STUDYSCOPE_CSE_KEY, STUDYSCOPE_CSE_ID)",
            "Run with RUST_LOG=studyscope_search=debug for details",
        ],
        SourceKind::CheatSheets => &[
            "Browse popular cheat sheet sites manually (listed below)",
        ],
    }
}

/// Tips shown when the study material search finds nothing.
pub const STUDY_MATERIAL_TIPS: &[&str] = &[
    "Try more specific search terms (e.g., \"photosynthesis biology\")",
    "Common topics tend to have more publicly available materials",
    "Make sure your Custom Search Engine is set to \"Search the entire web\"",
];

/// Minimal HTML escaping for text and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Schemes a rendered link may point at. Scheme-less (relative) targets are also allowed.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Returns `true` when `url` is relative or uses an allowed scheme.
///
/// Whitespace and control characters are ignored while looking for the
/// scheme, since browsers drop them too (`java\tscript:`).
pub fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();
    match cleaned.find([':', '/', '?', '#']) {
        Some(idx) if cleaned[idx..].starts_with(':') => {
            let scheme = cleaned[..idx].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

/// `url` if [`is_safe_url`] accepts it, otherwise `"#"`.
pub fn safe_href(url: &str) -> &str {
    if is_safe_url(url) {
        url
    } else {
        tracing::debug!("dropped link with disallowed scheme");
        "#"
    }
}

/// Render markdown text to HTML via `pulldown_cmark`.
///
/// Raw HTML in the input is emitted as escaped text. Link and image
/// targets with a disallowed scheme are replaced by `#`.
pub fn render_markdown_html(content: &str) -> String {
    use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

    fn sanitize(dest_url: CowStr<'_>) -> CowStr<'_> {
        if is_safe_url(&dest_url) {
            dest_url
        } else {
            CowStr::Borrowed("#")
        }
    }

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(content, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            html_escape(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn markdown_renders_headings_and_lists() {
        let html = render_markdown_html("## Steps\n\n- light\n- water\n\n**bold**");
        assert!(html.contains("<h2>Steps</h2>"));
        assert!(html.contains("<li>light</li>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn markdown_escapes_raw_html() {
        let html = render_markdown_html("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn markdown_links_with_script_schemes_are_neutralised() {
        let html = render_markdown_html(
            "See [notes](javascript:alert(document.cookie)) and ![x](data:image/svg+xml;base64,AA) \
             or <JavaScript:alert(1)>.",
        );
        assert!(!html.to_ascii_lowercase().contains("javascript:"), "{html}");
        assert!(!html.contains("data:"), "{html}");
        assert!(html.contains("href=\"#\""));
    }

    #[test]
    fn markdown_keeps_web_and_relative_links() {
        let html = render_markdown_html(
            "[a](https://example.edu/a) [b](mailto:tutor@example.edu) [c](/notes#p2)",
        );
        assert!(html.contains("href=\"https://example.edu/a\""));
        assert!(html.contains("href=\"mailto:tutor@example.edu\""));
        assert!(html.contains("href=\"/notes#p2\""));
    }

    #[test]
    fn url_scheme_allowlist() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("HTTP://example.com"));
        assert!(is_safe_url("relative/page?x=a:b"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url(" java\tscript:alert(1)"));
        assert!(!is_safe_url("vbscript:msgbox"));
        assert!(!is_safe_url("data:text/html,hi"));
        assert_eq!(safe_href("javascript:void(0)"), "#");
        assert_eq!(safe_href("https://a.b/c"), "https://a.b/c");
    }

    #[test]
    fn tee_feeds_both_sinks() {
        let mut tee = Tee {
            first: HtmlPage::new("a"),
            second: HtmlPage::new("b"),
        };
        tee.begin("q", &[SourceKind::Articles]);
        tee.render_results(SourceKind::Articles, &SourcePayload::Articles(vec![]));
        assert_eq!(tee.first.settled(), 1);
        assert_eq!(tee.second.settled(), 1);
    }

    #[test]
    fn every_source_has_troubleshooting() {
        for kind in SourceKind::all() {
            assert!(!troubleshooting(*kind).is_empty(), "{kind}");
            assert!(!icon(*kind).is_empty());
        }
    }
}
