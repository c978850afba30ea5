//! Structural checks on the rendered HTML page.

use scraper::{Html, Selector};
use studyscope::{HtmlPage, SectionSink, SourceKind, Theme};
use studyscope_search::types::{AiAnswer, CheatSheet, StudyMaterials, VideoResult, WebResult};
use studyscope_search::{SearchError, SourcePayload};

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

fn web(title: &str, url: &str) -> WebResult {
    WebResult {
        title: title.into(),
        url: url.into(),
        snippet: format!("About {title}"),
    }
}

/// Settles every source in reverse display order, mimicking out-of-order completion.
fn full_page() -> HtmlPage {
    let mut page = HtmlPage::new("StudyScope");
    page.begin("photosynthesis", SourceKind::all());
    page.render_results(
        SourceKind::CheatSheets,
        &SourcePayload::CheatSheets(vec![
            CheatSheet::from(web("Bio sheet", "https://cheatography.com/bio")),
            CheatSheet::from(web("Notes", "https://github.com/x/notes")),
        ]),
    );
    page.render_results(
        SourceKind::StudyMaterials,
        &SourcePayload::StudyMaterials(StudyMaterials::default()),
    );
    page.render_results(
        SourceKind::Articles,
        &SourcePayload::Articles(vec![web("<script>x</script>", "https://example.com/a?b=1&c=2")]),
    );
    page.render_error(SourceKind::Videos, &SearchError::Http("timed out".into()));
    page.render_results(
        SourceKind::AiAnswer,
        &SourcePayload::AiAnswer(AiAnswer {
            model: "gemini-2.5-flash".into(),
            text: "# Photosynthesis\n\n- light\n- water".into(),
        }),
    );
    page
}

#[test]
fn sections_follow_display_order_regardless_of_completion() {
    let doc = Html::parse_document(&full_page().render(Theme::Dark));
    let ids: Vec<&str> = doc
        .select(&sel("main > section"))
        .filter_map(|s| s.value().attr("id"))
        .collect();
    assert_eq!(
        ids,
        vec!["ai-answer", "videos", "articles", "study-materials", "cheat-sheets"]
    );
}

#[test]
fn nav_links_target_every_section() {
    let doc = Html::parse_document(&full_page().render(Theme::Dark));
    let hrefs: Vec<&str> = doc
        .select(&sel("nav a"))
        .filter_map(|a| a.value().attr("href"))
        .collect();
    for kind in SourceKind::all() {
        let target = format!("#{}", kind.section_id());
        assert!(hrefs.contains(&target.as_str()), "missing nav link {target}");
    }
    assert_eq!(doc.select(&sel("a[href=\"#top\"]")).count(), 1);
    assert_eq!(doc.select(&sel("#top")).count(), 1);
}

#[test]
fn theme_is_set_on_root_element() {
    for theme in [Theme::Light, Theme::Dark] {
        let doc = Html::parse_document(&full_page().render(theme));
        let html = doc.select(&sel("html")).next().expect("html element");
        assert_eq!(html.value().attr("data-theme"), Some(theme.as_str()));
    }
}

#[test]
fn error_is_confined_to_its_section() {
    let doc = Html::parse_document(&full_page().render(Theme::Dark));
    let errors: Vec<_> = doc.select(&sel(".error")).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(doc.select(&sel("#videos .error")).count(), 1);
    assert!(errors[0].text().collect::<String>().contains("timed out"));
    assert_eq!(doc.select(&sel("#articles li")).count(), 1);
}

#[test]
fn api_text_is_escaped() {
    let rendered = full_page().render(Theme::Dark);
    assert!(!rendered.contains("<script>x</script>"));
    let doc = Html::parse_document(&rendered);
    assert_eq!(doc.select(&sel("script")).count(), 0);
    let link = doc.select(&sel("#articles a")).next().expect("article link");
    assert_eq!(link.value().attr("href"), Some("https://example.com/a?b=1&c=2"));
}

#[test]
fn ai_answer_markdown_becomes_markup() {
    let doc = Html::parse_document(&full_page().render(Theme::Dark));
    assert_eq!(doc.select(&sel("#ai-answer h1")).count(), 1);
    assert_eq!(doc.select(&sel("#ai-answer .answer li")).count(), 2);
}

#[test]
fn empty_study_materials_show_tips() {
    let doc = Html::parse_document(&full_page().render(Theme::Dark));
    let tips = doc
        .select(&sel("#study-materials .tips"))
        .next()
        .expect("tips block");
    let text: String = tips.text().collect();
    assert!(text.contains("No study materials found for \"photosynthesis\""));
    assert_eq!(doc.select(&sel("#study-materials .tips li")).count(), 3);
}

#[test]
fn cheat_sheets_carry_site_markers() {
    let doc = Html::parse_document(&full_page().render(Theme::Dark));
    let labels: Vec<String> = doc
        .select(&sel("#cheat-sheets a"))
        .map(|a| a.text().collect())
        .collect();
    assert_eq!(labels, vec!["⭐ Bio sheet", "💻 Notes"]);
}

#[test]
fn empty_cheat_sheets_list_recommended_sites() {
    let mut page = HtmlPage::new("StudyScope");
    page.begin("rust", &[SourceKind::CheatSheets]);
    page.render_results(SourceKind::CheatSheets, &SourcePayload::CheatSheets(vec![]));
    let doc = Html::parse_document(&page.render(Theme::Light));
    assert_eq!(doc.select(&sel("#cheat-sheets .sites li")).count(), 5);
}

#[test]
fn videos_link_to_watch_pages() {
    let mut page = HtmlPage::new("StudyScope");
    page.begin("q", &[SourceKind::Videos]);
    page.render_results(
        SourceKind::Videos,
        &SourcePayload::Videos(vec![VideoResult {
            title: "Intro".into(),
            description: "No description available".into(),
            video_id: "abc123".into(),
        }]),
    );
    let doc = Html::parse_document(&page.render(Theme::Light));
    let link = doc.select(&sel("#videos ol a")).next().expect("video link");
    assert_eq!(
        link.value().attr("href"),
        Some("https://www.youtube.com/watch?v=abc123")
    );
}

#[test]
fn answer_links_cannot_run_script() {
    let mut page = HtmlPage::new("StudyScope");
    page.begin("q", &[SourceKind::AiAnswer]);
    page.render_results(
        SourceKind::AiAnswer,
        &SourcePayload::AiAnswer(AiAnswer {
            model: "gemini-2.5-flash".into(),
            text: "See [notes](javascript:alert(document.cookie)) for more.\n\n\
                   ![chart](data:image/svg+xml;base64,PHN2Zz4=)\n\n\
                   Background: [Khan](https://www.khanacademy.org/science)"
                .into(),
        }),
    );
    let rendered = page.render(Theme::Dark);
    assert!(!rendered.contains("href=\"javascript:"), "{rendered}");

    let doc = Html::parse_document(&rendered);
    let hrefs: Vec<&str> = doc
        .select(&sel("#ai-answer .answer a"))
        .filter_map(|a| a.value().attr("href"))
        .collect();
    assert_eq!(hrefs, vec!["#", "https://www.khanacademy.org/science"]);
    for img in doc.select(&sel("#ai-answer img")) {
        assert_eq!(img.value().attr("src"), Some("#"));
    }
}

#[test]
fn result_links_with_script_urls_are_neutralised() {
    let mut page = HtmlPage::new("StudyScope");
    page.begin("q", &[SourceKind::Articles]);
    page.render_results(
        SourceKind::Articles,
        &SourcePayload::Articles(vec![web("Odd result", "javascript:alert(1)")]),
    );
    let doc = Html::parse_document(&page.render(Theme::Light));
    let link = doc.select(&sel("#articles a")).next().expect("article link");
    assert_eq!(link.value().attr("href"), Some("#"));
}
