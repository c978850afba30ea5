//! URL canonicalisation for result deduplication.
//!
//! Two sub-queries against the same backend often return the same page
//! with cosmetic URL differences. The canonical form makes them compare
//! as equal while the original URL is kept for display. Anything that can
//! select different content (including `ref`, `si` and query order) is
//! left alone.

use url::Url;

/// Click-tracking keys that never select content.
const TRACKING_KEYS: &[&str] = &["fbclid", "gclid"];

fn is_tracking_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key.starts_with("utm_") || TRACKING_KEYS.contains(&key.as_str())
}

/// Canonicalise a URL for deduplication comparison.
///
/// - scheme and host lowercased, default ports dropped (done by the parser)
/// - fragment removed
/// - `utm_*`, `fbclid` and `gclid` removed; other pairs keep their order
/// - trailing slash removed unless the path is exactly `/`
///
/// Input that does not parse as a URL is its own key and is returned
/// unchanged, so opaque identifiers still deduplicate by exact match.
///
/// # Examples
///
/// ```
/// use studyscope_search::orchestrator::url_normalize::canonical_url;
///
/// let a = canonical_url("https://Example.COM/notes/?page=2&utm_source=feed#top");
/// let b = canonical_url("https://example.com/notes?page=2");
/// assert_eq!(a, b);
/// ```
pub fn canonical_url(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    parsed.set_fragment(None);

    if parsed.query_pairs().any(|(key, _)| is_tracking_key(&key)) {
        let kept: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(key, _)| !is_tracking_key(key))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        parsed.set_query(None);
        if !kept.is_empty() {
            parsed.query_pairs_mut().extend_pairs(kept);
        }
    }

    let path = parsed.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        parsed.set_path(&path[..path.len() - 1]);
    }

    parsed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_case_and_trailing_slash_collapse() {
        assert_eq!(
            canonical_url("https://Cheatography.COM/davechild/"),
            "https://cheatography.com/davechild"
        );
    }

    #[test]
    fn site_root_keeps_its_slash() {
        assert_eq!(canonical_url("https://overapi.com/"), "https://overapi.com/");
    }

    #[test]
    fn fragment_is_not_part_of_identity() {
        assert_eq!(
            canonical_url("https://www.geeksforgeeks.org/git-cheat-sheet/#basics"),
            canonical_url("https://www.geeksforgeeks.org/git-cheat-sheet")
        );
    }

    #[test]
    fn campaign_and_click_ids_are_dropped() {
        assert_eq!(
            canonical_url("https://example.edu/notes.pdf?utm_campaign=spring&UTM_Medium=mail&gclid=1&fbclid=2"),
            "https://example.edu/notes.pdf"
        );
    }

    #[test]
    fn content_params_survive_next_to_tracking() {
        assert_eq!(
            canonical_url("https://example.edu/view?doc=7&utm_source=feed&lang=en"),
            "https://example.edu/view?doc=7&lang=en"
        );
    }

    #[test]
    fn branch_refs_stay_distinct() {
        let master = canonical_url("https://github.com/org/repo/blob/README.md?ref=master");
        let beta = canonical_url("https://github.com/org/repo/blob/README.md?ref=beta");
        assert_ne!(master, beta);
        assert!(master.ends_with("?ref=master"));
    }

    #[test]
    fn share_and_feature_params_are_kept() {
        let url = "https://www.youtube.com/watch?v=abc&si=xyz&feature=share";
        assert_eq!(canonical_url(url), url);
    }

    #[test]
    fn query_order_is_left_alone() {
        let url = "https://example.edu/search?z=1&a=2";
        assert_eq!(canonical_url(url), url);
    }

    #[test]
    fn explicit_default_port_matches_implicit() {
        assert_eq!(
            canonical_url("https://overapi.com:443/git"),
            canonical_url("https://overapi.com/git")
        );
    }

    #[test]
    fn unparseable_input_is_its_own_key() {
        assert_eq!(canonical_url("not a url at all"), "not a url at all");
        assert_eq!(canonical_url(""), "");
        assert_ne!(canonical_url("a"), canonical_url("b"));
    }
}
