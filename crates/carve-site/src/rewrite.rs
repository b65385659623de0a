//! Relative path rewriting for pages one directory level below the source.
//!
//! Generated pages live in `<section-id>/`, so every `media/` asset
//! reference and every absolute navigation target gains a `../` prefix.
//! Rewrites are plain literal replacement, matching how the paths appear in
//! the source; all passes are idempotent.

use crate::document::NAVBAR_MARKER;

/// Asset path prefixes rewritten for the extra directory level.
///
/// The third pattern is subsumed by the second once it has run, but both
/// attribute shapes occur in the source and are kept explicit.
const MEDIA_REWRITES: &[(&str, &str)] = &[
    ("src=\"media/", "src=\"../media/"),
    ("url('media/", "url('../media/"),
    (
        "style=\"background-image:url('media/",
        "style=\"background-image:url('../media/",
    ),
];

/// Navbar targets served as sibling directories of the section pages.
const NAV_TARGETS: &[&str] = &["music", "research", "education", "cheerleading", "art-podcast"];

/// Rewrite `media/` asset references to `../media/`.
#[must_use]
pub fn rewrite_media_paths(html: &str) -> String {
    let mut out = html.to_owned();
    for (from, to) in MEDIA_REWRITES {
        out = out.replace(from, to);
    }
    out
}

/// Rewrite the navbar fragment for a section page.
///
/// Asset paths move one level up, absolute navigation targets become
/// sibling-relative, and the `#about` in-page anchor turns into a link back
/// to the top-level page. A captured leading navbar comment is dropped once:
/// the page shell emits its own.
#[must_use]
pub fn rewrite_navbar(navbar: &str) -> String {
    let mut out =
        rewrite_media_paths(navbar).replace("href=\"#about\"", "href=\"../index.html\"");
    for target in NAV_TARGETS {
        out = out.replace(
            &format!("href=\"/{target}\""),
            &format!("href=\"../{target}\""),
        );
    }
    if let Some(stripped) = out.strip_prefix(NAVBAR_MARKER) {
        return stripped.to_owned();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_src_gains_parent_prefix() {
        let html = "<img src=\"media/pic.jpg\" alt=\"\">";
        assert_eq!(
            rewrite_media_paths(html),
            "<img src=\"../media/pic.jpg\" alt=\"\">"
        );
    }

    #[test]
    fn media_css_url_gains_parent_prefix() {
        let html = "<div style=\"background-image:url('media/bg.jpg')\"></div>";
        assert_eq!(
            rewrite_media_paths(html),
            "<div style=\"background-image:url('../media/bg.jpg')\"></div>"
        );
    }

    #[test]
    fn media_rewrite_is_idempotent() {
        let html = "<img src=\"media/pic.jpg\"> <div style=\"background-image:url('media/bg.jpg')\">";
        let once = rewrite_media_paths(html);
        assert_eq!(rewrite_media_paths(&once), once);
    }

    #[test]
    fn media_rewrite_leaves_other_paths_alone() {
        let html = "<img src=\"https://example.com/media/pic.jpg\">";
        assert_eq!(rewrite_media_paths(html), html);
    }

    #[test]
    fn navbar_anchor_becomes_index_link() {
        let out = rewrite_navbar("<nav><a href=\"#about\">About</a></nav>");
        assert!(out.contains("href=\"../index.html\""));
        assert!(!out.contains("href=\"#about\""));
    }

    #[test]
    fn navbar_absolute_targets_become_relative() {
        let navbar = "<nav>\
            <a href=\"/music\">M</a>\
            <a href=\"/research\">R</a>\
            <a href=\"/education\">E</a>\
            <a href=\"/cheerleading\">C</a>\
            <a href=\"/art-podcast\">A</a>\
            </nav>";
        let out = rewrite_navbar(navbar);
        for target in NAV_TARGETS {
            assert!(out.contains(&format!("href=\"../{target}\"")), "{target}");
            assert!(!out.contains(&format!("href=\"/{target}\"")), "{target}");
        }
    }

    #[test]
    fn navbar_leading_marker_is_stripped_once() {
        let out = rewrite_navbar("<!-- Navbar -->\n<nav></nav>");
        assert!(!out.contains("<!-- Navbar -->"));
        assert!(out.starts_with('\n'));
    }

    #[test]
    fn navbar_without_marker_is_untouched() {
        let out = rewrite_navbar("<nav><a href=\"/music\">M</a></nav>");
        assert!(out.starts_with("<nav>"));
    }

    #[test]
    fn navbar_media_paths_are_rewritten() {
        let out = rewrite_navbar("<nav><img src=\"media/logo.png\"></nav>");
        assert!(out.contains("src=\"../media/logo.png\""));
    }
}
