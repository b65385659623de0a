//! Source document loading and marker-based fragment extraction.
//!
//! The source is a single trusted, single-author HTML file, so fragments are
//! located by fixed marker substrings instead of a parse tree. Each marker is
//! expected to occur once, in document order. The lightbox is the exception:
//! its closing `</div>` is found by tracking nesting depth, since the modal
//! may contain nested `<div>` elements.

use std::fs;
use std::io;
use std::path::Path;

/// Comment marker opening the navbar fragment. The page shell emits the same
/// comment, so re-assembly must not capture it twice.
pub(crate) const NAVBAR_MARKER: &str = "<!-- Navbar -->";

const STYLE_OPEN: &str = "<style>";
const STYLE_CLOSE: &str = "</style>";
const NAVBAR_CLOSE: &str = "</nav>";
const FOOTER_OPEN: &str = "<!-- Footer -->";
const FOOTER_CLOSE: &str = "</footer>";
const LIGHTBOX_OPEN: &str = "<!-- Lightbox Modal -->";
const LIGHTBOX_DIV: &str = "<div id=\"lightbox\"";
const STAGE_OPEN: &str = "<div class=\"stage\">";
const MAIN_OPEN: &str = "<main id=\"site\"";
const HERO_OPEN: &str = "<section class=\"hero-section\"";
const SECTION_CLOSE: &str = "</section>";
const BODY_CLOSE: &str = "</body>";
const HTML_CLOSE: &str = "</html>";
const DIV_OPEN_TOKEN: &str = "<div";
const DIV_CLOSE_TOKEN: &str = "</div>";

/// Error returned when a required marker is absent from the source.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("marker not found: `{marker}`")]
    MarkerNotFound { marker: &'static str },
}

/// Markup shared verbatim across all generated pages, extracted once per run.
#[derive(Debug, Clone)]
pub struct Fragments {
    /// Full `<style>` block, tags included.
    pub styles: String,
    /// Navbar markup from its comment marker through `</nav>`.
    pub navbar: String,
    /// Footer markup from its comment marker through `</footer>`.
    pub footer: String,
    /// Lightbox modal from its comment marker through the balancing `</div>`.
    pub lightbox: String,
    /// Boot-animation stage interior: everything between the stage opening
    /// tag and the start of `<main id="site"`.
    pub stage: String,
    /// Hero section. Extracted but not embedded in section pages.
    pub hero: String,
    /// Trailing script block: everything between `</body>` and `</html>`.
    pub scripts: String,
}

/// The full source text plus marker-search helpers; immutable input.
pub struct SourceDocument {
    text: String,
}

impl SourceDocument {
    #[must_use]
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// Read the source document from disk.
    pub fn read(path: &Path) -> io::Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Extract every shared fragment.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MarkerNotFound`] naming the first absent
    /// marker. Shared fragments are required; only *section* markers are
    /// allowed to be missing.
    pub fn shared_fragments(&self) -> Result<Fragments, ExtractError> {
        Ok(Fragments {
            styles: self.enclosed(STYLE_OPEN, STYLE_CLOSE)?.to_owned(),
            navbar: self.enclosed(NAVBAR_MARKER, NAVBAR_CLOSE)?.to_owned(),
            footer: self.enclosed(FOOTER_OPEN, FOOTER_CLOSE)?.to_owned(),
            lightbox: self.lightbox()?.to_owned(),
            stage: self.stage_interior()?.to_owned(),
            hero: self.enclosed(HERO_OPEN, SECTION_CLOSE)?.to_owned(),
            scripts: self.trailing_scripts()?.to_owned(),
        })
    }

    /// Content block for one section id, opening tag through `</section>`.
    ///
    /// Returns `None` when the opening marker is absent; the caller decides
    /// whether that is worth a warning.
    #[must_use]
    pub fn content_section(&self, id: &str) -> Option<String> {
        let open = format!("<section class=\"content-section\" id=\"{id}\">");
        let start = self.text.find(&open)?;
        let end = self.text[start..]
            .find(SECTION_CLOSE)
            .map(|i| start + i + SECTION_CLOSE.len())?;
        Some(self.text[start..end].to_owned())
    }

    /// First occurrence of `marker`, or a structured error.
    fn require(&self, marker: &'static str) -> Result<usize, ExtractError> {
        self.text
            .find(marker)
            .ok_or(ExtractError::MarkerNotFound { marker })
    }

    /// End (exclusive) of the first `close` at or after `from`.
    fn close_after(&self, from: usize, close: &'static str) -> Result<usize, ExtractError> {
        self.text[from..]
            .find(close)
            .map(|i| from + i + close.len())
            .ok_or(ExtractError::MarkerNotFound { marker: close })
    }

    /// Fragment spanning `open` through the end of the first `close` after
    /// it, inclusive of both markers' full text.
    fn enclosed(&self, open: &'static str, close: &'static str) -> Result<&str, ExtractError> {
        let start = self.require(open)?;
        let end = self.close_after(start, close)?;
        Ok(&self.text[start..end])
    }

    /// Stage interior: after the stage opening tag, up to `<main id="site"`.
    fn stage_interior(&self) -> Result<&str, ExtractError> {
        let open = self.require(STAGE_OPEN)?;
        let start = open + STAGE_OPEN.len();
        let end = self.text[start..]
            .find(MAIN_OPEN)
            .map(|i| start + i)
            .ok_or(ExtractError::MarkerNotFound { marker: MAIN_OPEN })?;
        Ok(&self.text[start..end])
    }

    /// Lightbox fragment: comment marker through the `</div>` balancing the
    /// modal's opening tag.
    fn lightbox(&self) -> Result<&str, ExtractError> {
        let start = self.require(LIGHTBOX_OPEN)?;
        let div = self.text[start..]
            .find(LIGHTBOX_DIV)
            .map(|i| start + i)
            .ok_or(ExtractError::MarkerNotFound {
                marker: LIGHTBOX_DIV,
            })?;
        let end = balanced_div_end(&self.text, div).ok_or(ExtractError::MarkerNotFound {
            marker: DIV_CLOSE_TOKEN,
        })?;
        Ok(&self.text[start..end])
    }

    /// Trailing scripts: after `</body>`, up to `</html>`.
    ///
    /// The source keeps its script tags between those two markers; the page
    /// shell re-emits them inside its own body.
    fn trailing_scripts(&self) -> Result<&str, ExtractError> {
        let body = self.require(BODY_CLOSE)?;
        let start = body + BODY_CLOSE.len();
        let end = self.text[start..]
            .find(HTML_CLOSE)
            .map(|i| start + i)
            .ok_or(ExtractError::MarkerNotFound { marker: HTML_CLOSE })?;
        Ok(&self.text[start..end])
    }
}

/// End (exclusive) of the `</div>` balancing the `<div` opening at `from`.
///
/// Scans `<div` / `</div>` tokens and tracks depth, so nested divs inside
/// the fragment do not terminate it early. Returns `None` if the divs never
/// balance. `from` must point at a `<div` token.
fn balanced_div_end(text: &str, from: usize) -> Option<usize> {
    debug_assert!(text[from..].starts_with(DIV_OPEN_TOKEN));
    let mut depth = 0usize;
    let mut pos = from;
    loop {
        let next_open = text[pos..].find(DIV_OPEN_TOKEN).map(|i| pos + i);
        let next_close = text[pos..].find(DIV_CLOSE_TOKEN).map(|i| pos + i);
        match (next_open, next_close) {
            (Some(open), Some(close)) if open < close => {
                depth += 1;
                pos = open + DIV_OPEN_TOKEN.len();
            }
            (_, Some(close)) => {
                depth -= 1;
                pos = close + DIV_CLOSE_TOKEN.len();
                if depth == 0 {
                    return Some(pos);
                }
            }
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Portfolio</title>
  <style>
    body { color: black; }
  </style>
</head>
<body>
  <!-- Navbar -->
  <nav id="navbar">
    <a href="#about"><img src="media/logo.png" /></a>
    <a href="/music">Music</a>
  </nav>

  <div class="stage">
    <div class="rail-wrap"><div class="rail"></div></div>
    <main id="site" class="site" aria-hidden="true">
      <div class="content">
        <section class="hero-section" id="about"><h1>Hero</h1></section>
        <section class="content-section" id="writing"><p>Words</p></section>
      </div>
      <!-- Footer -->
      <footer><img src="media/footer.png" /></footer>
    </main>
  </div>

  <!-- Lightbox Modal -->
  <div id="lightbox" class="lightbox">
    <div class="lightbox-inner"><img src="media/a.png" /></div>
  </div>
</body>
<script src="media/site.js"></script>
</html>
"##;

    fn sample() -> SourceDocument {
        SourceDocument::new(SAMPLE.to_owned())
    }

    #[test]
    fn styles_include_both_tags() {
        let fragments = sample().shared_fragments().unwrap();
        assert!(fragments.styles.starts_with("<style>"));
        assert!(fragments.styles.ends_with("</style>"));
    }

    #[test]
    fn navbar_spans_marker_to_nav_close() {
        let fragments = sample().shared_fragments().unwrap();
        assert!(fragments.navbar.starts_with("<!-- Navbar -->"));
        assert!(fragments.navbar.ends_with("</nav>"));
    }

    #[test]
    fn footer_ends_with_full_closing_tag() {
        let fragments = sample().shared_fragments().unwrap();
        assert!(fragments.footer.starts_with("<!-- Footer -->"));
        assert!(fragments.footer.ends_with("</footer>"));
    }

    #[test]
    fn lightbox_spans_nested_divs() {
        let fragments = sample().shared_fragments().unwrap();
        assert!(fragments.lightbox.starts_with("<!-- Lightbox Modal -->"));
        assert!(fragments.lightbox.contains("lightbox-inner"));
        // Inner div plus the balancing outer close.
        assert_eq!(fragments.lightbox.matches("</div>").count(), 2);
        assert!(fragments.lightbox.ends_with("</div>"));
    }

    #[test]
    fn stage_is_interior_only() {
        let fragments = sample().shared_fragments().unwrap();
        assert!(!fragments.stage.contains("<div class=\"stage\">"));
        assert!(fragments.stage.contains("rail-wrap"));
        assert!(!fragments.stage.contains("<main"));
    }

    #[test]
    fn hero_is_extracted() {
        let fragments = sample().shared_fragments().unwrap();
        assert!(fragments.hero.starts_with("<section class=\"hero-section\""));
        assert!(fragments.hero.ends_with("</section>"));
        assert!(fragments.hero.contains("Hero"));
    }

    #[test]
    fn scripts_exclude_body_close() {
        let fragments = sample().shared_fragments().unwrap();
        assert!(fragments.scripts.contains("site.js"));
        assert!(!fragments.scripts.contains("</body>"));
        assert!(!fragments.scripts.contains("</html>"));
    }

    #[test]
    fn content_section_is_inclusive() {
        let document = sample();
        let block = document.content_section("writing").unwrap();
        assert!(block.starts_with("<section class=\"content-section\" id=\"writing\">"));
        assert!(block.ends_with("</section>"));
        assert!(block.contains("Words"));
    }

    #[test]
    fn content_section_missing_is_none() {
        assert!(sample().content_section("robotics").is_none());
    }

    #[test]
    fn missing_shared_marker_is_an_error() {
        let text = SAMPLE.replace("<!-- Navbar -->", "");
        let err = SourceDocument::new(text).shared_fragments().unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MarkerNotFound { marker } if marker == NAVBAR_MARKER
        ));
    }

    #[test]
    fn balanced_div_end_without_nesting() {
        let text = "<div id=\"x\">plain</div> tail";
        let end = balanced_div_end(text, 0).unwrap();
        assert_eq!(&text[..end], "<div id=\"x\">plain</div>");
    }

    #[test]
    fn balanced_div_end_unbalanced_is_none() {
        assert!(balanced_div_end("<div><div></div>", 0).is_none());
    }
}
