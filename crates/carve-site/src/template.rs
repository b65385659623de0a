//! HTML page shell for generated section pages.
//!
//! Mirrors the monolithic source's DOM structure (navbar, boot-animation
//! stage, `<main id="site">`, lightbox, trailing scripts) so a generated
//! page renders exactly like the matching section of the original, minus the
//! boot animation.

use std::fmt::Write;

use crate::document::NAVBAR_MARKER;

/// All data needed to render one section page. Fragment fields are expected
/// to be already rewritten for the page's directory depth.
pub struct PageData<'a> {
    pub site_name: &'a str,
    pub title: &'a str,
    pub styles: &'a str,
    pub navbar: &'a str,
    pub stage: &'a str,
    pub content: &'a str,
    pub footer: &'a str,
    pub lightbox: &'a str,
    pub scripts: &'a str,
}

/// Inline script that skips the boot animation on section pages.
///
/// Runs synchronously at parse time: hides the rail wrapper and flips the
/// stage and main content straight into their post-animation state, so the
/// page never waits on an animation trigger.
const BOOT_SKIP_SCRIPT: &str = r"  <script>
    // Skip boot animation for section pages - show content immediately
    (function () {
      const site = document.getElementById('site');
      const navbar = document.getElementById('navbar');
      const stage = document.querySelector('.stage');
      const railWrap = document.querySelector('.rail-wrap');

      if (railWrap) {
        railWrap.style.display = 'none';
      }

      stage.classList.add('site-mode');
      site.classList.add('show');
      site.removeAttribute('aria-hidden');

      if (navbar) {
        navbar.classList.add('show');
      }
    })();
  </script>";

/// Render a complete standalone section page.
#[must_use]
pub fn render_page(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(
        8192 + page.styles.len() + page.stage.len() + page.content.len() + page.scripts.len(),
    );

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\" />\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    let _ = writeln!(
        html,
        "  <title>{} — {}</title>",
        escape(page.site_name),
        escape(page.title)
    );
    html.push_str("  <link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n");
    html.push_str("  <link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>\n");
    html.push_str(
        "  <link href=\"https://fonts.googleapis.com/css2?family=Merriweather:ital,wght@0,300;0,400;0,700;0,900;1,300;1,400;1,700;1,900&display=swap\" rel=\"stylesheet\">\n",
    );
    html.push_str(page.styles);
    html.push_str("\n</head>\n<body>\n");

    let _ = writeln!(html, "  {NAVBAR_MARKER}");
    html.push_str(page.navbar);
    html.push_str("\n\n  <div class=\"stage\">");
    html.push_str(page.stage);
    html.push_str("    <main id=\"site\" class=\"site\" aria-hidden=\"true\">\n");
    html.push_str("      <div class=\"content\">\n");
    html.push_str(page.content);
    html.push_str("\n      </div>\n\n");
    html.push_str(page.footer);
    html.push_str("\n    </main>\n  </div>\n\n");
    html.push_str(page.lightbox);
    html.push('\n');
    html.push_str(page.scripts);
    html.push('\n');
    html.push_str(BOOT_SKIP_SCRIPT);
    html.push_str("\n</body>\n</html>\n");
    html
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
