//! Section page generation pipeline.
//!
//! [`SectionPageGenerator`] runs the whole pass: read the source document,
//! extract the shared fragments once, then for each recognized section
//! rewrite paths, assemble a standalone page and write it to
//! `<section-id>/index.html` under the output directory.

use std::fs;
use std::path::PathBuf;

use crate::document::{ExtractError, SourceDocument};
use crate::rewrite::{rewrite_media_paths, rewrite_navbar};
use crate::sections::SECTIONS;
use crate::template::{PageData, render_page};

/// Generator settings. The defaults reproduce a bare invocation from the
/// site root: read `index.html`, write into the current directory.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Source document path.
    pub source: PathBuf,
    /// Directory receiving one subdirectory per section.
    pub output_dir: PathBuf,
    /// Name prefixed to every generated `<title>`.
    pub site_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("index.html"),
            output_dir: PathBuf::from("."),
            site_name: "Stella Xulin".to_owned(),
        }
    }
}

/// Error returned by the generator.
///
/// I/O covers both the fatal source read and output writes; a missing
/// *shared* fragment marker surfaces as [`ExtractError`]. Missing section
/// markers are not errors (the section is skipped and recorded).
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Extract(#[from] ExtractError),
}

/// One written page.
#[derive(Debug)]
pub struct GeneratedPage {
    /// Section id the page was generated for.
    pub id: &'static str,
    /// Path of the written `index.html`.
    pub path: PathBuf,
}

/// Result of a full generation pass.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Pages written, in section-table order.
    pub written: Vec<GeneratedPage>,
    /// Ids of sections whose opening marker was absent from the source.
    pub skipped: Vec<&'static str>,
}

/// Builds standalone section pages from a monolithic source document.
pub struct SectionPageGenerator {
    config: GeneratorConfig,
}

impl SectionPageGenerator {
    /// Create a generator with the given settings.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline against the configured source file.
    ///
    /// # Errors
    ///
    /// Fails if the source cannot be read, a shared fragment marker is
    /// missing, or an output directory or file cannot be written. Pages
    /// already written stay in place; there is no rollback.
    pub fn generate(&self) -> Result<GenerateSummary, GenerateError> {
        let document = SourceDocument::read(&self.config.source)?;
        self.generate_from(&document)
    }

    /// Run the pipeline against an already-loaded document.
    pub fn generate_from(
        &self,
        document: &SourceDocument,
    ) -> Result<GenerateSummary, GenerateError> {
        let fragments = document.shared_fragments()?;
        let navbar = rewrite_navbar(&fragments.navbar);
        // Every fragment that references media needs the depth adjustment,
        // lightbox and style block included.
        let styles = rewrite_media_paths(&fragments.styles);
        let stage = rewrite_media_paths(&fragments.stage);
        let footer = rewrite_media_paths(&fragments.footer);
        let lightbox = rewrite_media_paths(&fragments.lightbox);
        let scripts = rewrite_media_paths(&fragments.scripts);

        let mut summary = GenerateSummary::default();
        for section in SECTIONS {
            let Some(block) = document.content_section(section.id) else {
                tracing::warn!(id = section.id, "Section marker not found, skipping");
                summary.skipped.push(section.id);
                continue;
            };
            let content = rewrite_media_paths(&block);

            let html = render_page(&PageData {
                site_name: &self.config.site_name,
                title: section.title,
                styles: &styles,
                navbar: &navbar,
                stage: &stage,
                content: &content,
                footer: &footer,
                lightbox: &lightbox,
                scripts: &scripts,
            });

            let dir = self.config.output_dir.join(section.id);
            fs::create_dir_all(&dir)?;
            let path = dir.join("index.html");
            fs::write(&path, html)?;
            tracing::debug!(path = %path.display(), "Wrote section page");
            summary.written.push(GeneratedPage {
                id: section.id,
                path,
            });
        }

        Ok(summary)
    }
}
