//! Fragment extraction and page generation for the carve portfolio slicer.
//!
//! Slices a monolithic portfolio `index.html` into standalone per-section
//! pages: shared fragments (styles, navbar, footer, lightbox, boot stage,
//! trailing scripts) are located by fixed marker substrings, each section is
//! spliced into the shared page shell with asset and navigation paths
//! rewritten for the extra directory level, and the result is written to
//! `<section-id>/index.html`.
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use carve_site::{GeneratorConfig, SectionPageGenerator};
//!
//! let generator = SectionPageGenerator::new(GeneratorConfig::default());
//! let summary = generator.generate()?;
//!
//! for page in &summary.written {
//!     println!("Created {}", page.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub(crate) mod document;
pub(crate) mod generator;
pub(crate) mod rewrite;
pub(crate) mod sections;
pub(crate) mod template;

pub use document::{ExtractError, Fragments, SourceDocument};
pub use generator::{
    GenerateError, GenerateSummary, GeneratedPage, GeneratorConfig, SectionPageGenerator,
};
pub use rewrite::{rewrite_media_paths, rewrite_navbar};
pub use sections::{SECTIONS, Section};
pub use template::{PageData, render_page};
