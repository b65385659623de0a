//! Carve CLI - portfolio section page generator.
//!
//! Slices the portfolio's monolithic `index.html` into standalone
//! per-section pages with asset and navigation paths corrected for the
//! extra directory level. Invoked bare it reads `index.html` from the
//! working directory and writes `<section-id>/index.html` next to it.

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use carve_site::{GenerateError, GeneratorConfig, SectionPageGenerator};
use output::Output;

/// Carve - portfolio section page generator.
#[derive(Parser)]
#[command(name = "carve", version, about)]
struct Cli {
    /// Source document to slice.
    #[arg(short, long, default_value = "index.html")]
    source: PathBuf,

    /// Directory receiving the per-section subdirectories.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Site name used in every generated page title.
    #[arg(long, default_value = "Stella Xulin")]
    site_name: String,

    /// Enable info-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, output: &Output) -> Result<(), GenerateError> {
    let generator = SectionPageGenerator::new(GeneratorConfig {
        source: cli.source,
        output_dir: cli.output_dir,
        site_name: cli.site_name,
    });

    let summary = generator.generate()?;

    for id in &summary.skipped {
        output.warning(&format!("Warning: Section {id} not found, skipping..."));
    }
    for page in &summary.written {
        output.info(&format!("Created {}", page.path.display()));
    }
    output.success(&format!(
        "Generated {} section page{}",
        summary.written.len(),
        if summary.written.len() == 1 { "" } else { "s" }
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_defaults_match_bare_invocation() {
        let cli = Cli::parse_from(["carve"]);
        assert_eq!(cli.source, PathBuf::from("index.html"));
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.site_name, "Stella Xulin");
        assert!(!cli.verbose);
    }
}
