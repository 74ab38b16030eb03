//! mdsite CLI - static site generation.
//!
//! Copies static assets into the output directory, then converts every
//! markdown file under the content directory into an HTML page using a
//! shared template.

mod assets;
mod error;
mod page;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use error::PageError;
use page::PageTemplate;

/// Generate an HTML site from markdown content.
#[derive(Parser)]
#[command(name = "mdsite", version, about)]
struct Cli {
    /// Directory containing markdown content
    #[arg(long, default_value = "content")]
    content: PathBuf,

    /// HTML template with {{Title}} and {{Content}} placeholders
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Directory of static assets copied into the output
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "public")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<(), PageError> {
    if cli.static_dir.is_dir() {
        tracing::info!(dir = %cli.static_dir.display(), "copying static assets");
        assets::copy_dir_contents(&cli.static_dir, &cli.output)?;
    }

    let template = PageTemplate::load(&cli.template)?;
    page::generate_pages(&cli.content, &template, &cli.output)
}
