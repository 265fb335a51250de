mod manifest;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kmlgen::{validate_styles, Document, Render, RenderOptions};
use manifest::Manifest;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "kmlgen",
    about = "Render KML documents from JSON layer manifests",
    version,
    author
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a manifest to KML
    Build {
        /// Input manifest (JSON)
        input: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Escape XML special characters in names, descriptions and URLs
        #[arg(short, long)]
        escape: bool,

        /// Refuse to render if style references do not resolve
        #[arg(short, long)]
        check: bool,
    },

    /// Check that every style reference in a manifest resolves
    Check {
        /// Input manifest (JSON)
        input: PathBuf,
    },

    /// Generate a demo KML document
    Demo {
        /// Output file path
        #[arg(short, long, default_value = "demo.kml")]
        output: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "kmlgen=debug" } else { "kmlgen=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_document(input: &Path) -> Result<Document> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read manifest {}", input.display()))?;
    let manifest = Manifest::from_json(&json)
        .with_context(|| format!("Invalid manifest {}", input.display()))?;
    let document = manifest
        .into_document()
        .with_context(|| format!("Invalid data in manifest {}", input.display()))?;

    tracing::debug!(folders = document.folder_count(), "loaded manifest");
    Ok(document)
}

fn write_output(kml: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, kml)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = kml.len(), "wrote KML");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(kml.as_bytes())
                .context("Failed to write to stdout")?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            input,
            output,
            escape,
            check,
        } => {
            let document = load_document(&input)?;
            if check {
                validate_styles(&document)?;
            }

            let options = if escape {
                RenderOptions::escaped()
            } else {
                RenderOptions::default()
            };
            let kml = document.render_with(&options);
            write_output(&kml, output.as_deref())?;
        }

        Commands::Check { input } => {
            let document = load_document(&input)?;
            validate_styles(&document)?;
            println!(
                "OK: {} style(s), {} style reference(s)",
                document.style_ids().len(),
                document.style_references().len()
            );
        }

        Commands::Demo { output } => {
            let document = manifest::demo_document()?;
            write_output(&document.render(), Some(&output))?;
            println!("KML created successfully: {}", output.display());
        }
    }

    Ok(())
}
