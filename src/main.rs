//! pdfbatch - Split a directory tree of PDFs into numbered batch manifests.
//!
//! Usage:
//!   pdfbatch --src DIR --batch_size N --output_dir DIR
//!   pdfbatch --src DIR --batch_size N --output_dir DIR --json
//!   pdfbatch --help
//!
//! Stdout is consumed by calling scripts; logs and errors go to stderr.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use pdfbatch_core::{BatchConfig, DEFAULT_EXTENSION};
use pdfbatch_ops::{BatchReport, Batcher};

#[derive(Parser, Debug)]
#[command(
    name = "pdfbatch",
    version,
    about = "Create batch files for PDF processing",
    long_about = "pdfbatch walks a source tree, collects every PDF it finds, and writes \
                  their paths into batch_1.txt, batch_2.txt, ... with at most \
                  --batch_size paths per file."
)]
struct Cli {
    /// Source directory containing PDF files
    #[arg(long = "src", value_name = "PATH")]
    src: PathBuf,

    /// Number of PDFs per batch
    #[arg(long = "batch_size", value_name = "N")]
    batch_size: usize,

    /// Directory to save batch files (created if missing)
    #[arg(long = "output_dir", value_name = "PATH")]
    output_dir: PathBuf,

    /// File extension to collect, case-insensitive (repeatable)
    #[arg(short, long = "extension", value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    extensions: Vec<String>,

    /// Sort entries by name within each directory
    #[arg(long)]
    sort: bool,

    /// Follow symbolic links to directories
    #[arg(long)]
    follow_symlinks: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    skip_hidden: bool,

    /// Print the run report as JSON instead of the line format
    #[arg(long)]
    json: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn to_config(&self) -> Result<BatchConfig> {
        let config = BatchConfig::builder()
            .source(self.src.clone())
            .batch_size(self.batch_size)
            .output_dir(self.output_dir.clone())
            .extensions(self.extensions.clone())
            .sort(self.sort)
            .follow_symlinks(self.follow_symlinks)
            .include_hidden(!self.skip_hidden)
            .build()
            .map_err(pdfbatch_core::BatchError::from)?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.to_config()?;
    tracing::debug!(?config, "starting run");

    std::fs::create_dir_all(&config.output_dir).wrap_err_with(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let report = Batcher::new()
        .run(&config)
        .wrap_err_with(|| format!("Failed to batch {}", config.source.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Render the line-oriented stdout contract for a finished run.
fn render_text(report: &BatchReport) -> String {
    let mut lines = Vec::with_capacity(report.manifests.len() * 2 + 2);

    if report.is_empty() {
        lines.push(format!("No PDF files found in {}.", report.source.display()));
    }
    lines.extend(report.manifests.iter().map(|manifest| {
        format!(
            "Created batch file: {} with {} PDFs.",
            manifest.path.display(),
            manifest.count
        )
    }));
    lines.extend(
        report
            .manifest_paths()
            .map(|path| format!("BATCH_FILE_PATH:{}", path.display())),
    );
    lines.push(format!("TOTAL_PDFS_COUNT:{}", report.total_files));

    lines.into_iter().map(|line| line + "\n").collect()
}
