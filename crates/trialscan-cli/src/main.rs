use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use trialscan_core::LayoutConfig;
use trialscan_ingest::ScanInput;

mod output;

use output::ColorMode;

/// Trial Registry Scanner - extract clinical-trial identifiers from two-column academic PDFs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a PDF (or literal text) for trial registry identifiers
    Scan {
        /// Path to a PDF file, or literal text to scan
        input: String,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Path to output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Reconstruct and print the reading-order text of a PDF
    Text {
        /// Path to the PDF file
        pdf_path: PathBuf,

        /// Path to output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Layout threshold overrides shared by both subcommands.
#[derive(Args, Debug)]
struct LayoutArgs {
    /// Header/footer margin in page units
    #[arg(long, default_value_t = 25.0)]
    margin: f64,

    /// Digit fraction above which a block is treated as a table
    #[arg(long, default_value_t = 0.3)]
    digit_threshold: f64,

    /// Minimum line count before the table heuristic applies
    #[arg(long, default_value_t = 3)]
    line_threshold: usize,

    /// Fraction of page width that marks a block as full-width
    #[arg(long, default_value_t = 0.8)]
    width_threshold: f64,
}

impl LayoutArgs {
    fn to_config(&self) -> LayoutConfig {
        LayoutConfig::new()
            .with_margin(self.margin)
            .with_digit_threshold(self.digit_threshold)
            .with_line_threshold(self.line_threshold)
            .with_width_threshold(self.width_threshold)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Scan {
            input,
            no_color,
            json,
            output,
            layout,
        } => scan(input, no_color, json, output, &layout.to_config()),
        Command::Text {
            pdf_path,
            output,
            layout,
        } => text(pdf_path, output, &layout.to_config()),
    }
}

fn scan(
    input: String,
    no_color: bool,
    json: bool,
    output: Option<PathBuf>,
    config: &LayoutConfig,
) -> anyhow::Result<()> {
    let use_color = !no_color && !json && output.is_none();
    let color = ColorMode(use_color);

    let mut writer: Box<dyn Write> = match output {
        Some(ref path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    let detected = trialscan_ingest::detect_input(&input);
    let label = match &detected {
        ScanInput::PdfPath(path) => path.display().to_string(),
        ScanInput::RawText(_) => "input text".to_string(),
    };

    let result = trialscan_ingest::scan_input(detected.clone(), config)
        .with_context(|| format!("failed to scan {label}"))?;

    if json {
        output::print_json(&mut writer, &detected, &result)?;
    } else {
        output::print_report(&mut writer, &detected, &result, color)?;
    }
    Ok(())
}

fn text(pdf_path: PathBuf, output: Option<PathBuf>, config: &LayoutConfig) -> anyhow::Result<()> {
    if !pdf_path.exists() {
        anyhow::bail!("File not found: {}", pdf_path.display());
    }

    let mut writer: Box<dyn Write> = match output {
        Some(ref path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    let text = trialscan_ingest::reconstruct(&pdf_path, config)
        .with_context(|| format!("failed to reconstruct {}", pdf_path.display()))?;

    writer.write_all(text.as_bytes())?;
    Ok(())
}
