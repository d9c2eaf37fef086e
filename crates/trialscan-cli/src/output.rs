use std::io::Write;

use owo_colors::OwoColorize;
use serde::Serialize;

use trialscan_ingest::{ScanInput, ScanResult};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// JSON report shape for `--json`.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    input_kind: &'static str,
    source: Option<String>,
    trial_ids: Vec<&'a str>,
}

fn sorted_ids(result: &ScanResult) -> Vec<&str> {
    let mut ids: Vec<&str> = result.trial_ids.iter().map(String::as_str).collect();
    ids.sort_unstable();
    ids
}

/// Write the scan report as pretty-printed JSON.
pub fn print_json(
    w: &mut dyn Write,
    input: &ScanInput,
    result: &ScanResult,
) -> anyhow::Result<()> {
    let report = JsonReport {
        input_kind: match input {
            ScanInput::PdfPath(_) => "pdf",
            ScanInput::RawText(_) => "text",
        },
        source: match input {
            ScanInput::PdfPath(path) => Some(path.display().to_string()),
            ScanInput::RawText(_) => None,
        },
        trial_ids: sorted_ids(result),
    };
    serde_json::to_writer_pretty(&mut *w, &report)?;
    writeln!(w)?;
    Ok(())
}

/// Write the human-readable scan report.
pub fn print_report(
    w: &mut dyn Write,
    input: &ScanInput,
    result: &ScanResult,
    color: ColorMode,
) -> std::io::Result<()> {
    match input {
        ScanInput::PdfPath(path) => writeln!(w, "Scanned {}", path.display())?,
        ScanInput::RawText(_) => writeln!(w, "Scanned input text")?,
    }

    let ids = sorted_ids(result);
    if ids.is_empty() {
        let msg = "No trial identifiers found.";
        if color.enabled() {
            writeln!(w, "{}", msg.dimmed())?;
        } else {
            writeln!(w, "{}", msg)?;
        }
        return Ok(());
    }

    let header = format!("Found {} trial identifier(s):", ids.len());
    if color.enabled() {
        writeln!(w, "{}", header.green())?;
    } else {
        writeln!(w, "{}", header)?;
    }
    for id in ids {
        match trialscan_registry::registry_of(id) {
            Some(registry) if color.enabled() => {
                writeln!(w, "  {}  {}", id, format!("({})", registry).dimmed())?
            }
            Some(registry) => writeln!(w, "  {}  ({})", id, registry)?,
            None => writeln!(w, "  {}", id)?,
        }
    }
    Ok(())
}
