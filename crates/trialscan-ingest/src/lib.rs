use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

// Re-export for convenience
pub use trialscan_core::{BackendError, LayoutConfig, PdfBackend};
pub use trialscan_layout::LayoutError;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("layout reconstruction error: {0}")]
    Layout(#[from] LayoutError),
    #[cfg(not(feature = "pdf"))]
    #[error("PDF support not compiled in (enable the `pdf` feature of trialscan-ingest)")]
    NoPdfSupport,
}

/// How a raw input string was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanInput {
    /// An existing file with a `.pdf` extension; full layout reconstruction
    /// runs against it.
    PdfPath(PathBuf),
    /// Anything else is scanned verbatim as already-extracted text.
    RawText(String),
}

/// Decide whether `input` names a PDF on disk or is literal text.
///
/// Fails open: a string that is not an existing `.pdf` path (including a
/// dangling path or anything ambiguous) is treated as text.
pub fn detect_input(input: &str) -> ScanInput {
    let path = Path::new(input);
    let has_pdf_ext = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if has_pdf_ext && path.is_file() {
        ScanInput::PdfPath(path.to_path_buf())
    } else {
        ScanInput::RawText(input.to_string())
    }
}

/// Result of a scan: the text that was searched and the identifiers found.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Reconstructed document text (PDF input) or the input text verbatim.
    pub text: String,
    /// Deduplicated registry identifiers found in `text`.
    pub trial_ids: HashSet<String>,
}

/// Scan an input for clinical-trial registry identifiers.
///
/// Dispatches on [`detect_input`]: a PDF path runs the full two-column
/// reconstruction via the mupdf backend; anything else is scanned as text.
pub fn scan(input: &str, config: &LayoutConfig) -> Result<ScanResult, IngestError> {
    scan_input(detect_input(input), config)
}

/// Scan an already-classified input.
pub fn scan_input(input: ScanInput, config: &LayoutConfig) -> Result<ScanResult, IngestError> {
    match input {
        ScanInput::PdfPath(path) => scan_pdf(&path, config),
        ScanInput::RawText(text) => Ok(scan_text(text)),
    }
}

/// Scan already-extracted text, bypassing PDF reconstruction.
pub fn scan_text(text: String) -> ScanResult {
    let trial_ids = trialscan_registry::extract_trial_ids(&text);
    ScanResult { text, trial_ids }
}

/// Reconstruct a PDF through an explicit backend, then scan the text.
pub fn scan_pdf_with_backend(
    path: &Path,
    backend: &dyn PdfBackend,
    config: &LayoutConfig,
) -> Result<ScanResult, IngestError> {
    let text = trialscan_layout::reconstruct_document(path, backend, config)?;
    let trial_ids = trialscan_registry::extract_trial_ids(&text);
    tracing::debug!(ids = trial_ids.len(), path = %path.display(), "registry scan complete");
    Ok(ScanResult { text, trial_ids })
}

#[cfg(feature = "pdf")]
fn scan_pdf(path: &Path, config: &LayoutConfig) -> Result<ScanResult, IngestError> {
    let backend = trialscan_pdf_mupdf::MupdfBackend::default();
    scan_pdf_with_backend(path, &backend, config)
}

#[cfg(not(feature = "pdf"))]
fn scan_pdf(_path: &Path, _config: &LayoutConfig) -> Result<ScanResult, IngestError> {
    Err(IngestError::NoPdfSupport)
}

/// Reconstruct a PDF's reading-order text without scanning for identifiers.
#[cfg(feature = "pdf")]
pub fn reconstruct(path: &Path, config: &LayoutConfig) -> Result<String, IngestError> {
    let backend = trialscan_pdf_mupdf::MupdfBackend::default();
    Ok(trialscan_layout::reconstruct_document(path, &backend, config)?)
}

/// Reconstruct a PDF's reading-order text without scanning for identifiers.
#[cfg(not(feature = "pdf"))]
pub fn reconstruct(_path: &Path, _config: &LayoutConfig) -> Result<String, IngestError> {
    Err(IngestError::NoPdfSupport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_existing_pdf_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"%PDF-1.4")
            .unwrap();

        let input = path.to_str().unwrap().to_string();
        assert_eq!(detect_input(&input), ScanInput::PdfPath(path));
    }

    #[test]
    fn test_detect_uppercase_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PAPER.PDF");
        std::fs::File::create(&path).unwrap();

        let input = path.to_str().unwrap().to_string();
        assert_eq!(detect_input(&input), ScanInput::PdfPath(path));
    }

    #[test]
    fn test_dangling_pdf_path_falls_back_to_text() {
        let input = "/no/such/dir/paper.pdf";
        assert_eq!(
            detect_input(input),
            ScanInput::RawText(input.to_string())
        );
    }

    #[test]
    fn test_free_text_is_raw_text() {
        let input = "Registered as NCT00361335.";
        assert_eq!(
            detect_input(input),
            ScanInput::RawText(input.to_string())
        );
    }

    #[test]
    fn test_scan_text_finds_and_dedupes() {
        let result = scan_text("NCT00361335 then again NCT00361335 and ISRCTN47823431".into());
        assert_eq!(result.trial_ids.len(), 2);
        assert!(result.trial_ids.contains("NCT00361335"));
        assert!(result.trial_ids.contains("ISRCTN47823431"));
    }

    #[test]
    fn test_scan_dispatches_raw_text() {
        let result = scan("No identifiers here.", &LayoutConfig::default()).unwrap();
        assert!(result.trial_ids.is_empty());
        assert_eq!(result.text, "No identifiers here.");
    }
}
