use std::path::Path;

use thiserror::Error;

use crate::model::PageContent;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract page content: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF page-extraction backends.
///
/// Implementors provide the low-level geometric extraction step: page
/// dimensions plus raw blocks with bounding boxes, lines, and spans, in no
/// particular order. The reading-order pipeline (classification, column
/// assignment, rendering) lives in `trialscan_layout` and treats this trait
/// as an opaque collaborator.
pub trait PdfBackend: Send + Sync {
    /// Extract per-page geometry and text content from a PDF file.
    ///
    /// Pages are returned in document order. Failure to open the source
    /// document must surface as [`BackendError::OpenError`], never as an
    /// empty page list.
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageContent>, BackendError>;
}
