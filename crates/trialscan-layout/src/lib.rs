use std::path::Path;

use thiserror::Error;

use trialscan_core::{BackendError, LayoutConfig, PdfBackend};

pub mod classify;
pub mod columns;
pub mod document;
pub mod reading_order;
pub mod text_processing;

pub use classify::{BlockClass, classify, is_full_width, is_header_or_footer, is_table_like};
pub use columns::split_columns;
pub use document::reconstruct_pages;
pub use reading_order::reconstruct_page;
pub use text_processing::expand_ligatures;
// Re-export domain types from core (canonical definitions live there)
pub use trialscan_core::{BBox, Block, BlockKind, Line, PageContent, Span};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Reconstruct the reading-order text of a whole document.
///
/// Pipeline per page:
/// 1. Fetch page geometry from `backend`
/// 2. Classify blocks (header/footer, table-like, full-width, body)
/// 3. Partition body blocks into left/right columns per region
/// 4. Emit full-width sections interleaved with left-then-right column sweeps
///
/// Pages are processed strictly in document order and joined with page
/// markers; the result is a single string for the whole document.
pub fn reconstruct_document(
    pdf_path: &Path,
    backend: &dyn PdfBackend,
    config: &LayoutConfig,
) -> Result<String, LayoutError> {
    let pages = backend.extract_pages(pdf_path)?;
    tracing::debug!(pages = pages.len(), path = %pdf_path.display(), "extracted page geometry");
    Ok(document::reconstruct_pages(&pages, config))
}
