use std::path::Path;

use mupdf::{Document, TextPageFlags};

use trialscan_core::{BBox, BackendError, Block, BlockKind, Line, PageContent, PdfBackend, Span};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island — it isolates the mupdf dependency
/// (which is AGPL-3.0) so that text-only scanning does not transitively
/// depend on it.
///
/// The backend is a plain geometry source: it reports every text block with
/// its bounds and leaves header/footer, table, and column decisions to the
/// layout pipeline.
#[derive(Debug, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn extract_pages(&self, path: &Path) -> Result<Vec<PageContent>, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut pages = Vec::new();

        for page_result in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
        {
            let page = page_result.map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let bounds = page
                .bounds()
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

            let mut blocks = Vec::new();
            for block in text_page.blocks() {
                let b = block.bounds();
                let mut lines = Vec::new();
                for line in block.lines() {
                    // mupdf exposes char runs rather than styled spans; each
                    // line becomes a single span holding its text.
                    let text: String = line
                        .chars()
                        .map(|c| c.char().unwrap_or('\u{FFFD}'))
                        .collect();
                    lines.push(Line {
                        spans: vec![Span { text }],
                    });
                }
                // Shift coordinates so the page origin is (0, 0); the
                // classifier's margin arithmetic assumes that.
                blocks.push(Block {
                    kind: BlockKind::Text,
                    bbox: BBox::new(
                        f64::from(b.x0 - bounds.x0),
                        f64::from(b.y0 - bounds.y0),
                        f64::from(b.x1 - bounds.x0),
                        f64::from(b.y1 - bounds.y0),
                    ),
                    lines,
                });
            }

            pages.push(PageContent {
                width: f64::from(bounds.x1 - bounds.x0),
                height: f64::from(bounds.y1 - bounds.y0),
                blocks,
            });
        }

        Ok(pages)
    }
}
