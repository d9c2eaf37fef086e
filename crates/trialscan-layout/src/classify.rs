use trialscan_core::{Block, LayoutConfig};

/// Classification outcome for one raw text block.
///
/// Each block gets exactly one tag; routing stays explicit and future
/// detectors (figure captions, footnote bands) become new variants rather
/// than extra boolean flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockClass {
    /// Inside the top or bottom margin band: running header, footer, page
    /// number. Excluded from reconstruction.
    HeaderFooter,
    /// Digit-dense multi-line block, treated as tabular data and excluded.
    TableLike,
    /// Spans most of the page width: title, section banner, wide abstract.
    /// Read in vertical order, acting as a separator between column regions.
    FullWidth,
    /// Column candidate: body prose belonging to the left or right column.
    Body,
}

impl BlockClass {
    /// Blocks that survive into reading-order reconstruction.
    pub fn is_admitted(self) -> bool {
        matches!(self, BlockClass::FullWidth | BlockClass::Body)
    }
}

/// True if the block sits in the header or footer band: bottom edge above
/// `margin`, or top edge below `page_height - margin`.
pub fn is_header_or_footer(block: &Block, page_height: f64, margin: f64) -> bool {
    block.bbox.y1 < margin || block.bbox.y0 > page_height - margin
}

/// Digit-density table heuristic.
///
/// Blocks with fewer than `line_threshold` lines are never tables (captions
/// and stray labels are short). Otherwise the digit fraction of the
/// concatenated span text must be strictly greater than `digit_threshold`.
///
/// This is approximate: dense numeric prose (statistical results paragraphs)
/// will be flagged as tabular. That false positive is accepted and pinned by
/// tests; do not retune the threshold without a labeled corpus.
pub fn is_table_like(block: &Block, digit_threshold: f64, line_threshold: usize) -> bool {
    if block.lines.len() < line_threshold {
        return false;
    }
    let text: String = block
        .lines
        .iter()
        .flat_map(|line| line.spans.iter())
        .map(|span| span.text.as_str())
        .collect();
    if text.is_empty() {
        return false;
    }
    let total = text.chars().count();
    let digits = text.chars().filter(char::is_ascii_digit).count();
    digits as f64 / total as f64 > digit_threshold
}

/// True if the block's horizontal extent covers at least
/// `width_threshold` of the page width.
pub fn is_full_width(block: &Block, page_width: f64, width_threshold: f64) -> bool {
    block.bbox.width() >= page_width * width_threshold
}

/// Classify one text block against the page geometry.
///
/// Returns `None` for a block with a malformed bounding box; the caller
/// skips it and keeps the rest of the page.
pub fn classify(
    block: &Block,
    page_width: f64,
    page_height: f64,
    config: &LayoutConfig,
) -> Option<BlockClass> {
    if !block.bbox.is_well_formed() {
        tracing::warn!(bbox = ?block.bbox, "skipping block with malformed bounding box");
        return None;
    }
    if is_header_or_footer(block, page_height, config.margin) {
        return Some(BlockClass::HeaderFooter);
    }
    if is_table_like(block, config.digit_threshold, config.line_threshold) {
        return Some(BlockClass::TableLike);
    }
    if is_full_width(block, page_width, config.width_threshold) {
        return Some(BlockClass::FullWidth);
    }
    Some(BlockClass::Body)
}
