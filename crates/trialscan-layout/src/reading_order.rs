use trialscan_core::{Block, BlockKind, LayoutConfig, PageContent};

use crate::classify::{BlockClass, classify};
use crate::columns::split_columns;

/// Separator appended after every emitted block.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Reconstruct one page's text in approximate human reading order.
///
/// Full-width material (titles, section banners, wide abstracts) is read in
/// vertical order and splits the page into regions; within each region every
/// left-column block is read top-to-bottom before the right column, the way
/// a reader finishes a column before starting the next. Output is
/// deterministic for identical input, including the midline tie-break.
pub fn reconstruct_page(page: &PageContent, config: &LayoutConfig) -> String {
    let mut full_width: Vec<&Block> = Vec::new();
    let mut candidates: Vec<&Block> = Vec::new();

    for block in page.blocks.iter().filter(|b| b.kind == BlockKind::Text) {
        match classify(block, page.width, page.height, config) {
            Some(BlockClass::FullWidth) => full_width.push(block),
            Some(BlockClass::Body) => candidates.push(block),
            Some(BlockClass::HeaderFooter) | Some(BlockClass::TableLike) | None => {}
        }
    }

    full_width.sort_by(|a, b| a.bbox.y0.total_cmp(&b.bbox.y0));

    // Region i spans from the bottom of full-width block i-1 to the top of
    // full-width block i. The first region starts at a virtual top-of-page
    // (unbounded above, so slightly negative y0 values are kept); the last
    // ends at a sentinel whose top is the page height.
    let mut out = String::new();
    let mut lower = f64::NEG_INFINITY;

    for i in 0..=full_width.len() {
        if i > 0 {
            let fw = full_width[i - 1];
            out.push_str(&fw.text());
            out.push_str(PARAGRAPH_BREAK);
            lower = fw.bbox.y1;
        }
        let upper = full_width.get(i).map_or(page.height, |b| b.bbox.y0);

        let region: Vec<&Block> = candidates
            .iter()
            .copied()
            .filter(|b| b.bbox.y0 >= lower && b.bbox.y0 < upper)
            .collect();

        let (mut left, mut right) = split_columns(&region, page.width);
        left.sort_by(|a, b| a.bbox.y0.total_cmp(&b.bbox.y0));
        right.sort_by(|a, b| a.bbox.y0.total_cmp(&b.bbox.y0));

        for block in left.into_iter().chain(right) {
            out.push_str(&block.text());
            out.push_str(PARAGRAPH_BREAK);
        }
    }

    out
}
