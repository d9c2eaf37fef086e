use trialscan_core::{LayoutConfig, PageContent};

use crate::reading_order::reconstruct_page;
use crate::text_processing::expand_ligatures;

/// Render every page in document order, each prefixed with a 1-based page
/// marker, and join into the full document text. No reordering happens
/// across pages. Typographic ligatures are expanded in the final text.
pub fn reconstruct_pages(pages: &[PageContent], config: &LayoutConfig) -> String {
    let mut full_text = String::new();
    for (idx, page) in pages.iter().enumerate() {
        let page_text = reconstruct_page(page, config);
        full_text.push_str(&format!("\n--- Page {} ---\n", idx + 1));
        full_text.push_str(&page_text);
    }
    expand_ligatures(&full_text)
}
