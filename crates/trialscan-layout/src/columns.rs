use trialscan_core::Block;

/// Partition column candidates into (left, right) by comparing each block's
/// horizontal center against the page midline.
///
/// The midpoint heuristic assumes a strict two-column layout with a gutter
/// near page center; blocks straddling the gutter land on whichever side
/// their center falls. A center exactly on the midline goes right: the
/// strict `<` comparison is the tie-break rule.
pub fn split_columns<'a>(
    blocks: &[&'a Block],
    page_width: f64,
) -> (Vec<&'a Block>, Vec<&'a Block>) {
    let midline = page_width / 2.0;
    let mut left = Vec::new();
    let mut right = Vec::new();
    for &block in blocks {
        if block.bbox.center_x() < midline {
            left.push(block);
        } else {
            right.push(block);
        }
    }
    (left, right)
}
