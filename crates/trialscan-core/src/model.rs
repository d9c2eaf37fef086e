//! Geometric page model produced by [`PdfBackend`](crate::PdfBackend)
//! implementations.
//!
//! Coordinates are in page units with the origin at the top-left corner and
//! y increasing downward. A page and its blocks are built once per page by
//! the backend, read by the layout pipeline, and discarded after the page's
//! text is rendered.

/// A run of text with uniform styling. Only the text content matters to the
/// pipeline; style attributes stay with the producing backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
}

/// An ordered sequence of spans sharing one visual line. Owned by its block.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// Join span texts with single spaces into one line string.
    pub fn text(&self) -> String {
        self.spans
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Content-type tag from the backend. Only text blocks are admitted to
/// reading-order reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Text,
    Image,
}

/// Bounding box in page coordinates, y increasing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BBox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn center_x(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    /// True when every coordinate is finite and the box is not inverted.
    pub fn is_well_formed(&self) -> bool {
        self.x0.is_finite()
            && self.y0.is_finite()
            && self.x1.is_finite()
            && self.y1.is_finite()
            && self.x1 >= self.x0
            && self.y1 >= self.y0
    }
}

/// A rectangular region of page content: a paragraph, title, caption, or
/// table fragment. Immutable once produced by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub bbox: BBox,
    pub lines: Vec<Line>,
}

impl Block {
    /// Flatten the block into text: spans joined by spaces, lines by `\n`,
    /// preserving the block's internal line structure. A block with no lines
    /// renders to the empty string.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One page's snapshot from the backend: dimensions plus raw blocks in
/// whatever order the backend produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub width: f64,
    pub height: f64,
    pub blocks: Vec<Block>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str) -> Span {
        Span { text: text.into() }
    }

    #[test]
    fn test_empty_block_renders_empty() {
        let block = Block {
            kind: BlockKind::Text,
            bbox: BBox::new(0.0, 0.0, 10.0, 10.0),
            lines: vec![],
        };
        assert_eq!(block.text(), "");
    }

    #[test]
    fn test_single_span_renders_verbatim() {
        let block = Block {
            kind: BlockKind::Text,
            bbox: BBox::new(0.0, 0.0, 10.0, 10.0),
            lines: vec![Line {
                spans: vec![span("NCT00361335 was registered.")],
            }],
        };
        assert_eq!(block.text(), "NCT00361335 was registered.");
    }

    #[test]
    fn test_spans_joined_by_space_lines_by_newline() {
        let block = Block {
            kind: BlockKind::Text,
            bbox: BBox::new(0.0, 0.0, 10.0, 10.0),
            lines: vec![
                Line {
                    spans: vec![span("First"), span("line")],
                },
                Line {
                    spans: vec![span("second line")],
                },
            ],
        };
        assert_eq!(block.text(), "First line\nsecond line");
    }

    #[test]
    fn test_bbox_well_formed() {
        assert!(BBox::new(0.0, 0.0, 10.0, 10.0).is_well_formed());
        assert!(BBox::new(5.0, 5.0, 5.0, 5.0).is_well_formed());
        assert!(!BBox::new(10.0, 0.0, 0.0, 10.0).is_well_formed());
        assert!(!BBox::new(0.0, f64::NAN, 10.0, 10.0).is_well_formed());
    }

    #[test]
    fn test_bbox_center_x() {
        let b = BBox::new(100.0, 0.0, 200.0, 50.0);
        assert_eq!(b.center_x(), 150.0);
        assert_eq!(b.width(), 100.0);
    }
}
