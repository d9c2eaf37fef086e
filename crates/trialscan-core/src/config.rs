/// Thresholds for block classification.
///
/// The defaults were chosen against two-column clinical papers: a 25-unit
/// margin band excludes running headers and footers without clipping body
/// text, and a block that is at least 80% of the page width is read as
/// full-width material (title, section banner, wide abstract).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Distance in page units from the top/bottom edges treated as non-body.
    pub margin: f64,
    /// Digit fraction above which a multi-line block is treated as tabular.
    /// The comparison is strict: a block exactly at the threshold is prose.
    pub digit_threshold: f64,
    /// Minimum number of lines before the digit heuristic applies. Shorter
    /// blocks are captions or stray labels, not tables.
    pub line_threshold: usize,
    /// Fraction of the page width a block must span to count as full-width.
    pub width_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 25.0,
            digit_threshold: 0.3,
            line_threshold: 3,
            width_threshold: 0.8,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header/footer margin in page units.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the digit-fraction threshold for table detection.
    pub fn with_digit_threshold(mut self, threshold: f64) -> Self {
        self.digit_threshold = threshold;
        self
    }

    /// Set the minimum line count for table detection.
    pub fn with_line_threshold(mut self, threshold: usize) -> Self {
        self.line_threshold = threshold;
        self
    }

    /// Set the full-width span ratio.
    pub fn with_width_threshold(mut self, threshold: f64) -> Self {
        self.width_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.margin, 25.0);
        assert_eq!(config.digit_threshold, 0.3);
        assert_eq!(config.line_threshold, 3);
        assert_eq!(config.width_threshold, 0.8);
    }

    #[test]
    fn test_builder_overrides() {
        let config = LayoutConfig::new()
            .with_margin(50.0)
            .with_digit_threshold(0.5)
            .with_line_threshold(5)
            .with_width_threshold(0.9);
        assert_eq!(config.margin, 50.0);
        assert_eq!(config.digit_threshold, 0.5);
        assert_eq!(config.line_threshold, 5);
        assert_eq!(config.width_threshold, 0.9);
    }
}
