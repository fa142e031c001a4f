//! Segment display trait (4-digit 7-segment modules and similar)

/// Short numeric/text display
pub trait SegmentDisplay {
    /// Show an integer, right-aligned
    fn show_number(&mut self, value: i32);

    /// Show a short text (characters that cannot be rendered are blanked)
    fn show_text(&mut self, text: &str);

    /// Blank the display
    fn off(&mut self);
}
