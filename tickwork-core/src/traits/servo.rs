//! Multi-channel servo controller trait

/// Bank of hobby servos addressed by channel
pub trait ServoBank {
    /// Number of channels
    fn channels(&self) -> u8;

    /// Move `channel` to `degrees` (0-180). Unknown channels are ignored.
    fn move_to(&mut self, channel: u8, degrees: u8);

    /// Last commanded angle for `channel`
    fn angle(&self, channel: u8) -> Option<u8>;
}
