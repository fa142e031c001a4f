//! 7-segment glyphs
//!
//! Bit 0 = segment a ... bit 6 = segment g, bit 7 = decimal point.
//!
//! ```text
//!  aaa
//! f   b
//!  ggg
//! e   c
//!  ddd  .
//! ```

pub const BLANK: u8 = 0x00;
pub const MINUS: u8 = 0x40;
pub const DOT: u8 = 0x80;

const DIGITS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Segment pattern for a decimal digit (0-9)
pub fn digit(value: u8) -> u8 {
    DIGITS.get(value as usize).copied().unwrap_or(BLANK)
}

/// Segment pattern for a character; unrenderable characters are blank
pub fn glyph(c: char) -> u8 {
    match c.to_ascii_uppercase() {
        '0'..='9' => digit(c as u8 - b'0'),
        'A' => 0x77,
        'B' => 0x7C,
        'C' => 0x39,
        'D' => 0x5E,
        'E' => 0x79,
        'F' => 0x71,
        'G' => 0x3D,
        'H' => 0x76,
        'I' => 0x30,
        'J' => 0x1E,
        'L' => 0x38,
        'N' => 0x54,
        'O' => 0x5C,
        'P' => 0x73,
        'R' => 0x50,
        'S' => 0x6D,
        'T' => 0x78,
        'U' => 0x3E,
        'Y' => 0x6E,
        '-' => MINUS,
        '_' => 0x08,
        '.' => DOT,
        _ => BLANK,
    }
}
