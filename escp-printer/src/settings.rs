//! Page layout settings
//!
//! Encodes orientation, margins and page length into the fixed 21-byte
//! block the printer expects before a print job:
//!
//! | Offset | Bytes                            | Command      |
//! |--------|----------------------------------|--------------|
//! | 0      | `1B 69 4C o`                     | orientation  |
//! | 4      | `00`                             | padding      |
//! | 5      | `1B 28 63 04 00 tL tH bL bH`     | page format  |
//! | 14     | `1B 28 43 02 00 nL nH`           | page length  |

/// Size of the encoded settings block
pub const SETTINGS_LEN: usize = 21;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait = 0,
    Landscape = 1,
}

/// Settings for the page layout
///
/// Margins and length are in dots. The fields are 16 bit on the wire;
/// callers holding wider values must clamp or truncate them first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSettings {
    pub orientation: Orientation,
    pub top_margin: u16,
    pub bottom_margin: u16,
    /// Page length in dots, 0 means automatic
    pub page_length: u16,
}

impl PageSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_margins(mut self, top: u16, bottom: u16) -> Self {
        self.top_margin = top;
        self.bottom_margin = bottom;
        self
    }

    pub fn with_page_length(mut self, dots: u16) -> Self {
        self.page_length = dots;
        self
    }

    /// Encode the settings block
    pub fn encode(&self) -> [u8; SETTINGS_LEN] {
        let mut buf = [0u8; SETTINGS_LEN];

        // ESC i L - orientation
        buf[0..4].copy_from_slice(&[0x1B, 0x69, 0x4C, self.orientation as u8]);

        // ESC ( c - page format (top and bottom margin)
        buf[5..10].copy_from_slice(&[0x1B, 0x28, 0x63, 0x04, 0x00]);
        buf[10..12].copy_from_slice(&self.top_margin.to_le_bytes());
        buf[12..14].copy_from_slice(&self.bottom_margin.to_le_bytes());

        // ESC ( C - page length
        buf[14..19].copy_from_slice(&[0x1B, 0x28, 0x43, 0x02, 0x00]);
        buf[19..21].copy_from_slice(&self.page_length.to_le_bytes());

        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_landscape() {
        let settings = PageSettings::new()
            .with_orientation(Orientation::Landscape)
            .with_margins(10, 20);

        assert_eq!(
            settings.encode(),
            [
                0x1B, 0x69, 0x4C, 0x01, 0x00, 0x1B, 0x28, 0x63, 0x04, 0x00, 0x0A, 0x00, 0x14,
                0x00, 0x1B, 0x28, 0x43, 0x02, 0x00, 0x00, 0x00,
            ]
        );
    }

    #[test]
    fn test_encode_defaults() {
        let buf = PageSettings::default().encode();
        assert_eq!(buf.len(), SETTINGS_LEN);
        assert_eq!(buf[3], 0x00);
        assert_eq!(&buf[10..14], &[0, 0, 0, 0]);
        assert_eq!(&buf[19..21], &[0, 0]);
    }

    #[test]
    fn test_encode_u16_little_endian() {
        let buf = PageSettings::new()
            .with_margins(0x0102, u16::MAX)
            .with_page_length(0x0BB8)
            .encode();

        assert_eq!(&buf[10..12], &[0x02, 0x01]);
        assert_eq!(&buf[12..14], &[0xFF, 0xFF]);
        assert_eq!(&buf[19..21], &[0xB8, 0x0B]);
    }
}
