//! ESC/P page builder
//!
//! Provides a fluent API for building ESC/P print data. Every call appends
//! one chunk (a text run or a single escape sequence); `materialize` joins
//! them in call order.

use crate::encoding::{self, CodePage, MissingCharacter};
use crate::error::{PrintError, PrintResult};

const ESC: u8 = 0x1B;

/// Text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// Character sizes supported by the printer fonts (in dots)
///
/// Not every size works with every font.
#[derive(Debug, Clone, Copy)]
pub struct CharacterSize;

impl CharacterSize {
    pub const SMALL: u16 = 16;
    pub const MEDIUM: u16 = 24;
    pub const LARGE: u16 = 32;
    pub const XLARGE: u16 = 48;
}

/// ESC/P page builder
///
/// ```ignore
/// let mut page = PageBuilder::new();
/// page.bold(true)
///     .text("Hello World!")?
///     .bold(false)
///     .empty_line()
///     .underline(2)?
///     .text("Can you hear me?")?;
/// ```
#[derive(Debug, Clone)]
pub struct PageBuilder {
    chunks: Vec<Vec<u8>>,
    code_page: CodePage,
    missing: MissingCharacter,
    width: usize,
}

impl PageBuilder {
    /// Create a builder with the Brother code page, strict encoding and a
    /// width of 48 characters
    pub fn new() -> Self {
        Self {
            chunks: Vec::new(),
            code_page: CodePage::default(),
            missing: MissingCharacter::default(),
            width: 48,
        }
    }

    /// Create a builder assuming a page width in characters
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::new()
        }
    }

    // === Configuration ===

    /// Assumed page width in characters (used by `line`)
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.width = width;
        self
    }

    /// Code page used to encode text. Must match the one set on the printer.
    pub fn code_page(&self) -> CodePage {
        self.code_page
    }

    pub fn set_code_page(&mut self, code_page: CodePage) -> &mut Self {
        self.code_page = code_page;
        self
    }

    /// Policy for characters missing from the code page
    pub fn missing_policy(&self) -> MissingCharacter {
        self.missing
    }

    pub fn set_missing_policy(&mut self, policy: MissingCharacter) -> &mut Self {
        self.missing = policy;
        self
    }

    fn push(&mut self, chunk: Vec<u8>) -> &mut Self {
        self.chunks.push(chunk);
        self
    }

    // === Text Output ===

    /// Write text encoded with the current code page
    pub fn text(&mut self, s: &str) -> PrintResult<&mut Self> {
        let chunk = encoding::encode(s, self.code_page, self.missing)?;
        Ok(self.push(chunk))
    }

    /// Move to a new line
    pub fn newline(&mut self) -> &mut Self {
        self.push(vec![b'\n'])
    }

    /// Write an empty line
    pub fn empty_line(&mut self) -> &mut Self {
        self.push(vec![b'\n', b'\n'])
    }

    /// Print a line of `width` characters, repeating `pattern` cyclically
    pub fn line(&mut self, pattern: &str) -> PrintResult<&mut Self> {
        if pattern.is_empty() {
            return Err(PrintError::EmptyPattern);
        }
        let line: String = pattern.chars().cycle().take(self.width).collect();
        self.text(&line)
    }

    // === Alignment ===

    /// Set the text alignment, `None` restores the default (left)
    pub fn alignment(&mut self, alignment: Option<Alignment>) -> &mut Self {
        let n = alignment.unwrap_or_default() as u8;
        self.push(vec![ESC, 0x61, n])
    }

    // === Text Style ===

    /// Enable or disable italic text
    pub fn italic(&mut self, on: bool) -> &mut Self {
        self.push(vec![ESC, if on { 0x34 } else { 0x35 }])
    }

    /// Enable or disable bold text
    pub fn bold(&mut self, on: bool) -> &mut Self {
        self.push(vec![ESC, if on { 0x45 } else { 0x46 }])
    }

    /// Enable or disable double-strike text
    pub fn double_strike(&mut self, on: bool) -> &mut Self {
        self.push(vec![ESC, if on { 0x47 } else { 0x48 }])
    }

    /// Enable or disable double width text
    pub fn double_width(&mut self, on: bool) -> &mut Self {
        self.push(vec![ESC, 0x57, u8::from(on)])
    }

    /// Stretch text. The printer turns it off after the next line break.
    pub fn auto_stretch(&mut self) -> &mut Self {
        self.push(vec![ESC, 0x0E])
    }

    /// Underline distance, 0 disables underline
    pub fn underline(&mut self, amount: u8) -> PrintResult<&mut Self> {
        check_range("underline", amount.into(), 0, 4)?;
        Ok(self.push(vec![ESC, 0x2D, amount]))
    }

    /// Space between characters in dots
    pub fn character_spacing(&mut self, dots: u8) -> PrintResult<&mut Self> {
        check_range("character spacing", dots.into(), 0, 127)?;
        Ok(self.push(vec![ESC, 0x20, dots]))
    }

    /// Character size in dots, see `CharacterSize`
    pub fn character_size(&mut self, size: u16) -> &mut Self {
        let [lo, hi] = size.to_le_bytes();
        self.push(vec![ESC, 0x58, 0x00, lo, hi])
    }

    /// Height of a line feed in dots
    pub fn line_feed_dots(&mut self, dots: u16) -> PrintResult<&mut Self> {
        check_range("line feed dots", dots.into(), 0, 255)?;
        Ok(self.push(vec![ESC, 0x33, dots as u8]))
    }

    // === Build ===

    /// Appended chunks in call order
    pub fn chunks(&self) -> &[Vec<u8>] {
        &self.chunks
    }

    /// Number of appended chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Join all chunks into the final byte buffer
    ///
    /// Does not consume the chunks; calling it twice gives the same bytes.
    pub fn materialize(&self) -> Vec<u8> {
        self.chunks.concat()
    }
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_range(parameter: &'static str, value: u32, min: u32, max: u32) -> PrintResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(PrintError::OutOfRange {
            parameter,
            value,
            min,
            max,
        })
    }
}
