//! Character encoding for ESC/P printers
//!
//! ESC/P printers take one byte per printed character. The lower half
//! (0x00-0x7F) is plain ASCII on every character table; the upper half
//! (0x80-0xFF) depends on the table selected on the printer. This module
//! provides:
//! - `CharacterTable`: static Unicode → byte tables (the Brother table is built in)
//! - `CodePage`: the pluggable table used by the page builder
//! - `encode`: one-byte-per-character transcoding with a missing-character policy

use crate::error::{PrintError, PrintResult};
use encoding_rs::Encoding;
use tracing::trace;

/// A static mapping from non-ASCII characters to printer bytes
///
/// Several characters may share one byte (e.g. two check mark glyphs).
#[derive(Debug, PartialEq, Eq)]
pub struct CharacterTable {
    name: &'static str,
    entries: &'static [(char, u8)],
    replacement: u8,
}

impl CharacterTable {
    /// Declare a table. `replacement` is the byte printed for missing
    /// characters when the caller opts into lossy encoding.
    pub const fn new(name: &'static str, entries: &'static [(char, u8)], replacement: u8) -> Self {
        Self {
            name,
            entries,
            replacement,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [(char, u8)] {
        self.entries
    }

    /// Look up the byte for a character
    pub fn lookup(&self, ch: char) -> Option<u8> {
        self.entries
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, byte)| *byte)
    }
}

/// Character table of Brother printers in ESC/P mode
///
/// Mostly code page 437 plus a handful of check mark / checkbox glyphs.
/// The light shade block (░, 0xB0) doubles as the replacement character.
pub static BROTHER: CharacterTable = CharacterTable::new("brother", BROTHER_ENTRIES, 0xB0);

const BROTHER_ENTRIES: &[(char, u8)] = &[
    // 0x80-0x8F: accented letters
    ('Ç', 0x80),
    ('ü', 0x81),
    ('é', 0x82),
    ('â', 0x83),
    ('ä', 0x84),
    ('à', 0x85),
    ('å', 0x86),
    ('ç', 0x87),
    ('ê', 0x88),
    ('ë', 0x89),
    ('è', 0x8A),
    ('ï', 0x8B),
    ('î', 0x8C),
    ('ì', 0x8D),
    ('Ä', 0x8E),
    ('Å', 0x8F),
    // 0x90-0x9F: accented letters, currency
    ('É', 0x90),
    ('æ', 0x91),
    ('Æ', 0x92),
    ('ô', 0x93),
    ('ö', 0x94),
    ('ò', 0x95),
    ('û', 0x96),
    ('ù', 0x97),
    ('ÿ', 0x98),
    ('Ö', 0x99),
    ('Ü', 0x9A),
    ('¢', 0x9B),
    ('£', 0x9C),
    ('¥', 0x9D),
    ('ƒ', 0x9F),
    // 0xA0-0xAF: Spanish, fractions, quotes
    ('á', 0xA0),
    ('í', 0xA1),
    ('ó', 0xA2),
    ('ú', 0xA3),
    ('ñ', 0xA4),
    ('Ñ', 0xA5),
    ('ª', 0xA6),
    ('º', 0xA7),
    ('¿', 0xA8),
    ('®', 0xA9),
    ('€', 0xAA),
    ('½', 0xAB),
    ('¼', 0xAC),
    ('¡', 0xAD),
    ('«', 0xAE),
    ('»', 0xAF),
    // 0xB0-0xBF: shades, box drawing
    ('░', 0xB0),
    ('▒', 0xB1),
    ('▓', 0xB2),
    ('│', 0xB3),
    ('┤', 0xB4),
    ('©', 0xB8),
    ('╣', 0xB9),
    ('║', 0xBA),
    ('╗', 0xBB),
    ('╝', 0xBC),
    ('┐', 0xBF),
    // 0xC0-0xCF: box drawing
    ('└', 0xC0),
    ('┴', 0xC1),
    ('┬', 0xC2),
    ('├', 0xC3),
    ('─', 0xC4),
    ('┼', 0xC5),
    ('╚', 0xC8),
    ('╔', 0xC9),
    ('╩', 0xCA),
    ('╦', 0xCB),
    ('╠', 0xCC),
    ('═', 0xCD),
    ('╬', 0xCE),
    // 0xD0-0xDF: box drawing, check marks
    ('┘', 0xD9),
    ('┌', 0xDA),
    ('✓', 0xDB),  // U+2713
    ('🗸', 0xDB), // U+1F5F8
    ('✅', 0xDC), // U+2705
    ('☑', 0xDC),  // U+2611
    ('□', 0xDF),
    // 0xE0-0xFF: Greek, math
    ('α', 0xE0),
    ('β', 0xE1),
    ('μ', 0xE6),
    ('Ω', 0xEA),
    ('δ', 0xEB),
    ('ø', 0xED),
    ('±', 0xF1),
    ('¾', 0xF3),
    ('§', 0xF5),
    ('÷', 0xF6),
    ('°', 0xF8),
    ('·', 0xF9),
    ('³', 0xFC),
    ('²', 0xFD),
];

/// The code page used to encode the upper half of the byte range
///
/// Must match the character table selected on the printer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CodePage {
    /// A static character table
    Table(&'static CharacterTable),
    /// A single-byte legacy encoding with a caller-chosen replacement byte
    Legacy {
        encoding: &'static Encoding,
        replacement: u8,
    },
}

impl CodePage {
    /// The built-in Brother table
    pub const BROTHER: CodePage = CodePage::Table(&BROTHER);

    /// Wrap a single-byte, ASCII-compatible `encoding_rs` encoding
    /// (windows-1252, ISO-8859-15, IBM866, ...)
    pub fn legacy(encoding: &'static Encoding, replacement: u8) -> PrintResult<Self> {
        if !encoding.is_single_byte() || !encoding.is_ascii_compatible() {
            return Err(PrintError::InvalidConfig(format!(
                "{} is not a single-byte ASCII-compatible encoding",
                encoding.name()
            )));
        }
        Ok(CodePage::Legacy {
            encoding,
            replacement,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            CodePage::Table(table) => table.name(),
            CodePage::Legacy { encoding, .. } => encoding.name(),
        }
    }

    /// Look up the byte for a non-ASCII character
    pub fn lookup(&self, ch: char) -> Option<u8> {
        match self {
            CodePage::Table(table) => table.lookup(ch),
            CodePage::Legacy { encoding, .. } => {
                let mut utf8 = [0u8; 4];
                let (bytes, _, had_errors) = encoding.encode(ch.encode_utf8(&mut utf8));
                match (&*bytes, had_errors) {
                    ([byte], false) if *byte >= 0x80 => Some(*byte),
                    _ => None,
                }
            }
        }
    }

    /// Byte printed in place of missing characters under `MissingCharacter::Replace`
    pub fn replacement(&self) -> u8 {
        match self {
            CodePage::Table(table) => table.replacement,
            CodePage::Legacy { replacement, .. } => *replacement,
        }
    }
}

impl Default for CodePage {
    fn default() -> Self {
        CodePage::BROTHER
    }
}

/// What to do with characters the code page cannot encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingCharacter {
    /// Fail with `PrintError::CharacterEncoding`
    #[default]
    Strict,
    /// Print the code page's replacement byte
    Replace,
}

/// Encode text with exactly one byte per character
///
/// ASCII (U+0000-U+007F) passes through unchanged; everything else goes
/// through `code_page`. The output length equals `text.chars().count()`.
pub fn encode(
    text: &str,
    code_page: CodePage,
    on_missing: MissingCharacter,
) -> PrintResult<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        if ch.is_ascii() {
            out.push(ch as u8);
            continue;
        }

        match (code_page.lookup(ch), on_missing) {
            (Some(byte), _) => out.push(byte),
            (None, MissingCharacter::Replace) => {
                trace!(
                    character = %ch,
                    index,
                    code_page = code_page.name(),
                    "replacing unsupported character"
                );
                out.push(code_page.replacement());
            }
            (None, MissingCharacter::Strict) => {
                return Err(PrintError::CharacterEncoding {
                    character: ch,
                    index,
                });
            }
        }
    }
    Ok(out)
}
