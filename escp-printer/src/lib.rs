//! # escp-printer
//!
//! ESC/P printer library for Brother label and receipt printers.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - One-byte-per-character text encoding (built-in Brother table or any
//!   single-byte `encoding_rs` encoding)
//! - ESC/P page building (styles, alignment, sizes, line spacing)
//! - Page layout settings (orientation, margins, page length)
//! - Network printing (raw TCP, port 9100)
//!
//! WHAT to print stays in application code.
//!
//! ## Example
//!
//! ```ignore
//! use escp_printer::{Alignment, Orientation, PageBuilder, PageSettings, PrinterSession};
//!
//! let mut page = PageBuilder::new();
//! page.bold(true)
//!     .text("Hello World!")?
//!     .bold(false)
//!     .empty_line()
//!     .alignment(Some(Alignment::Right))
//!     .text("Right text")?
//!     .alignment(None)
//!     .newline()
//!     .line("-=")?;
//!
//! let mut printer = PrinterSession::connect("192.168.1.100", 9100).await?;
//! printer
//!     .set_page_settings(&PageSettings::new().with_orientation(Orientation::Landscape))
//!     .await?;
//! printer.print(&page, true).await?;
//! printer.disconnect().await?;
//! ```

mod encoding;
mod error;
mod escp;
mod printer;
mod settings;
mod transport;

// Re-exports
pub use encoding::{BROTHER, CharacterTable, CodePage, MissingCharacter, encode};
pub use error::{PrintError, PrintResult};
pub use escp::{Alignment, CharacterSize, PageBuilder};
pub use printer::PrinterSession;
pub use settings::{Orientation, PageSettings, SETTINGS_LEN};
pub use transport::{ConnectOptions, DEFAULT_PORT, TcpTransport, Transport};
