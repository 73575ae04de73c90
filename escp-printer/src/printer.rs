//! Printer session
//!
//! A session owns one transport. Connecting selects ESC/P mode and resets
//! the printer; afterwards pages, settings and raw commands are written as
//! they are issued. Nothing is buffered, retried or reconnected.

use crate::error::{PrintError, PrintResult};
use crate::escp::PageBuilder;
use crate::settings::PageSettings;
use crate::transport::{ConnectOptions, DEFAULT_PORT, TcpTransport, Transport};
use tracing::{debug, info, instrument};

/// ESC i a 0 - select ESC/P command mode
const MODE_SELECT_ESCP: [u8; 4] = [0x1B, 0x69, 0x61, 0x00];
/// ESC @ - initialize (drops non-persisted settings)
const RESET: [u8; 2] = [0x1B, 0x40];
/// FF - print and eject the page
const FORM_FEED: u8 = 0x0C;

/// A connected printer
///
/// ```ignore
/// let mut printer = PrinterSession::connect("192.168.1.100", 9100).await?;
/// printer.print(&page, true).await?;
/// printer.disconnect().await?;
/// ```
#[derive(Debug)]
pub struct PrinterSession<T: Transport = TcpTransport> {
    transport: Option<T>,
    peer: String,
}

impl PrinterSession<TcpTransport> {
    /// Connect to a network printer
    pub async fn connect(host: &str, port: u16) -> PrintResult<Self> {
        Self::connect_with(host, port, &ConnectOptions::default()).await
    }

    /// Connect to a network printer on the default port (9100)
    pub async fn connect_default(host: &str) -> PrintResult<Self> {
        Self::connect(host, DEFAULT_PORT).await
    }
}

impl<T: Transport> PrinterSession<T> {
    /// Connect through transport `T`, passing `options` through to it
    #[instrument(skip(options))]
    pub async fn connect_with(host: &str, port: u16, options: &ConnectOptions) -> PrintResult<Self> {
        info!("Connecting to printer");
        let transport = T::connect(host, port, options).await?;
        Self::handshake(transport, format!("{}:{}", host, port)).await
    }

    /// Start a session on an already connected transport
    pub async fn open(transport: T, peer: impl Into<String>) -> PrintResult<Self> {
        Self::handshake(transport, peer.into()).await
    }

    async fn handshake(transport: T, peer: String) -> PrintResult<Self> {
        let mut session = Self {
            transport: Some(transport),
            peer,
        };
        session.write(&MODE_SELECT_ESCP).await?;
        session.reset().await?;
        info!(peer = %session.peer, "Printer session ready");
        Ok(session)
    }

    /// Address of the printer
    pub fn peer(&self) -> &str {
        &self.peer
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    async fn write(&mut self, data: &[u8]) -> PrintResult<()> {
        let transport = self.transport.as_mut().ok_or(PrintError::SessionClosed)?;
        debug!(bytes = data.len(), "Writing to printer");
        transport.write_all(data).await
    }

    /// Reset all current printer settings (persisted settings are kept)
    pub async fn reset(&mut self) -> PrintResult<()> {
        self.write(&RESET).await
    }

    /// Send page layout settings
    #[instrument(skip(self), fields(peer = %self.peer))]
    pub async fn set_page_settings(&mut self, settings: &PageSettings) -> PrintResult<()> {
        self.write(&settings.encode()).await
    }

    /// Print a page, optionally ejecting it with a form feed
    #[instrument(skip(self, page), fields(peer = %self.peer, chunks = page.len()))]
    pub async fn print(&mut self, page: &PageBuilder, feed_page: bool) -> PrintResult<()> {
        let mut data = page.materialize();
        if feed_page {
            data.push(FORM_FEED);
        }
        self.write(&data).await?;
        info!(bytes = data.len(), "Print job sent");
        Ok(())
    }

    /// Send raw bytes, for commands the page builder does not cover
    pub async fn send_raw(&mut self, data: &[u8]) -> PrintResult<()> {
        self.write(data).await
    }

    /// Close the connection. The session cannot be used afterwards.
    #[instrument(skip(self), fields(peer = %self.peer))]
    pub async fn disconnect(&mut self) -> PrintResult<()> {
        let mut transport = self.transport.take().ok_or(PrintError::SessionClosed)?;
        transport.close().await?;
        info!("Disconnected from printer");
        Ok(())
    }
}
