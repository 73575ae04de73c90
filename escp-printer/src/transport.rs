//! Byte-stream transports for sending ESC/P data
//!
//! Supports:
//! - Network printers (raw TCP, port 9100)
//! - Custom transports through the `Transport` trait

use crate::error::{PrintError, PrintResult};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, instrument};

/// Default raw printing port
pub const DEFAULT_PORT: u16 = 9100;

/// Options passed through to the transport on connect
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectOptions {
    /// Give up connecting after this long. `None` waits for the OS.
    pub timeout: Option<Duration>,
}

impl ConnectOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Trait for printer transports
///
/// Implementations are used by one session at a time; they need no internal
/// synchronization.
#[allow(async_fn_in_trait)]
pub trait Transport: Sized {
    /// Open a connection to `host:port`
    async fn connect(host: &str, port: u16, options: &ConnectOptions) -> PrintResult<Self>;

    /// Write all bytes or fail
    async fn write_all(&mut self, data: &[u8]) -> PrintResult<()>;

    /// Close the connection
    async fn close(&mut self) -> PrintResult<()>;
}

/// Raw TCP transport
///
/// Most network printers accept raw print data on port 9100.
#[derive(Debug)]
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Wrap an already connected stream
    pub fn from_stream(stream: TcpStream) -> Self {
        Self { stream }
    }
}

impl Transport for TcpTransport {
    #[instrument(skip(options), fields(timeout = ?options.timeout))]
    async fn connect(host: &str, port: u16, options: &ConnectOptions) -> PrintResult<Self> {
        let addr = format!("{}:{}", host, port);
        let connect = TcpStream::connect((host, port));

        let result = match options.timeout {
            Some(timeout) => tokio::time::timeout(timeout, connect)
                .await
                .map_err(|_| PrintError::Timeout(format!("Connection timeout: {}", addr)))?,
            None => connect.await,
        };

        let stream = result.map_err(|source| PrintError::Connection { addr, source })?;
        debug!("TCP connection established");
        Ok(Self { stream })
    }

    async fn write_all(&mut self, data: &[u8]) -> PrintResult<()> {
        self.stream.write_all(data).await?;
        self.stream.flush().await?;
        Ok(())
    }

    async fn close(&mut self) -> PrintResult<()> {
        self.stream.shutdown().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_tcp_write_and_close() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let mut transport = TcpTransport::connect("127.0.0.1", port, &ConnectOptions::default())
            .await
            .unwrap();
        transport.write_all(b"\x1B@hello").await.unwrap();
        transport.close().await.unwrap();

        assert_eq!(server.await.unwrap(), b"\x1B@hello".to_vec());
    }

    #[tokio::test]
    async fn test_tcp_connection_refused() {
        // Bind then drop to get a port nobody listens on
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = TcpTransport::connect("127.0.0.1", port, &ConnectOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PrintError::Connection { .. }));
        assert!(err.is_transport());
    }

    #[test]
    fn test_connect_options() {
        let options = ConnectOptions::default();
        assert!(options.timeout.is_none());

        let options = options.with_timeout(Duration::from_millis(500));
        assert_eq!(options.timeout, Some(Duration::from_millis(500)));
    }
}
