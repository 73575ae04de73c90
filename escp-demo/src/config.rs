//! Demo configuration

use anyhow::Context;
use escp_printer::{ConnectOptions, DEFAULT_PORT, Orientation};
use std::time::Duration;

/// Demo configuration, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Printer address (env: PRINTER_HOST, or the first CLI argument)
    pub host: String,
    /// Raw printing port (env: PRINTER_PORT)
    pub port: u16,
    /// Connect timeout in milliseconds (env: PRINTER_CONNECT_TIMEOUT_MS)
    pub connect_timeout: Option<Duration>,
    /// Print in landscape (env: PRINTER_LANDSCAPE)
    pub landscape: bool,
}

impl Config {
    /// Load configuration from environment variables.
    /// `host_arg` overrides PRINTER_HOST.
    pub fn from_env(host_arg: Option<String>) -> anyhow::Result<Self> {
        let host = match host_arg {
            Some(host) => host,
            None => std::env::var("PRINTER_HOST")
                .context("PRINTER_HOST must be set (or pass the host as first argument)")?,
        };

        let port = match std::env::var("PRINTER_PORT") {
            Ok(p) => p
                .parse()
                .with_context(|| format!("PRINTER_PORT is not a port number: {p}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let connect_timeout = std::env::var("PRINTER_CONNECT_TIMEOUT_MS")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|ms| {
                ms.parse()
                    .map(Duration::from_millis)
                    .with_context(|| format!("PRINTER_CONNECT_TIMEOUT_MS is not a number: {ms}"))
            })
            .transpose()?;

        let landscape = std::env::var("PRINTER_LANDSCAPE")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            connect_timeout,
            landscape,
        })
    }

    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions {
            timeout: self.connect_timeout,
        }
    }

    pub fn orientation(&self) -> Orientation {
        if self.landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_from_config() {
        let config = Config {
            host: "192.168.1.100".to_string(),
            port: DEFAULT_PORT,
            connect_timeout: Some(Duration::from_millis(1500)),
            landscape: true,
        };

        assert_eq!(
            config.connect_options().timeout,
            Some(Duration::from_millis(1500))
        );
        assert_eq!(config.orientation(), Orientation::Landscape);
    }

    #[test]
    fn test_host_argument_wins() {
        let config = Config::from_env(Some("10.0.0.7".to_string())).unwrap();
        assert_eq!(config.host, "10.0.0.7");
    }
}
