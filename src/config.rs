//! Server configuration
//!
//! Built in layers, lowest precedence first: defaults, an optional TOML file,
//! `PINGECHO_*` environment variables, then command-line flags.

use std::{
    net::{AddrParseError, IpAddr, SocketAddr},
    path::{Path, PathBuf},
};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use crate::activations::health::Health;

/// Default listen port
pub const DEFAULT_PORT: u16 = 4444;

/// Resolved server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// IP address to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Message returned by `GET /ping`
    pub ping_message: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            ping_message: Health::DEFAULT_MESSAGE.to_string(),
        }
    }
}

/// Error types for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid host address '{host}': {source}")]
    Address {
        host: String,
        source: AddrParseError,
    },
}

impl ServerConfig {
    /// Load a TOML config file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Address to listen on. `host` must be an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|source| ConfigError::Address {
            host: self.host.clone(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// CLI arguments for the pingecho server
#[derive(Parser, Debug, Default)]
#[command(name = "pingecho")]
#[command(about = "Ping and echo HTTP service")]
pub struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// IP address to bind
    #[arg(long, env = "PINGECHO_HOST")]
    pub host: Option<String>,

    /// Port for the HTTP server
    #[arg(short, long, env = "PINGECHO_PORT")]
    pub port: Option<u16>,

    /// Message returned by GET /ping
    #[arg(long, env = "PINGECHO_PING_MESSAGE")]
    pub ping_message: Option<String>,
}

impl Args {
    /// Resolve the final configuration
    pub fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };

        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(ping_message) = self.ping_message {
            config.ping_message = ping_message;
        }

        Ok(config)
    }
}
