//! Server configuration

use grow_core::config::parse_flag;
use grow_core::{ContentError, Result};

/// Port used when neither the builder nor `GROW_PORT` sets one
pub const DEFAULT_PORT: u16 = 8430;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Enable CORS
    pub cors_enabled: bool,
}

impl ServerConfig {
    /// Create a new configuration builder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Defaults overridden by `GROW_PORT` and `GROW_CORS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden from any variable lookup. A port that does not
    /// parse or a CORS value that is not a boolean is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(port) = lookup("GROW_PORT") {
            let port = port.trim().parse().map_err(|_| ContentError::InvalidConfig {
                reason: format!("GROW_PORT must be a port number, got '{}'", port),
            })?;
            builder = builder.port(port);
        }
        if let Some(cors) = lookup("GROW_CORS") {
            builder = builder.cors(parse_flag("GROW_CORS", &cors)?);
        }
        Ok(builder.build())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_enabled: true,
        }
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    cors_enabled: Option<bool>,
}

impl ServerConfigBuilder {
    /// Set the port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Enable or disable CORS
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors_enabled = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ServerConfig {
        ServerConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            cors_enabled: self.cors_enabled.unwrap_or(true),
        }
    }
}
