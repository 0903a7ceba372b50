//! Configuration for the calculator server.

use truerate_error::{ServerError, ServerErrorKind};

/// Configuration for the calculator server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerConfig {
    /// Address to bind, e.g. "127.0.0.1:8080".
    pub bind_addr: String,
    /// Endpoint that stores captured leads. Leads are logged and dropped
    /// when unset.
    pub subscribe_url: Option<String>,
}

impl ServerConfig {
    /// Create a new server configuration.
    pub fn new(bind_addr: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            subscribe_url: None,
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `TRUERATE_BIND_ADDR` (default: "127.0.0.1:8080")
    /// - `TRUERATE_SUBSCRIBE_URL` (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if `TRUERATE_BIND_ADDR` is set but empty.
    pub fn from_env() -> Result<Self, ServerError> {
        let bind_addr = match std::env::var("TRUERATE_BIND_ADDR") {
            Ok(addr) if addr.trim().is_empty() => {
                return Err(ServerError::new(ServerErrorKind::Configuration(
                    "TRUERATE_BIND_ADDR is empty".into(),
                )));
            }
            Ok(addr) => addr,
            Err(_) => "127.0.0.1:8080".to_string(),
        };
        let subscribe_url = std::env::var("TRUERATE_SUBSCRIBE_URL").ok();

        Ok(Self {
            bind_addr,
            subscribe_url,
        })
    }

    /// Set the subscription endpoint.
    pub fn with_subscribe_url(mut self, url: impl Into<String>) -> Self {
        self.subscribe_url = Some(url.into());
        self
    }
}
