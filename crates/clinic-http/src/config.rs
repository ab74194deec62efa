//! HTTP server configuration.

use std::path::PathBuf;

/// Server configuration: bind address and database location.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// SQLite database file, created on first start
    pub db_path: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            db_path: PathBuf::from("clinic.db"),
        }
    }
}

impl HttpConfig {
    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
