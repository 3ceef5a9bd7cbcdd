//! Server configuration for the Carebase REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CAREBASE_PORT` | 8080 | Server port |
//! | `CAREBASE_HOST` | 127.0.0.1 | Host to bind |
//! | `CAREBASE_LOG_LEVEL` | info | Log level |
//! | `CAREBASE_MAX_BODY_SIZE` | 10485760 | Max request body (bytes) |
//! | `CAREBASE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `CAREBASE_ENABLE_CORS` | true | Enable CORS |
//! | `CAREBASE_CORS_ORIGINS` | * | Allowed origins |
//! | `CAREBASE_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `CAREBASE_CORS_HEADERS` | Content-Type,Authorization,Accept | Allowed headers |
//! | `CAREBASE_BASE_URL` | http://localhost:8080/fhir | Base URL used in `Location` headers |
//! | `CAREBASE_STORAGE` | memory | Storage backend (`memory` or `sqlite`) |
//! | `CAREBASE_DATABASE_URL` | carebase.db | SQLite database path (or `:memory:`) |
//!
//! # Example
//!
//! ```rust
//! use carebase_rest::ServerConfig;
//! use clap::Parser;
//!
//! // Command line arguments, falling back to the environment
//! let config = ServerConfig::parse_from(["carebase", "--port", "9090"]);
//! assert_eq!(config.port, 9090);
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use std::fmt;
use std::str::FromStr;

use clap::Parser;

/// Server configuration for the Carebase REST API.
///
/// This struct can be constructed from command line arguments and environment
/// variables using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "carebase")]
#[command(about = "Carebase FHIR Patient server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "CAREBASE_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "CAREBASE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CAREBASE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "CAREBASE_MAX_BODY_SIZE", default_value = "10485760")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "CAREBASE_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "CAREBASE_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CAREBASE_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "CAREBASE_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "CAREBASE_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept"
    )]
    pub cors_headers: String,

    /// Base URL of the FHIR endpoint (used in Location headers).
    #[arg(
        long,
        env = "CAREBASE_BASE_URL",
        default_value = "http://localhost:8080/fhir"
    )]
    pub base_url: String,

    /// Storage backend: `memory` or `sqlite`.
    #[arg(long, env = "CAREBASE_STORAGE", default_value = "memory")]
    pub storage: String,

    /// SQLite database path, or `:memory:`.
    #[arg(long, env = "CAREBASE_DATABASE_URL")]
    pub database_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 10 * 1024 * 1024, // 10MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept".to_string(),
            base_url: "http://localhost:8080/fhir".to_string(),
            storage: "memory".to_string(),
            database_url: None,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Parses the configured storage backend.
    pub fn storage_backend_mode(&self) -> Result<StorageBackendMode, String> {
        self.storage.parse()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            errors.push(format!(
                "Base URL must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }

        if let Err(e) = self.storage_backend_mode() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 1024 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            base_url: "http://localhost:8080/fhir".to_string(),
            storage: "memory".to_string(),
            database_url: None,
        }
    }
}

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackendMode {
    /// Non-persistent in-memory map.
    Memory,
    /// SQLite database file (or `:memory:`).
    Sqlite,
}

impl fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackendMode::Memory => write!(f, "memory"),
            StorageBackendMode::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for StorageBackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackendMode::Memory),
            "sqlite" => Ok(StorageBackendMode::Sqlite),
            other => Err(format!(
                "Unknown storage backend '{}', expected 'memory' or 'sqlite'",
                other
            )),
        }
    }
}
