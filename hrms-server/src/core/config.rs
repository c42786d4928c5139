//! Server configuration
//!
//! All settings come from environment variables with defaults:
//!
//! | Environment variable | Default | Notes |
//! |----------------------|---------|-------|
//! | DATABASE_URL | sqlite:hrms.db | SQLite connection string |
//! | SERVER_PORT | 5000 | HTTP port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | JWT_SECRET | (dev default) | HMAC signing secret |
//! | JWT_EXPIRATION_HOURS | 24 | token lifetime |
//! | JWT_ISSUER | hrms-server | `iss` claim |
//! | READ_TIMEOUT | 10 | seconds |
//! | WRITE_TIMEOUT | 10 | seconds |
//! | SHUTDOWN_TIMEOUT_MS | 5000 | graceful drain period |
//! | MAX_CONNECTIONS | 5 | DB pool size |

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC signing secret (should be at least 32 bytes in production)
    pub secret: String,
    /// Token lifetime in hours
    pub expiration_hours: i64,
    /// Token issuer (`iss` claim)
    pub issuer: String,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "3xtr3m4d4m3nt3C0mpl3j0".into()),
            expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(24),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "hrms-server".into()),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection string
    pub database_url: String,
    /// HTTP API port
    pub server_port: u16,
    /// Running environment: development | staging | production
    pub environment: String,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Read timeout (seconds)
    pub read_timeout_secs: u64,
    /// Write timeout (seconds)
    pub write_timeout_secs: u64,
    /// Graceful shutdown drain period (milliseconds)
    pub shutdown_timeout_ms: u64,
    /// DB pool size
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:hrms.db".into()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::from_env(),
            read_timeout_secs: env_u64("READ_TIMEOUT", 10),
            write_timeout_secs: env_u64("WRITE_TIMEOUT", 10),
            shutdown_timeout_ms: env_u64("SHUTDOWN_TIMEOUT_MS", 5000),
            max_connections: std::env::var("MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Request timeout applied by the HTTP layer
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.read_timeout_secs.max(self.write_timeout_secs))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_u64(key: &str, fallback: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}
