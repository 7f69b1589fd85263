//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOP_ADMIN_PASSWORD` - Password for the seeded admin account
//!
//! ## Optional
//! - `SHOP_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOP_PORT` - Listen port (default: 3000)
//! - `SHOP_ADMIN_USERNAME` - Username for the seeded admin account
//!   (default: admin)
//! - `SHOP_SEED_DEMO_DATA` - Seed the demo catalog at startup
//!   (default: true)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shop application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Username of the admin account seeded at startup
    pub admin_username: String,
    /// Password of the admin account seeded at startup
    pub admin_password: SecretString,
    /// Whether to seed the demo catalog at startup
    pub seed_demo_data: bool,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SHOP_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOP_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SHOP_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOP_PORT".to_string(), e.to_string()))?;
        let admin_username = get_env_or_default("SHOP_ADMIN_USERNAME", "admin");
        let admin_password = SecretString::from(get_env("SHOP_ADMIN_PASSWORD")?);
        let seed_demo_data = get_env_or_default("SHOP_SEED_DEMO_DATA", "true")
            .parse::<bool>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SHOP_SEED_DEMO_DATA".to_string(), e.to_string())
            })?;

        Ok(Self {
            host,
            port,
            admin_username,
            admin_password,
            seed_demo_data,
        })
    }

    /// Socket address to bind the listener to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required environment variable.
fn get_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
