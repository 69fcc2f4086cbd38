//! # Nomad Config
//!
//! Configuration types for the Barefoot Nomad API, loaded from environment
//! variables (call `dotenvy::dotenv()` first to pick up a `.env` file):
//!
//! - [`jwt`]: token signing secret and lifetimes
//! - [`cors`]: allowed origins
//! - [`email`]: SMTP settings for verification and reset mail
//! - [`server`]: listener addresses
//!
//! # Example
//!
//! ```ignore
//! use nomad_config::{CorsConfig, EmailConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod email;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use email::EmailConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
