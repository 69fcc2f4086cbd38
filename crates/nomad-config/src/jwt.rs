use std::env;

use crate::env_or;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of session tokens issued at signup/signin, in seconds.
    pub access_token_expiry: i64,
    /// Lifetime of single-purpose tokens (email verification, password reset).
    pub action_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: env_or("JWT_ACCESS_EXPIRY", 86400), // 24 hours
            action_token_expiry: env_or("JWT_ACTION_EXPIRY", 3600),  // 1 hour
        }
    }
}
