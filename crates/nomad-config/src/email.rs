use std::env;

use crate::env_or;

#[derive(Clone, Debug)]
pub struct EmailConfig {
    pub enabled: bool,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_email: String,
    pub from_name: String,
    pub frontend_url: String,
}

impl EmailConfig {
    pub fn from_env() -> Self {
        Self {
            enabled: env::var("SMTP_ENABLED")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            smtp_port: env_or("SMTP_PORT", 1025),
            smtp_username: env::var("SMTP_USERNAME").unwrap_or_default(),
            smtp_password: env::var("SMTP_PASSWORD").unwrap_or_default(),
            from_email: env::var("FROM_EMAIL")
                .unwrap_or_else(|_| "noreply@barefootnomad.com".to_string()),
            from_name: env::var("FROM_NAME").unwrap_or_else(|_| "Barefoot Nomad".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }

    /// Config that never touches an SMTP server.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::from_env()
        }
    }
}
