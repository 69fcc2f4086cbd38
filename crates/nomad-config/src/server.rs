use std::env;

use crate::env_or;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_or("PORT", 3000),
            metrics_port: env_or("METRICS_PORT", 9000),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn metrics_address(&self) -> String {
        format!("{}:{}", self.host, self.metrics_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            metrics_port: 9100,
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.metrics_address(), "127.0.0.1:9100");
    }
}
