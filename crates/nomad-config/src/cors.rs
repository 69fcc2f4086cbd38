use std::env;

const DEFAULT_FRONTEND: &str = "http://localhost:3000";

/// Origins allowed to call the API from a browser.
///
/// `ALLOWED_ORIGINS` is a comma-separated list. Without it the API trusts the
/// frontend its mail links point at (`FRONTEND_URL`).
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let raw = env::var("ALLOWED_ORIGINS")
            .or_else(|_| env::var("FRONTEND_URL"))
            .unwrap_or_else(|_| DEFAULT_FRONTEND.to_string());

        Self {
            allowed_origins: parse_origins(&raw),
        }
    }
}

/// Splits a comma list into origins as browsers send them: no trailing slash,
/// no blanks, no duplicates.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let mut origins: Vec<String> = Vec::new();

    for origin in raw
        .split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
    {
        if !origins.iter().any(|o| o == origin) {
            origins.push(origin.to_string());
        }
    }

    origins
}
