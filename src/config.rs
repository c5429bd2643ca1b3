use dotenvy::dotenv;
use std::env;

pub const DEFAULT_SEARCH_URL: &str = "http://localhost:3001/";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the search backend. The `/search` endpoint is resolved
    /// against this, root-relative.
    pub search_url: String,
    pub listen_addr: String,
    /// Timeout applied to the backend call and to each page fetch.
    pub fetch_timeout_secs: u64,
    /// How many successfully fetched pages to return per query.
    pub max_contexts: usize,
}

impl Config {
    /// Build the configuration from the environment. Loads `.env` if present.
    pub fn from_env() -> Config {
        dotenv().ok();
        Config {
            search_url: get_env_or_default("SEARCH_URL", DEFAULT_SEARCH_URL),
            listen_addr: get_env_or_default("LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
            fetch_timeout_secs: parse_env_or("FETCH_TIMEOUT_SECS", 30),
            max_contexts: parse_env_or("MAX_CONTEXTS", 3),
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
