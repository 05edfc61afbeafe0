use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: String,
    pub port: u16,
    pub rust_log: String,
    /// Stage-1 shortlist cap (top N by cosine similarity).
    pub shortlist_size: usize,
    /// Stage-2 selection size (k nearest by Euclidean distance).
    pub top_k: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            dataset_path: require_env("DATASET_PATH")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            shortlist_size: std::env::var("SHORTLIST_SIZE")
                .unwrap_or_else(|_| "20".to_string())
                .parse::<usize>()
                .context("SHORTLIST_SIZE must be a positive integer")?,
            top_k: std::env::var("TOP_K")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<usize>()
                .context("TOP_K must be a positive integer")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
