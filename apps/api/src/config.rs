use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_API_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` disables the completion service; responses then use default copy.
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub groq_model: String,
    pub llm_timeout: Duration,
    pub data_dir: PathBuf,
    pub min_entry_chars: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: std::env::var("GROQ_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            groq_api_url: env_or("GROQ_API_URL", DEFAULT_API_URL),
            groq_model: env_or("GROQ_MODEL", DEFAULT_MODEL),
            llm_timeout: Duration::from_secs(
                env_or("LLM_TIMEOUT_SECS", "30")
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            data_dir: PathBuf::from(env_or("JOURNAL_DATA_DIR", "data")),
            min_entry_chars: env_or("MIN_ENTRY_CHARS", "50")
                .parse::<usize>()
                .context("MIN_ENTRY_CHARS must be a non-negative integer")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Defaults without touching the process environment.
    pub fn for_tests(data_dir: PathBuf) -> Self {
        Config {
            groq_api_key: None,
            groq_api_url: DEFAULT_API_URL.to_string(),
            groq_model: DEFAULT_MODEL.to_string(),
            llm_timeout: Duration::from_secs(1),
            data_dir,
            min_entry_chars: 50,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
