use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub appdir: Option<String>,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub recommendations: RecommendationsConfig,
    #[serde(skip)]
    pub debug_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    #[serde(alias = "apikey", rename = "apikey")]
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(alias = "baseurl", rename = "baseurl")]
    #[serde(default = "default_tmdb_base_url")]
    pub base_url: String,
    #[serde(alias = "imagebaseurl", rename = "imagebaseurl")]
    #[serde(default = "default_tmdb_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_tmdb_base_url(),
            image_base_url: default_tmdb_image_base_url(),
            language: default_language(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    #[serde(alias = "apikey", rename = "apikey")]
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(alias = "baseurl", rename = "baseurl")]
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendationsConfig {
    /// Deadline for every single outbound call, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for RecommendationsConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
        }
    }
}

impl RecommendationsConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.max(1))
    }
}

fn default_port() -> String {
    "3000".to_string()
}

fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-pro".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        Self::from_yaml(&content).map_err(|e| ConfigError::ParseError(path.to_string(), e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file is a valid, all-defaults config.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content)
    }

    /// Credentials from the environment win over the config file.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("TMDB_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.tmdb.api_key = Some(key);
        }
        if let Some(key) = lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.gemini.api_key = Some(key);
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}
