#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("TMDB API key is not configured")]
    MissingApiKey,
    #[error("TMDB request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("TMDB API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },
    #[error("Failed to decode TMDB response at '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl TmdbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TmdbError::Api { status_code: 404, .. })
    }
}
