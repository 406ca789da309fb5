use crate::gemini::GeminiError;
use crate::tmdb::TmdbError;

#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("Prompt is required")]
    InvalidInput,
    #[error("{0} API key is not configured")]
    MissingConfiguration(&'static str),
    #[error("{0}")]
    Upstream(String),
}

impl From<TmdbError> for RecommendError {
    fn from(e: TmdbError) -> Self {
        match e {
            TmdbError::MissingApiKey => RecommendError::MissingConfiguration("TMDB"),
            other => RecommendError::Upstream(other.to_string()),
        }
    }
}

impl From<GeminiError> for RecommendError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::MissingApiKey => RecommendError::MissingConfiguration("Gemini"),
            other => RecommendError::Upstream(other.to_string()),
        }
    }
}
