#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Gemini API key is not configured")]
    MissingApiKey,
    #[error("Gemini request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Gemini API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },
    #[error("Failed to decode Gemini response at '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Gemini returned no text")]
    EmptyResponse,
}
