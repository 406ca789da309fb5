mod client;
mod error;
mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use types::{Content, GenerateContentRequest, GenerateContentResponse, Part};

pub type Result<T> = std::result::Result<T, GeminiError>;
