use async_trait::async_trait;

use crate::gemini::{GeminiClient, GeminiError};
use crate::tmdb::{MovieSummary, TmdbClient, TmdbError, Video, POSTER_SIZE};

/// Free-text generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn is_configured(&self) -> bool;
    async fn generate(&self, parts: &[String]) -> Result<String, GeminiError>;
}

/// Movie metadata backend.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    fn is_configured(&self) -> bool;
    /// First search hit for a title, if any.
    async fn find_movie(&self, title: &str) -> Result<Option<MovieSummary>, TmdbError>;
    async fn videos(&self, movie_id: i64) -> Result<Vec<Video>, TmdbError>;
    fn poster_url(&self, poster_path: Option<&str>) -> Option<String>;
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn is_configured(&self) -> bool {
        self.has_api_key()
    }

    async fn generate(&self, parts: &[String]) -> Result<String, GeminiError> {
        self.generate_content(parts).await
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    fn is_configured(&self) -> bool {
        self.has_api_key()
    }

    async fn find_movie(&self, title: &str) -> Result<Option<MovieSummary>, TmdbError> {
        self.first_match(title).await
    }

    async fn videos(&self, movie_id: i64) -> Result<Vec<Video>, TmdbError> {
        self.get_movie_videos(movie_id).await
    }

    fn poster_url(&self, poster_path: Option<&str>) -> Option<String> {
        self.image_url(POSTER_SIZE, poster_path)
    }
}
