use reqwest::{Client, StatusCode};

use crate::config::TmdbConfig;
use crate::tmdb::TmdbError;

/// Poster width used for list and recommendation cards.
pub const POSTER_SIZE: &str = "w500";
/// Full resolution, used on the movie detail page.
pub const ORIGINAL_SIZE: &str = "original";

pub struct TmdbClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    image_base_url: String,
    pub(crate) lang: String,
}

impl TmdbClient {
    pub fn new(client: Client, config: &TmdbConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.trim_end_matches('/').to_string(),
            lang: config.language.clone(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub(crate) fn api_key(&self) -> crate::tmdb::Result<&str> {
        self.api_key.as_deref().ok_or(TmdbError::MissingApiKey)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Absolute image URL for a relative TMDB image path such as `/abc.jpg`.
    pub fn image_url(&self, size: &str, path: Option<&str>) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;
        let sep = if path.starts_with('/') { "" } else { "/" };
        Some(format!("{}/{}{}{}", self.image_base_url, size, sep, path))
    }

    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> crate::tmdb::Result<T> {
        let api_key = self.api_key()?;
        let response = self
            .client()
            .get(self.url(path))
            .query(&[("api_key", api_key), ("language", self.lang.as_str())])
            .query(params)
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::tmdb::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        decode(status, &body)
    }
}

/// Turn a TMDB status and body into a value or an error.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> crate::tmdb::Result<T> {
    if !status.is_success() {
        return Err(TmdbError::Api {
            status_code: status.as_u16(),
            message: status_message(body).unwrap_or_else(|| body.to_string()),
        });
    }
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| TmdbError::Json {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

// TMDB error bodies look like {"status_code":7,"status_message":"Invalid API key"}.
fn status_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("status_message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
