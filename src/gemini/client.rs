use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::config::GeminiConfig;
use crate::gemini::{GeminiError, GenerateContentRequest, GenerateContentResponse};

pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(client: Client, config: &GeminiConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send the parts as a single user turn and return the generated text.
    pub async fn generate_content<S: AsRef<str>>(&self, parts: &[S]) -> crate::gemini::Result<String> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;
        let request = GenerateContentRequest::from_parts(parts.iter().map(|p| AsRef::<str>::as_ref(p)));

        debug!(model = %self.model, "Calling Gemini generateContent");
        let response = self
            .client
            .post(self.url())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}

/// Turn a generateContent status and body into the generated text.
pub(crate) fn decode_response(status: StatusCode, body: &str) -> crate::gemini::Result<String> {
    if !status.is_success() {
        return Err(GeminiError::Api {
            status_code: status.as_u16(),
            message: error_message(body).unwrap_or_else(|| body.to_string()),
        });
    }

    let deserializer = &mut serde_json::Deserializer::from_str(body);
    let parsed: GenerateContentResponse = serde_path_to_error::deserialize(deserializer)
        .map_err(|e| GeminiError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })?;

    parsed.text().ok_or_else(|| {
        warn!(
            finish_reason = parsed.finish_reason().unwrap_or("none"),
            "Gemini returned no text"
        );
        GeminiError::EmptyResponse
    })
}

// Google API errors look like {"error":{"code":400,"message":"...","status":"INVALID_ARGUMENT"}}.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
