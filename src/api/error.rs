use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::types::ErrorBody;
use crate::recommend::RecommendError;
use crate::tmdb::TmdbError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
    BadGateway(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn into_message(self) -> String {
        match self {
            ApiError::BadRequest(m)
            | ApiError::NotFound(m)
            | ApiError::Internal(m)
            | ApiError::BadGateway(m) => m,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.into_message();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", message);
        }
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<RecommendError> for ApiError {
    fn from(e: RecommendError) -> Self {
        match e {
            RecommendError::InvalidInput => ApiError::BadRequest(e.to_string()),
            RecommendError::MissingConfiguration(_) => ApiError::Internal(e.to_string()),
            RecommendError::Upstream(msg) => ApiError::Internal(format!("API route error: {}", msg)),
        }
    }
}

impl From<TmdbError> for ApiError {
    fn from(e: TmdbError) -> Self {
        match e {
            TmdbError::MissingApiKey => ApiError::Internal(e.to_string()),
            ref err if err.is_not_found() => ApiError::NotFound("Movie not found".to_string()),
            other => ApiError::BadGateway(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_prefixed_once() {
        let err = ApiError::from(RecommendError::Upstream("TMDB API error (500): boom".to_string()));
        match err {
            ApiError::Internal(msg) => {
                assert_eq!(msg, "API route error: TMDB API error (500): boom");
                assert_eq!(msg.matches("API route error").count(), 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_tmdb_error_statuses() {
        let not_found = ApiError::from(TmdbError::Api {
            status_code: 404,
            message: "The resource you requested could not be found.".to_string(),
        });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let unavailable = ApiError::from(TmdbError::Api {
            status_code: 503,
            message: "down".to_string(),
        });
        assert_eq!(unavailable.status(), StatusCode::BAD_GATEWAY);

        assert_eq!(
            ApiError::from(TmdbError::MissingApiKey).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
