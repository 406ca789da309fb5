use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::recommend::Recommender;
use crate::tmdb::TmdbClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tmdb: Arc<TmdbClient>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(config: Config, tmdb: Arc<TmdbClient>, recommender: Arc<Recommender>) -> Self {
        Self {
            config: Arc::new(config),
            tmdb,
            recommender,
        }
    }

    /// Build both API clients once and wire them into the recommender.
    pub fn from_config(config: Config, http: reqwest::Client) -> Self {
        let tmdb = Arc::new(TmdbClient::new(http.clone(), &config.tmdb));
        let gemini = Arc::new(GeminiClient::new(http, &config.gemini));
        let recommender = Arc::new(Recommender::new(
            gemini,
            tmdb.clone(),
            config.recommendations.call_timeout(),
        ));
        Self::new(config, tmdb, recommender)
    }
}

pub fn build_router(state: AppState) -> Router {
    let recommendations = post(crate::api::recommendations)
        .fallback(crate::api::recommendations_method_not_allowed);

    let api_routes = Router::new()
        .route("/api/recommendations", recommendations.clone())
        .route("/api/recommendations/", recommendations)
        .route("/api/movies/popular", get(crate::api::popular_movies))
        .route("/api/movies/upcoming", get(crate::api::upcoming_movies))
        .route("/api/genres", get(crate::api::movie_genres))
        .route("/api/movie/:id", get(crate::api::movie_detail));

    let mut router = Router::new()
        .route("/robots.txt", get(robots_txt_handler))
        .merge(api_routes)
        .fallback(fallback_handler);

    if let Some(ref appdir) = state.config.appdir {
        router = router.fallback_service(ServeDir::new(appdir));
    }

    router
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn robots_txt_handler() -> &'static str {
    "User-agent: *\nDisallow: /\n"
}

async fn fallback_handler() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
