pub mod api;
pub mod config;
pub mod gemini;
pub mod middleware;
pub mod recommend;
pub mod server;
pub mod tmdb;
pub mod util;

use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("Server error: {0}")]
    Server(String),
}

pub async fn run(config_path: Option<&str>, debug_logs: bool) -> Result<(), ServerError> {
    let mut config = match config_path {
        Some(path) => {
            info!("Using config file: {}", path);
            config::Config::from_file(path)?
        }
        None => config::Config::default(),
    };
    config.apply_env();
    config.debug_logs = debug_logs;

    if debug_logs {
        info!("Debug logging enabled");
    }
    if is_blank(&config.tmdb.api_key) {
        warn!("TMDB API key is not configured, movie endpoints will fail");
    }
    if is_blank(&config.gemini.api_key) {
        warn!("Gemini API key is not configured, recommendations will fail");
    }
    info!("Using Gemini model {}", config.gemini.model);

    // Per-call deadlines live in the recommender; this is the outer bound.
    let http = reqwest::Client::builder()
        .timeout(config.recommendations.call_timeout() + Duration::from_secs(5))
        .user_agent(concat!("likeamovie-rs/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let address = config.listen.address.as_deref().unwrap_or("[::]");
    let port = &config.listen.port;
    let addr: SocketAddr = format!("{}:{}", address, port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let tls = match (&config.listen.tlscert, &config.listen.tlskey) {
        (Some(cert), Some(key)) => Some((cert.clone(), key.clone())),
        _ => None,
    };

    let state = server::AppState::from_config(config, http);
    let app = server::build_router(state);

    if let Some((cert_path, key_path)) = tls {
        info!("Loading TLS certificate from {}", cert_path);
        info!("Loading TLS key from {}", key_path);

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(&cert_path, &key_path)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

        info!("Serving HTTPS on {}", addr);

        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    } else {
        info!("Serving HTTP on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    }

    Ok(())
}

fn is_blank(key: &Option<String>) -> bool {
    key.as_deref().map_or(true, |k| k.trim().is_empty())
}
