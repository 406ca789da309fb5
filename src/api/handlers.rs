use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use super::error::ApiError;
use super::types::*;
use crate::recommend::{EnrichedMovie, RecommendError};
use crate::server::AppState;
use crate::tmdb::{find_trailer, Genre, ORIGINAL_SIZE, POSTER_SIZE};
use crate::util::QueryParams;

pub async fn recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<Vec<EnrichedMovie>>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Rejected recommendation body: {}", rejection);
            return Err(RecommendError::InvalidInput.into());
        }
    };
    let prompt = request.prompt.unwrap_or_default();

    let movies = state.recommender.recommend(&prompt).await?;
    Ok(Json(movies))
}

pub async fn recommendations_method_not_allowed(method: Method) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        format!("Method {} Not Allowed", method),
    )
        .into_response()
}

pub async fn popular_movies(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<MoviePage>, ApiError> {
    let page = state.tmdb.popular_movies(params.page()).await?;
    Ok(Json(MoviePage::from_tmdb(page, None, |p| {
        state.tmdb.image_url(POSTER_SIZE, p)
    })))
}

pub async fn upcoming_movies(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<MoviePage>, ApiError> {
    let genre = params.parse::<i64>("genre");
    let page = state.tmdb.upcoming_movies(params.page()).await?;
    Ok(Json(MoviePage::from_tmdb(page, genre, |p| {
        state.tmdb.image_url(POSTER_SIZE, p)
    })))
}

pub async fn movie_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, ApiError> {
    let genres = state.tmdb.movie_genres().await?;
    Ok(Json(genres))
}

pub async fn movie_detail(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> Result<Json<MovieDetail>, ApiError> {
    let (details, videos) = tokio::try_join!(
        state.tmdb.get_movie(movie_id),
        state.tmdb.get_movie_videos(movie_id),
    )?;

    let poster_url = state
        .tmdb
        .image_url(ORIGINAL_SIZE, details.poster_path.as_deref());
    let trailer_url = find_trailer(&videos).map(|v| v.watch_url());

    Ok(Json(MovieDetail::new(details, poster_url, trailer_url)))
}
