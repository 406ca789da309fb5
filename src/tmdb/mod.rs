mod client;
mod error;
mod lists;
mod movie;
mod search;
pub mod models;

pub use client::{TmdbClient, ORIGINAL_SIZE, POSTER_SIZE};
pub use error::TmdbError;
pub use models::{
    find_trailer, round_rating, Genre, MovieDetails, MovieSummary, PaginatedResponse, Video,
};

pub type Result<T> = std::result::Result<T, TmdbError>;
