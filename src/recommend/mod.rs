mod aggregator;
mod backend;
mod error;
mod titles;
mod types;

pub use aggregator::{Recommender, INSTRUCTION};
pub use backend::{MovieCatalog, TextGenerator};
pub use error::RecommendError;
pub use titles::parse_candidate_titles;
pub use types::EnrichedMovie;
