use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedMovie {
    pub title: String,
    pub overview: String,
    pub poster_url: Option<String>,
    pub rating: f64,
    pub release_date: String,
    pub trailer_url: Option<String>,
}
