use serde::{Deserialize, Serialize};

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Movie entry as returned by search, popular and upcoming listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub adult: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub page: i64,
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub total_results: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub name: String,
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
    #[serde(default)]
    pub official: bool,
}

impl Video {
    /// Exact, case-sensitive match on both fields.
    pub fn is_youtube_trailer(&self) -> bool {
        self.site == "YouTube" && self.video_type == "Trailer"
    }

    pub fn watch_url(&self) -> String {
        format!("{}{}", YOUTUBE_WATCH_URL, self.key)
    }
}

/// First YouTube video of type "Trailer", in listing order.
pub fn find_trailer(videos: &[Video]) -> Option<&Video> {
    videos.iter().find(|v| v.is_youtube_trailer())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct GenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<i64>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
}

/// Ratings are shown with one decimal.
pub fn round_rating(vote_average: f64) -> f64 {
    if !vote_average.is_finite() {
        return 0.0;
    }
    (vote_average.clamp(0.0, 10.0) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(site: &str, video_type: &str, key: &str) -> Video {
        Video {
            name: format!("{} {}", site, video_type),
            key: key.to_string(),
            site: site.to_string(),
            video_type: video_type.to_string(),
            official: true,
        }
    }

    #[test]
    fn test_find_trailer_skips_teasers_and_other_sites() {
        let videos = vec![
            video("YouTube", "Teaser", "teaser"),
            video("Vimeo", "Trailer", "vimeo"),
            video("YouTube", "trailer", "lowercase"),
            video("YouTube", "Trailer", "real"),
            video("YouTube", "Trailer", "second"),
        ];
        let trailer = find_trailer(&videos).unwrap();
        assert_eq!(trailer.key, "real");
        assert_eq!(trailer.watch_url(), "https://www.youtube.com/watch?v=real");
    }

    #[test]
    fn test_find_trailer_none() {
        let videos = vec![video("YouTube", "Clip", "clip")];
        assert!(find_trailer(&videos).is_none());
        assert!(find_trailer(&[]).is_none());
    }

    #[test]
    fn test_round_rating() {
        assert_eq!(round_rating(8.369), 8.4);
        assert_eq!(round_rating(7.0), 7.0);
        assert_eq!(round_rating(f64::NAN), 0.0);
        assert_eq!(round_rating(12.0), 10.0);
    }

    #[test]
    fn test_parse_search_result_with_missing_fields() {
        let json = r#"{"page":1,"results":[{"id":27205,"title":"Inception","poster_path":null,"vote_average":8.369}],"total_pages":1,"total_results":1}"#;
        let page: PaginatedResponse<MovieSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Inception");
        assert!(page.results[0].poster_path.is_none());
        assert!(page.results[0].release_date.is_none());
        assert!(page.results[0].genre_ids.is_empty());
    }
}
