use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::tmdb::{round_rating, Genre, MovieDetails, MovieSummary, PaginatedResponse};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCard {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub poster_url: Option<String>,
    pub rating: f64,
    pub release_date: String,
    pub genre_ids: Vec<i64>,
}

impl MovieCard {
    pub fn new(movie: MovieSummary, poster_url: Option<String>) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            overview: movie.overview,
            poster_url,
            rating: round_rating(movie.vote_average),
            release_date: movie.release_date.unwrap_or_default(),
            genre_ids: movie.genre_ids,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    pub page: i64,
    pub total_pages: i64,
    pub total_results: i64,
    pub results: Vec<MovieCard>,
}

impl MoviePage {
    /// Cards for one TMDB page, optionally narrowed to a genre. The
    /// pagination counters stay TMDB's so clients can keep paging.
    pub fn from_tmdb<F>(page: PaginatedResponse<MovieSummary>, genre: Option<i64>, poster: F) -> Self
    where
        F: Fn(Option<&str>) -> Option<String>,
    {
        let results = page
            .results
            .into_iter()
            .filter(|m| genre.map_or(true, |g| m.genre_ids.contains(&g)))
            .map(|m| {
                let poster_url = poster(m.poster_path.as_deref());
                MovieCard::new(m, poster_url)
            })
            .collect();

        Self {
            page: page.page,
            total_pages: page.total_pages,
            total_results: page.total_results,
            results,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub tagline: Option<String>,
    pub poster_url: Option<String>,
    pub rating: f64,
    pub release_date: String,
    pub release_year: Option<i32>,
    pub runtime_minutes: Option<i64>,
    pub runtime_label: Option<String>,
    pub company: String,
    pub genre: String,
    pub genres: Vec<Genre>,
    pub trailer_url: Option<String>,
}

impl MovieDetail {
    pub fn new(details: MovieDetails, poster_url: Option<String>, trailer_url: Option<String>) -> Self {
        let release_date = details.release_date.unwrap_or_default();
        let company = details
            .production_companies
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        let genre = details
            .genres
            .first()
            .map(|g| g.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            id: details.id,
            title: details.title,
            overview: details.overview,
            tagline: details.tagline.filter(|t| !t.is_empty()),
            poster_url,
            rating: round_rating(details.vote_average),
            release_year: release_year(&release_date),
            release_date,
            runtime_minutes: details.runtime,
            runtime_label: details.runtime.and_then(runtime_label),
            company,
            genre,
            genres: details.genres,
            trailer_url,
        }
    }
}

fn release_year(date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

/// 148 -> "2h 28m". TMDB reports 0 for unknown runtimes.
fn runtime_label(minutes: i64) -> Option<String> {
    if minutes <= 0 {
        return None;
    }
    Some(format!("{}h {}m", minutes / 60, minutes % 60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb::models::ProductionCompany;

    fn summary(id: i64, genre_ids: Vec<i64>) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {}", id),
            original_title: String::new(),
            overview: String::new(),
            poster_path: Some(format!("/{}.jpg", id)),
            backdrop_path: None,
            release_date: None,
            vote_average: 6.66,
            vote_count: 0,
            popularity: 0.0,
            genre_ids,
            adult: false,
        }
    }

    #[test]
    fn test_runtime_label() {
        assert_eq!(runtime_label(148).as_deref(), Some("2h 28m"));
        assert_eq!(runtime_label(45).as_deref(), Some("0h 45m"));
        assert_eq!(runtime_label(0), None);
    }

    #[test]
    fn test_release_year() {
        assert_eq!(release_year("2010-07-15"), Some(2010));
        assert_eq!(release_year(""), None);
    }

    #[test]
    fn test_page_genre_filter_keeps_counters() {
        let page = PaginatedResponse {
            page: 2,
            results: vec![summary(1, vec![28, 12]), summary(2, vec![35]), summary(3, vec![12])],
            total_pages: 9,
            total_results: 170,
        };
        let filtered = MoviePage::from_tmdb(page, Some(12), |p| p.map(|p| format!("img{}", p)));
        let ids: Vec<i64> = filtered.results.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(filtered.page, 2);
        assert_eq!(filtered.total_pages, 9);
        assert_eq!(filtered.results[0].poster_url.as_deref(), Some("img/1.jpg"));
        assert_eq!(filtered.results[0].rating, 6.7);
    }

    #[test]
    fn test_detail_fallbacks() {
        let details = MovieDetails {
            id: 5,
            title: "Untitled".to_string(),
            overview: String::new(),
            tagline: Some(String::new()),
            poster_path: None,
            release_date: None,
            runtime: None,
            vote_average: 0.0,
            genres: vec![],
            production_companies: vec![],
        };
        let detail = MovieDetail::new(details, None, None);
        assert_eq!(detail.company, "Unknown");
        assert_eq!(detail.genre, "Unknown");
        assert_eq!(detail.tagline, None);
        assert_eq!(detail.release_year, None);
        assert_eq!(detail.runtime_label, None);
    }

    #[test]
    fn test_detail_first_company_and_genre() {
        let details = MovieDetails {
            id: 27205,
            title: "Inception".to_string(),
            overview: "Dreams".to_string(),
            tagline: Some("Your mind is the scene of the crime.".to_string()),
            poster_path: Some("/p.jpg".to_string()),
            release_date: Some("2010-07-15".to_string()),
            runtime: Some(148),
            vote_average: 8.369,
            genres: vec![
                Genre { id: 28, name: "Action".to_string() },
                Genre { id: 878, name: "Science Fiction".to_string() },
            ],
            production_companies: vec![ProductionCompany {
                id: 923,
                name: "Legendary Pictures".to_string(),
                logo_path: None,
            }],
        };
        let detail = MovieDetail::new(details, Some("poster".to_string()), None);
        assert_eq!(detail.company, "Legendary Pictures");
        assert_eq!(detail.genre, "Action");
        assert_eq!(detail.release_year, Some(2010));
        assert_eq!(detail.runtime_label.as_deref(), Some("2h 28m"));
        assert_eq!(detail.rating, 8.4);
    }
}
