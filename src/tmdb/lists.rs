use crate::tmdb::models::GenreList;
use crate::tmdb::{Genre, MovieSummary, PaginatedResponse, TmdbClient};

impl TmdbClient {
    /// GET /movie/popular
    pub async fn popular_movies(
        &self,
        page: u32,
    ) -> crate::tmdb::Result<PaginatedResponse<MovieSummary>> {
        let page = page.to_string();
        self.get_json("/movie/popular", &[("page", page.as_str())])
            .await
    }

    /// GET /movie/upcoming
    pub async fn upcoming_movies(
        &self,
        page: u32,
    ) -> crate::tmdb::Result<PaginatedResponse<MovieSummary>> {
        let page = page.to_string();
        self.get_json("/movie/upcoming", &[("page", page.as_str())])
            .await
    }

    /// GET /genre/movie/list
    pub async fn movie_genres(&self) -> crate::tmdb::Result<Vec<Genre>> {
        let list: GenreList = self.get_json("/genre/movie/list", &[]).await?;
        Ok(list.genres)
    }
}
