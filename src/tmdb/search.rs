use crate::tmdb::{MovieSummary, PaginatedResponse, TmdbClient};

impl TmdbClient {
    /// Search movies by title.
    ///
    /// GET /search/movie
    pub async fn search_movie(
        &self,
        query: &str,
    ) -> crate::tmdb::Result<PaginatedResponse<MovieSummary>> {
        self.get_json(
            "/search/movie",
            &[("query", query), ("include_adult", "false")],
        )
        .await
    }

    /// Best match for a title, in TMDB's own relevance order.
    pub async fn first_match(&self, query: &str) -> crate::tmdb::Result<Option<MovieSummary>> {
        let page = self.search_movie(query).await?;
        Ok(page.results.into_iter().next())
    }
}
