use crate::tmdb::models::VideoList;
use crate::tmdb::{MovieDetails, TmdbClient, Video};

impl TmdbClient {
    /// Get movie details
    ///
    /// GET /movie/{movie_id}
    pub async fn get_movie(&self, movie_id: i64) -> crate::tmdb::Result<MovieDetails> {
        self.get_json(&format!("/movie/{}", movie_id), &[]).await
    }

    /// Videos attached to a movie (trailers, teasers, clips, ...).
    ///
    /// GET /movie/{movie_id}/videos
    pub async fn get_movie_videos(&self, movie_id: i64) -> crate::tmdb::Result<Vec<Video>> {
        let list: VideoList = self
            .get_json(&format!("/movie/{}/videos", movie_id), &[])
            .await?;
        Ok(list.results)
    }
}
