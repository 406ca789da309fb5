use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use super::backend::{MovieCatalog, TextGenerator};
use super::titles::parse_candidate_titles;
use super::{EnrichedMovie, RecommendError};
use crate::tmdb::{find_trailer, round_rating};

pub const INSTRUCTION: &str = "You are a helpful assistant that recommends movies. \
     Respond with a list of four movie titles, separated by commas.";

fn describe(prompt: &str) -> String {
    format!(
        "Suggest movies based on the following description: {}; which is available in TMDB database.",
        prompt
    )
}

/// Prompt -> generated titles -> TMDB lookups -> enriched movies.
pub struct Recommender {
    generator: Arc<dyn TextGenerator>,
    catalog: Arc<dyn MovieCatalog>,
    call_timeout: Duration,
}

impl Recommender {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        catalog: Arc<dyn MovieCatalog>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            generator,
            catalog,
            call_timeout,
        }
    }

    pub async fn recommend(&self, prompt: &str) -> Result<Vec<EnrichedMovie>, RecommendError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(RecommendError::InvalidInput);
        }
        info!("Received prompt: {}", prompt);

        if !self.generator.is_configured() {
            return Err(RecommendError::MissingConfiguration("Gemini"));
        }
        let parts = [INSTRUCTION.to_string(), describe(prompt)];
        let text = with_deadline("Gemini", self.call_timeout, self.generator.generate(&parts)).await?;

        let titles = parse_candidate_titles(&text);
        info!(?titles, "Gemini suggested movies");
        if titles.is_empty() {
            return Ok(Vec::new());
        }

        if !self.catalog.is_configured() {
            return Err(RecommendError::MissingConfiguration("TMDB"));
        }

        // One task per title. The JoinSet aborts whatever is still running
        // if this future is dropped; results are slotted back by index so the
        // output keeps the order the titles were generated in.
        let mut lookups = JoinSet::new();
        for (index, title) in titles.iter().enumerate() {
            let catalog = Arc::clone(&self.catalog);
            let deadline = self.call_timeout;
            let title = title.clone();
            lookups.spawn(async move {
                (index, resolve_title(catalog.as_ref(), &title, deadline).await)
            });
        }

        let attempted = titles.len();
        let mut slots: Vec<Option<Result<Option<EnrichedMovie>, RecommendError>>> =
            (0..attempted).map(|_| None).collect();
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((index, result)) => slots[index] = Some(result),
                Err(e) => warn!("Lookup task aborted: {}", e),
            }
        }

        let mut movies = Vec::with_capacity(attempted);
        let mut failures = Vec::new();

        for (title, slot) in titles.iter().zip(slots) {
            match slot {
                Some(Ok(Some(movie))) => movies.push(movie),
                Some(Ok(None)) => debug!("No TMDB match for {:?}", title),
                Some(Err(e)) => {
                    warn!("Lookup for {:?} failed: {}", title, e);
                    failures.push(e);
                }
                None => failures.push(RecommendError::Upstream(format!(
                    "lookup for {} aborted",
                    title
                ))),
            }
        }

        if failures.len() == attempted {
            if let Some(first) = failures.into_iter().next() {
                return Err(first);
            }
        }

        info!(
            "Resolved {} of {} suggested titles",
            movies.len(),
            attempted
        );
        Ok(movies)
    }
}

async fn resolve_title(
    catalog: &dyn MovieCatalog,
    title: &str,
    deadline: Duration,
) -> Result<Option<EnrichedMovie>, RecommendError> {
    let Some(movie) = with_deadline("TMDB search", deadline, catalog.find_movie(title)).await? else {
        return Ok(None);
    };

    let videos = with_deadline("TMDB videos", deadline, catalog.videos(movie.id)).await?;
    let trailer_url = find_trailer(&videos).map(|v| v.watch_url());

    Ok(Some(EnrichedMovie {
        poster_url: catalog.poster_url(movie.poster_path.as_deref()),
        rating: round_rating(movie.vote_average),
        release_date: movie.release_date.unwrap_or_default(),
        title: movie.title,
        overview: movie.overview,
        trailer_url,
    }))
}

async fn with_deadline<T, E, F>(
    what: &str,
    deadline: Duration,
    call: F,
) -> Result<T, RecommendError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<RecommendError>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => Err(RecommendError::Upstream(format!(
            "{} request timed out after {:?}",
            what, deadline
        ))),
    }
}
