//! Movie-metadata provider client (TMDB v3 API surface).

use crate::api::{build_http_client, get_json, ApiError};
use crate::types::config::{HttpConfig, TmdbConfig};
use crate::types::movie::{Genre, GenreList, MovieDetails, MovieSummary, Page};
use chrono::Utc;

/// Listings below this many votes are too thinly rated to rank.
const TOP_RATED_MIN_VOTES: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendWindow {
    Day,
    Week,
}

impl TrendWindow {
    fn as_path_segment(&self) -> &'static str {
        match self {
            TrendWindow::Day => "day",
            TrendWindow::Week => "week",
        }
    }
}

pub struct TmdbClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(tmdb: &TmdbConfig, http: &HttpConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http_client: build_http_client(http)?,
            base_url: tmdb.base_url.trim_end_matches('/').to_string(),
            api_key: tmdb.api_key.clone(),
        })
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut query = vec![("api_key", self.api_key.clone())];
        query.extend(params);
        get_json(&self.http_client, &url, &query, path).await
    }

    pub async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Page<MovieSummary>, ApiError> {
        let result: Page<MovieSummary> = self
            .get(
                "/search/movie",
                vec![
                    ("query", query.to_string()),
                    ("page", page.to_string()),
                    ("include_adult", "false".to_string()),
                ],
            )
            .await?;
        tracing::info!(query = %query, hits = result.total_results, "search complete");
        Ok(result)
    }

    pub async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails, ApiError> {
        let details: MovieDetails = self.get(&format!("/movie/{movie_id}"), Vec::new()).await?;
        tracing::info!(
            movie_id,
            title = %details.title,
            imdb_id = details.imdb_id.as_deref().unwrap_or("none"),
            "retrieved movie details"
        );
        Ok(details)
    }

    pub async fn trending(
        &self,
        window: TrendWindow,
        page: u32,
    ) -> Result<Page<MovieSummary>, ApiError> {
        self.get(
            &format!("/trending/movie/{}", window.as_path_segment()),
            vec![("page", page.to_string())],
        )
        .await
    }

    pub async fn top_rated(
        &self,
        genre: Option<u32>,
        page: u32,
    ) -> Result<Page<MovieSummary>, ApiError> {
        let mut params = vec![
            ("sort_by", "vote_average.desc".to_string()),
            ("vote_count.gte", TOP_RATED_MIN_VOTES.to_string()),
            ("page", page.to_string()),
        ];
        if let Some(genre_id) = genre {
            params.push(("with_genres", genre_id.to_string()));
        }
        self.get("/discover/movie", params).await
    }

    pub async fn new_releases(&self, page: u32) -> Result<Page<MovieSummary>, ApiError> {
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        self.get(
            "/discover/movie",
            vec![
                ("sort_by", "primary_release_date.desc".to_string()),
                ("primary_release_date.lte", today),
                ("page", page.to_string()),
            ],
        )
        .await
    }

    pub async fn genres(&self) -> Result<Vec<Genre>, ApiError> {
        let list: GenreList = self.get("/genre/movie/list", Vec::new()).await?;
        Ok(list.genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_and_normalizes_base_url() {
        let tmdb = TmdbConfig {
            api_key: "key".to_string(),
            base_url: "https://api.themoviedb.org/3/".to_string(),
        };
        let client =
            TmdbClient::new(&tmdb, &HttpConfig::default()).expect("client should build");
        assert_eq!(client.base_url, "https://api.themoviedb.org/3");
    }

    #[test]
    fn trend_window_path_segments() {
        assert_eq!(TrendWindow::Day.as_path_segment(), "day");
        assert_eq!(TrendWindow::Week.as_path_segment(), "week");
    }
}
