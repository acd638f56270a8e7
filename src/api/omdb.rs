//! Ratings aggregator client (OMDB API surface).
//!
//! OMDB answers a title lookup with the IMDB figures inline and the
//! remaining sources in a named `Ratings` array. This module turns that
//! payload into the `RatingSet` shape the score aggregator consumes.

use crate::api::{build_http_client, get_json, ApiError};
use crate::types::config::{HttpConfig, OmdbConfig};
use crate::types::ratings::{ImdbRating, MetacriticRating, RatingSet, RottenTomatoesRating};
use serde::Deserialize;

const ROTTEN_TOMATOES_SOURCE: &str = "Rotten Tomatoes";
const METACRITIC_SOURCE: &str = "Metacritic";

// OMDB uses the string "N/A" instead of omitting unavailable fields.
const UNAVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Deserialize)]
struct OmdbTitle {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes", default)]
    imdb_votes: Option<String>,
    #[serde(rename = "Ratings", default)]
    ratings: Vec<OmdbRatingEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct OmdbRatingEntry {
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Value")]
    value: String,
}

pub struct OmdbClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(omdb: &OmdbConfig, http: &HttpConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http_client: build_http_client(http)?,
            base_url: omdb.base_url.trim_end_matches('/').to_string(),
            api_key: omdb.api_key.clone(),
        })
    }

    /// Looks the title up by its IMDB cross-reference id and extracts
    /// the per-source rating records.
    pub async fn fetch_ratings(&self, imdb_id: &str) -> Result<RatingSet, ApiError> {
        let title: OmdbTitle = get_json(
            &self.http_client,
            &self.base_url,
            &[
                ("apikey", self.api_key.clone()),
                ("i", imdb_id.to_string()),
                ("plot", "full".to_string()),
            ],
            imdb_id,
        )
        .await?;

        if title.response != "True" {
            let reason = title
                .error
                .unwrap_or_else(|| format!("no ratings data for {imdb_id}"));
            return Err(ApiError::NotFound(reason));
        }

        let set = extract_ratings(imdb_id, &title);
        tracing::info!(
            imdb_id = %imdb_id,
            title = %title.title,
            has_imdb = set.imdb.is_some(),
            has_rotten_tomatoes = set.rotten_tomatoes.is_some(),
            has_metacritic = set.metacritic.is_some(),
            "retrieved ratings"
        );
        Ok(set)
    }
}

fn extract_ratings(imdb_id: &str, title: &OmdbTitle) -> RatingSet {
    let mut set = RatingSet::default();

    if let Some(rating) = present(title.imdb_rating.as_deref()) {
        set.imdb = Some(ImdbRating {
            rating: Some(rating.to_string()),
            votes: present(title.imdb_votes.as_deref()).map(str::to_string),
            url: Some(format!("https://www.imdb.com/title/{imdb_id}")),
        });
    }

    if let Some(entry) = find_source(&title.ratings, ROTTEN_TOMATOES_SOURCE) {
        set.rotten_tomatoes = Some(RottenTomatoesRating {
            tomatometer: Some(entry.value.trim_end_matches('%').to_string()),
            url: Some(format!(
                "https://www.rottentomatoes.com/m/{}",
                slug(&title.title, '_')
            )),
        });
    }

    if let Some(entry) = find_source(&title.ratings, METACRITIC_SOURCE) {
        set.metacritic = Some(MetacriticRating {
            metascore: Some(entry.value.trim_end_matches("/100").to_string()),
            url: Some(format!(
                "https://www.metacritic.com/movie/{}",
                slug(&title.title, '-')
            )),
        });
    }

    set
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != UNAVAILABLE)
}

fn find_source<'a>(entries: &'a [OmdbRatingEntry], source: &str) -> Option<&'a OmdbRatingEntry> {
    entries.iter().find(|entry| entry.source == source)
}

// Lowercase the title and collapse every non-alphanumeric run into a
// single separator, the way the source sites build their paths.
fn slug(title: &str, separator: char) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_separator = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push(separator);
            }
            pending_separator = false;
            out.push(ch);
        } else {
            pending_separator = true;
        }
    }
    out
}
