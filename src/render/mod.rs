pub mod json;
pub mod text;

use crate::error::CineError;
use crate::prefs::ThemeMode;
use crate::types::movie::{Genre, MovieDetails, MovieSummary, Page};
use crate::types::ratings::RatingSet;
use crate::types::score::CineScore;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Everything the details command has to show: the metadata record,
/// plus ratings and the consensus score when they could be resolved.
#[derive(Debug, Serialize)]
pub struct DetailsView<'a> {
    pub movie: &'a MovieDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<&'a RatingSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cine_score: Option<&'a CineScore>,
}

pub fn render_details(
    view: &DetailsView<'_>,
    format: OutputFormat,
    theme: ThemeMode,
) -> Result<String, CineError> {
    match format {
        OutputFormat::Json => json::to_json(view).map_err(CineError::Json),
        OutputFormat::Text => Ok(text::details(view, theme)),
    }
}

pub fn render_listing(
    heading: &str,
    page: &Page<MovieSummary>,
    format: OutputFormat,
    theme: ThemeMode,
) -> Result<String, CineError> {
    match format {
        OutputFormat::Json => json::to_json(page).map_err(CineError::Json),
        OutputFormat::Text => Ok(text::listing(heading, page, theme)),
    }
}

pub fn render_score(
    score: &CineScore,
    format: OutputFormat,
    theme: ThemeMode,
) -> Result<String, CineError> {
    match format {
        OutputFormat::Json => json::to_json(score).map_err(CineError::Json),
        OutputFormat::Text => Ok(text::score_block(score, theme)),
    }
}

pub fn render_genres(
    genres: &[Genre],
    format: OutputFormat,
    theme: ThemeMode,
) -> Result<String, CineError> {
    match format {
        OutputFormat::Json => json::to_json(&genres).map_err(CineError::Json),
        OutputFormat::Text => Ok(text::genres(genres, theme)),
    }
}
