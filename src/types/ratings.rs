use serde::{Deserialize, Serialize};

/// Per-source rating records as delivered by the ratings aggregator.
///
/// Any subset of sources may be missing, and a present source may still
/// lack its numeric field. Absence means "source unavailable", never a
/// zero score.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RatingSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb: Option<ImdbRating>,
    #[serde(
        rename = "rottenTomatoes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rotten_tomatoes: Option<RottenTomatoesRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metacritic: Option<MetacriticRating>,
}

impl RatingSet {
    pub fn is_empty(&self) -> bool {
        self.imdb.is_none() && self.rotten_tomatoes.is_none() && self.metacritic.is_none()
    }
}

/// IMDB record: rating is a decimal string on a 0-10 scale.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ImdbRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Rotten Tomatoes record: tomatometer is a 0-100 percentage string,
/// possibly with a trailing `%`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RottenTomatoesRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tomatometer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Metacritic record: metascore is a 0-100 string, possibly with a
/// trailing `/100`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MetacriticRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metascore: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
