use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One page of results from the metadata provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page<T> {
    pub page: u32,
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

/// Listing entry as returned by search/trending/discover endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl MovieSummary {
    pub fn release_year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref())
    }
}

/// Full per-movie record, including the external cross-reference id
/// used to look ratings up.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
}

impl MovieDetails {
    pub fn release_year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref())
    }
}

// The provider sends dates as "YYYY-MM-DD", but unreleased titles may
// carry an empty string instead of omitting the field.
fn release_year(date: Option<&str>) -> Option<i32> {
    let date = date?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|parsed| parsed.format("%Y").to_string())
        .and_then(|year| year.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_page() {
        let page: Page<MovieSummary> = serde_json::from_str(
            r#"{
                "page": 1,
                "results": [
                    {
                        "id": 27205,
                        "title": "Inception",
                        "release_date": "2010-07-15",
                        "overview": "A thief who steals corporate secrets.",
                        "vote_average": 8.4,
                        "vote_count": 36000,
                        "poster_path": "/inception.jpg"
                    }
                ],
                "total_pages": 3,
                "total_results": 55
            }"#,
        )
        .expect("page should parse");

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Inception");
        assert_eq!(page.results[0].release_year(), Some(2010));
    }

    #[test]
    fn parses_details_with_cross_reference() {
        let details: MovieDetails = serde_json::from_str(
            r#"{
                "id": 27205,
                "title": "Inception",
                "imdb_id": "tt1375666",
                "release_date": "2010-07-15",
                "runtime": 148,
                "genres": [{ "id": 28, "name": "Action" }]
            }"#,
        )
        .expect("details should parse");

        assert_eq!(details.imdb_id.as_deref(), Some("tt1375666"));
        assert_eq!(details.runtime, Some(148));
        assert_eq!(details.genres[0].name, "Action");
    }

    #[test]
    fn empty_release_date_yields_no_year() {
        assert_eq!(release_year(Some("")), None);
        assert_eq!(release_year(None), None);
        assert_eq!(release_year(Some("not-a-date")), None);
    }
}
