use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::compute_score;
    use crate::types::ratings::{ImdbRating, RatingSet};
    use crate::types::score::ScoreOptions;

    #[test]
    fn score_json_carries_contract_fields() {
        let set = RatingSet {
            imdb: Some(ImdbRating {
                rating: Some("7.5".to_string()),
                votes: None,
                url: None,
            }),
            rotten_tomatoes: None,
            metacritic: None,
        };
        let score = compute_score(&set, ScoreOptions::default());

        let rendered = to_json(&score).expect("score should serialize");
        assert!(rendered.contains("\"score\": 7.5"));
        assert!(rendered.contains("\"reliability\": \"low\""));
        assert!(rendered.contains("\"IMDB\""));
        assert!(!rendered.contains("tomatometer"));
    }
}
