use crate::types::ratings::RatingSet;
use crate::types::score::{CineScore, NormalizedScores, Reliability, ScoreOptions, Source};

#[derive(Debug, Clone, Copy)]
struct WeightProfile {
    imdb: f64,
    tomatometer: f64,
    metascore: f64,
}

const CRITIC_FOCUSED: WeightProfile = WeightProfile {
    imdb: 0.40,
    tomatometer: 0.35,
    metascore: 0.25,
};

const AUDIENCE_FOCUSED: WeightProfile = WeightProfile {
    imdb: 0.60,
    tomatometer: 0.20,
    metascore: 0.20,
};

impl WeightProfile {
    fn weight(&self, source: Source) -> f64 {
        match source {
            Source::Imdb => self.imdb,
            Source::RottenTomatoes => self.tomatometer,
            Source::Metacritic => self.metascore,
        }
    }
}

/// Combines the available per-source ratings into a single consensus
/// score on a 0-10 scale, with provenance and a reliability tier.
///
/// The weighted average is taken only over the sources that actually
/// contributed, so a missing source never penalizes the score. With no
/// usable source at all the score is 0 and reliability is low. This
/// function never fails.
pub fn compute_score(ratings: &RatingSet, options: ScoreOptions) -> CineScore {
    let weights = if options.audience_focused {
        AUDIENCE_FOCUSED
    } else {
        CRITIC_FOCUSED
    };

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut used_sources = Vec::new();
    let mut normalized_scores = NormalizedScores::default();

    for source in Source::all() {
        let Some(value) = normalized_value(ratings, *source) else {
            continue;
        };
        let weight = weights.weight(*source);
        weighted_sum += value * weight;
        total_weight += weight;
        used_sources.push(*source);
        normalized_scores.set(*source, value);
    }

    let score = if total_weight > 0.0 {
        round_one_decimal(weighted_sum / total_weight)
    } else {
        0.0
    };

    CineScore {
        score,
        normalized_scores,
        reliability: Reliability::from_source_count(used_sources.len()),
        used_sources,
        audience_focused: options.audience_focused,
    }
}

/// Rescales one source to the common 0-10 scale, or `None` when the
/// source is absent or its numeric field does not parse.
fn normalized_value(ratings: &RatingSet, source: Source) -> Option<f64> {
    match source {
        // Already on a 0-10 scale.
        Source::Imdb => parse_decimal(ratings.imdb.as_ref()?.rating.as_deref()?),
        Source::RottenTomatoes => {
            parse_decimal(ratings.rotten_tomatoes.as_ref()?.tomatometer.as_deref()?)
                .map(|value| value / 10.0)
        }
        Source::Metacritic => parse_decimal(ratings.metacritic.as_ref()?.metascore.as_deref()?)
            .map(|value| value / 10.0),
    }
}

// Malformed numeric strings mean the source is skipped, not that the
// computation fails. Non-finite parses are rejected for the same
// reason: a stray "NaN" must not corrupt the weighted sum.
fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("/100").unwrap_or(trimmed);
    trimmed.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// Round half away from zero at one decimal place.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
