use serde::Serialize;

/// Rating sources, in the fixed contribution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Source {
    #[serde(rename = "IMDB")]
    Imdb,
    #[serde(rename = "Rotten Tomatoes")]
    RottenTomatoes,
    #[serde(rename = "Metacritic")]
    Metacritic,
}

impl Source {
    /// All sources, in the order they contribute to the score.
    pub fn all() -> &'static [Source] {
        &[Source::Imdb, Source::RottenTomatoes, Source::Metacritic]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Source::Imdb => "IMDB",
            Source::RottenTomatoes => "Rotten Tomatoes",
            Source::Metacritic => "Metacritic",
        }
    }

    /// Internal key used for the normalized-score mapping.
    pub fn key(&self) -> &'static str {
        match self {
            Source::Imdb => "imdb",
            Source::RottenTomatoes => "tomatometer",
            Source::Metacritic => "metascore",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreOptions {
    pub audience_focused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reliability {
    High,
    Medium,
    Low,
}

impl Reliability {
    /// Derived purely from the number of contributing sources.
    pub fn from_source_count(count: usize) -> Self {
        match count {
            n if n >= 3 => Reliability::High,
            2 => Reliability::Medium,
            _ => Reliability::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Reliability::High => "high",
            Reliability::Medium => "medium",
            Reliability::Low => "low",
        }
    }
}

impl std::fmt::Display for Reliability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-source values after rescaling to the common 0-10 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NormalizedScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tomatometer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metascore: Option<f64>,
}

impl NormalizedScores {
    pub fn set(&mut self, source: Source, value: f64) {
        match source {
            Source::Imdb => self.imdb = Some(value),
            Source::RottenTomatoes => self.tomatometer = Some(value),
            Source::Metacritic => self.metascore = Some(value),
        }
    }

    pub fn get(&self, source: Source) -> Option<f64> {
        match source {
            Source::Imdb => self.imdb,
            Source::RottenTomatoes => self.tomatometer,
            Source::Metacritic => self.metascore,
        }
    }

    pub fn count(&self) -> usize {
        [self.imdb, self.tomatometer, self.metascore]
            .iter()
            .filter(|value| value.is_some())
            .count()
    }
}

/// Derived consensus score. Recomputed on every call; carries no
/// identity or lifecycle beyond the single computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CineScore {
    pub score: f64,
    pub normalized_scores: NormalizedScores,
    pub used_sources: Vec<Source>,
    pub audience_focused: bool,
    pub reliability: Reliability,
}
