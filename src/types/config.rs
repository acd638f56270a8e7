use crate::error::CineError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CineConfig {
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_tmdb_base_url")]
    pub base_url: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_tmdb_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_omdb_base_url")]
    pub base_url: String,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_omdb_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_omdb_base_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!(
        "cinescore/{} (+https://github.com/cinescore/cinescore)",
        env!("CARGO_PKG_VERSION")
    )
}

impl CineConfig {
    pub fn validate(&self) -> Result<(), CineError> {
        if self.http.timeout_secs == 0 {
            return Err(CineError::ConfigParse(
                "http.timeout_secs must be greater than 0".to_string(),
            ));
        }
        for (section, base_url) in [("tmdb", &self.tmdb.base_url), ("omdb", &self.omdb.base_url)] {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(CineError::ConfigParse(format!(
                    "{section}.base_url must be an http(s) URL (found {base_url})"
                )));
            }
        }
        Ok(())
    }

    pub fn require_tmdb_key(&self) -> Result<&str, CineError> {
        if self.tmdb.api_key.trim().is_empty() {
            return Err(CineError::MissingApiKey("TMDB"));
        }
        Ok(&self.tmdb.api_key)
    }

    pub fn has_omdb_key(&self) -> bool {
        !self.omdb.api_key.trim().is_empty()
    }
}
