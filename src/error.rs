use crate::api::ApiError;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum CineError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("missing {0} API key; set it in cinescore.toml or the environment")]
    MissingApiKey(&'static str),

    #[error("ratings file not found: {0}")]
    RatingsFileNotFound(String),

    #[error("api error: {0}")]
    Api(#[from] ApiError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CineError>;
