mod api;
mod cli;
mod config;
mod error;
mod prefs;
mod render;
mod score;
mod types;

use crate::api::{omdb::OmdbClient, tmdb::TmdbClient, ApiError};
use crate::error::CineError;
use crate::prefs::Preferences;
use crate::render::{DetailsView, OutputFormat};
use crate::types::config::CineConfig;
use crate::types::ratings::RatingSet;
use crate::types::score::ScoreOptions;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NO_RATINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        "cinescore=error"
    } else {
        match verbose {
            0 => "cinescore=warn",
            1 => "cinescore=info",
            _ => "cinescore=debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Text => OutputFormat::Text,
        cli::ReportFormat::Json => OutputFormat::Json,
    }
}

fn score_options(focus: Option<&cli::Focus>, prefs: &Preferences) -> ScoreOptions {
    let audience_focused = match focus {
        Some(cli::Focus::Audience) => true,
        Some(cli::Focus::Critics) => false,
        None => prefs.audience_focused,
    };
    ScoreOptions { audience_focused }
}

fn load_config() -> Result<CineConfig, CineError> {
    config::load_config(Path::new("."))
}

/// Ratings are best-effort: any failure to resolve them leaves the
/// metadata usable and is reported as a warning, never as a failure.
async fn resolve_ratings(
    config: &CineConfig,
    imdb_id: Option<&str>,
) -> Result<Option<RatingSet>, CineError> {
    let Some(imdb_id) = imdb_id else {
        tracing::warn!("movie has no IMDB cross-reference; skipping ratings");
        return Ok(None);
    };
    if !config.has_omdb_key() {
        tracing::warn!("no OMDB API key configured; skipping ratings");
        return Ok(None);
    }
    let client = OmdbClient::new(&config.omdb, &config.http)?;
    match client.fetch_ratings(imdb_id).await {
        Ok(set) => Ok(Some(set)),
        Err(ApiError::NotFound(reason)) => {
            tracing::warn!(imdb_id = %imdb_id, reason = %reason, "no ratings data available");
            Ok(None)
        }
        Err(e) => {
            tracing::warn!(imdb_id = %imdb_id, error = %e, "ratings lookup failed");
            Ok(None)
        }
    }
}

async fn run() -> Result<i32, CineError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let state_path = prefs::default_state_path();
    let preferences = prefs::load(state_path.as_deref());

    match cli.command {
        cli::Commands::Search(cmd) => {
            let config = load_config()?;
            config.require_tmdb_key()?;
            let client = TmdbClient::new(&config.tmdb, &config.http)?;
            let page = client.search_movies(&cmd.query, cmd.page).await?;
            let heading = format!("Search results for \"{}\"", cmd.query);
            let rendered = render::render_listing(
                &heading,
                &page,
                output_format(&cmd.format),
                preferences.theme,
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Details(cmd) => {
            let config = load_config()?;
            config.require_tmdb_key()?;
            let client = TmdbClient::new(&config.tmdb, &config.http)?;
            let movie = client.movie_details(cmd.movie_id).await?;

            let ratings = resolve_ratings(&config, movie.imdb_id.as_deref()).await?;
            let cine_score = ratings
                .as_ref()
                .map(|set| score::compute_score(set, score_options(cmd.focus.as_ref(), &preferences)));

            let view = DetailsView {
                movie: &movie,
                ratings: ratings.as_ref(),
                cine_score: cine_score.as_ref(),
            };
            let rendered =
                render::render_details(&view, output_format(&cmd.format), preferences.theme)?;
            println!("{rendered}");

            if ratings.is_none() {
                eprintln!("warning: ratings unavailable for movie {}", cmd.movie_id);
                Ok(exit_code::NO_RATINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Trending(cmd) => {
            let config = load_config()?;
            config.require_tmdb_key()?;
            let client = TmdbClient::new(&config.tmdb, &config.http)?;
            let window = match cmd.window {
                cli::Window::Day => api::tmdb::TrendWindow::Day,
                cli::Window::Week => api::tmdb::TrendWindow::Week,
            };
            let page = client.trending(window, cmd.page).await?;
            let rendered = render::render_listing(
                "Trending movies",
                &page,
                output_format(&cmd.format),
                preferences.theme,
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::TopRated(cmd) => {
            let config = load_config()?;
            config.require_tmdb_key()?;
            let client = TmdbClient::new(&config.tmdb, &config.http)?;
            let page = client.top_rated(cmd.genre, cmd.page).await?;
            let rendered = render::render_listing(
                "Top rated movies",
                &page,
                output_format(&cmd.format),
                preferences.theme,
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::NewReleases(cmd) => {
            let config = load_config()?;
            config.require_tmdb_key()?;
            let client = TmdbClient::new(&config.tmdb, &config.http)?;
            let page = client.new_releases(cmd.page).await?;
            let rendered = render::render_listing(
                "New releases",
                &page,
                output_format(&cmd.format),
                preferences.theme,
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Genres(cmd) => {
            let config = load_config()?;
            config.require_tmdb_key()?;
            let client = TmdbClient::new(&config.tmdb, &config.http)?;
            let genres = client.genres().await?;
            let rendered = render::render_genres(
                &genres,
                output_format(&cmd.format),
                preferences.theme,
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            if !cmd.ratings.exists() {
                return Err(CineError::RatingsFileNotFound(
                    cmd.ratings.display().to_string(),
                ));
            }
            let content = std::fs::read_to_string(&cmd.ratings)?;
            let set: RatingSet = serde_json::from_str(&content)?;

            let result =
                score::compute_score(&set, score_options(cmd.focus.as_ref(), &preferences));
            let rendered =
                render::render_score(&result, output_format(&cmd.format), preferences.theme)?;
            println!("{rendered}");

            if result.used_sources.is_empty() {
                eprintln!("warning: no usable rating sources in document");
                Ok(exit_code::NO_RATINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Prefs(cmd) => {
            let mut updated = preferences;
            if let Some(theme) = cmd.theme {
                updated.theme = match theme {
                    cli::Theme::Light => prefs::ThemeMode::Light,
                    cli::Theme::Dark => prefs::ThemeMode::Dark,
                };
            }
            if let Some(focus) = cmd.focus {
                updated.audience_focused = matches!(focus, cli::Focus::Audience);
            }
            if updated != preferences {
                prefs::save(state_path.as_deref(), &updated)?;
            }
            println!("theme: {}", updated.theme);
            println!(
                "default focus: {}",
                if updated.audience_focused {
                    "audience"
                } else {
                    "critics"
                }
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
