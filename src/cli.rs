use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cinescore",
    version,
    about = "Movie catalogue CLI with multi-source consensus scoring"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalogue by title
    Search(SearchCommand),
    /// Show one movie with its ratings and CineScore
    Details(DetailsCommand),
    /// List currently trending movies
    Trending(TrendingCommand),
    /// List the highest-rated movies
    TopRated(TopRatedCommand),
    /// List the most recent releases
    NewReleases(NewReleasesCommand),
    /// List the catalogue's genres
    Genres(GenresCommand),
    /// Score a ratings document without touching the network
    Score(ScoreCommand),
    /// Show or update persisted preferences
    Prefs(PrefsCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum Window {
    Day,
    Week,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum Focus {
    Critics,
    Audience,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Args)]
pub struct SearchCommand {
    pub query: String,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct DetailsCommand {
    pub movie_id: u64,
    /// Weighting focus; defaults to the persisted preference
    #[arg(long, value_enum)]
    pub focus: Option<Focus>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct TrendingCommand {
    #[arg(long, value_enum, default_value = "week")]
    pub window: Window,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct TopRatedCommand {
    /// Restrict the listing to one genre id
    #[arg(long)]
    pub genre: Option<u32>,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct NewReleasesCommand {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct GenresCommand {
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Path to a ratings JSON document
    #[arg(long)]
    pub ratings: PathBuf,
    #[arg(long, value_enum)]
    pub focus: Option<Focus>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct PrefsCommand {
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,
    #[arg(long, value_enum)]
    pub focus: Option<Focus>,
}
