use crate::prefs::ThemeMode;
use crate::render::DetailsView;
use crate::types::movie::{Genre, MovieSummary, Page};
use crate::types::score::{CineScore, Reliability, Source};
use colored::{ColoredString, Colorize};

struct Palette {
    theme: ThemeMode,
}

impl Palette {
    fn new(theme: ThemeMode) -> Self {
        Self { theme }
    }

    fn heading(&self, text: &str) -> ColoredString {
        match self.theme {
            ThemeMode::Dark => text.bright_white().bold(),
            ThemeMode::Light => text.bold(),
        }
    }

    fn accent(&self, text: &str) -> ColoredString {
        match self.theme {
            ThemeMode::Dark => text.bright_cyan(),
            ThemeMode::Light => text.blue(),
        }
    }

    fn dim(&self, text: &str) -> ColoredString {
        match self.theme {
            ThemeMode::Dark => text.bright_black(),
            ThemeMode::Light => text.normal(),
        }
    }

    fn reliability(&self, reliability: Reliability) -> ColoredString {
        let label = reliability.as_str();
        match reliability {
            Reliability::High => label.green().bold(),
            Reliability::Medium => label.yellow(),
            Reliability::Low => label.red(),
        }
    }
}

pub fn details(view: &DetailsView<'_>, theme: ThemeMode) -> String {
    let palette = Palette::new(theme);
    let movie = view.movie;
    let mut output = String::new();

    match movie.release_year() {
        Some(year) => output.push_str(&format!(
            "{} ({year})\n",
            palette.heading(&movie.title)
        )),
        None => output.push_str(&format!("{}\n", palette.heading(&movie.title))),
    }

    if let Some(tagline) = movie.tagline.as_deref().filter(|t| !t.is_empty()) {
        output.push_str(&format!("{}\n", palette.dim(tagline)));
    }

    let mut facts = Vec::new();
    if let Some(runtime) = movie.runtime {
        facts.push(format!("runtime: {runtime} min"));
    }
    if !movie.genres.is_empty() {
        let names = movie
            .genres
            .iter()
            .map(|genre| genre.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        facts.push(format!("genres: {names}"));
    }
    facts.push(format!(
        "provider rating: {:.1} ({} votes)",
        movie.vote_average, movie.vote_count
    ));
    output.push_str(&format!("  {}\n", facts.join(" | ")));

    output.push('\n');
    match view.cine_score {
        Some(score) => output.push_str(&score_block(score, theme)),
        None => output.push_str(&format!(
            "{}\n",
            palette.dim("CineScore: unavailable (no ratings data)")
        )),
    }

    if !movie.overview.is_empty() {
        output.push('\n');
        output.push_str(&movie.overview);
        output.push('\n');
    }

    output
}

pub fn score_block(score: &CineScore, theme: ThemeMode) -> String {
    let palette = Palette::new(theme);
    let focus = if score.audience_focused {
        "audience-focused"
    } else {
        "critic-focused"
    };

    let mut output = format!(
        "{} {}/10 [{}] ({focus})\n",
        palette.heading("CineScore:"),
        palette.accent(&format!("{:.1}", score.score)),
        palette.reliability(score.reliability),
    );

    if score.used_sources.is_empty() {
        output.push_str("  sources: none\n");
        return output;
    }

    let names = score
        .used_sources
        .iter()
        .map(|source| source.display_name())
        .collect::<Vec<_>>()
        .join(", ");
    output.push_str(&format!("  sources: {names}\n"));

    let normalized = Source::all()
        .iter()
        .filter_map(|source| {
            score
                .normalized_scores
                .get(*source)
                .map(|value| format!("{}: {:.1}", source.key(), value))
        })
        .collect::<Vec<_>>()
        .join(" | ");
    output.push_str(&format!("  normalized: {normalized}\n"));

    output
}

pub fn listing(heading: &str, page: &Page<MovieSummary>, theme: ThemeMode) -> String {
    let palette = Palette::new(theme);
    let mut output = format!(
        "{} {}\n",
        palette.heading(heading),
        palette.dim(&format!(
            "(page {} of {}, {} titles)",
            page.page, page.total_pages, page.total_results
        ))
    );

    if page.results.is_empty() {
        output.push_str("  no results\n");
        return output;
    }

    for movie in &page.results {
        let year = movie
            .release_year()
            .map(|year| format!(" ({year})"))
            .unwrap_or_default();
        output.push_str(&format!(
            "  {:>8}  {}{}  {}\n",
            palette.dim(&movie.id.to_string()),
            movie.title,
            year,
            palette.dim(&format!(
                "{:.1}/10, {} votes",
                movie.vote_average, movie.vote_count
            )),
        ));
    }

    output
}

pub fn genres(genres: &[Genre], theme: ThemeMode) -> String {
    let palette = Palette::new(theme);
    let mut output = format!("{}\n", palette.heading("Genres"));
    if genres.is_empty() {
        output.push_str("  none\n");
        return output;
    }
    for genre in genres {
        output.push_str(&format!(
            "  {:>6}  {}\n",
            palette.dim(&genre.id.to_string()),
            genre.name
        ));
    }
    output
}
