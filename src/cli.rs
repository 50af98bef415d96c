use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::{Movie, MovieForm};
use crate::persisters::csv_store::DEFAULT_FILE_NAME;

/// movielog - keep track of the movies you've seen and the ones you want to see
#[derive(Parser, Debug)]
#[command(name = "movielog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file the movie list is kept in
    #[arg(long, global = true, env = "MOVIELOG_FILE", default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,

    /// OMDb API key, needed for lookups
    #[arg(long, global = true, env = "OMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// OMDb endpoint
    #[arg(long, global = true, env = "OMDB_URL")]
    pub omdb_url: Option<String>,

    /// Log debug details (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the movie list
    List {
        /// Only movies not watched yet
        #[arg(long)]
        unwatched: bool,
    },

    /// Add a movie
    Add(AddArgs),

    /// Delete every movie with the given title(s), ignoring case
    Delete {
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// Look a title up on OMDb without adding it
    Lookup { title: String },

    /// Clear ratings outside 0-10 and save the list
    Repair,
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub year: Option<String>,

    #[arg(long)]
    pub genre: Option<String>,

    /// 0 to 10, leave out if unrated
    #[arg(long)]
    pub rating: Option<String>,

    #[arg(long)]
    pub watched: bool,

    /// Fill in the details from OMDb first; flags given here still win
    #[arg(long)]
    pub fetch: bool,
}

impl AddArgs {
    pub fn to_form(&self) -> MovieForm {
        let mut form = MovieForm {
            title: self.title.clone(),
            watched: self.watched,
            ..MovieForm::default()
        };
        self.apply_overrides(&mut form);
        form
    }

    /// Puts back whatever the user typed over looked-up values.
    pub fn apply_overrides(&self, form: &mut MovieForm) {
        if let Some(year) = &self.year {
            form.year = year.clone();
        }
        if let Some(genre) = &self.genre {
            form.genre = genre.clone();
        }
        if let Some(rating) = &self.rating {
            form.rating = rating.clone();
        }
        form.watched = self.watched;
    }
}

pub fn format_table<'a>(movies: impl IntoIterator<Item = &'a Movie>) -> String {
    let rows: Vec<[String; 5]> = movies
        .into_iter()
        .map(|m| {
            [
                m.title().to_string(),
                m.year().to_string(),
                m.genre().to_string(),
                m.rating().map(|r| r.to_string()).unwrap_or_default(),
                if m.watched() { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();

    let headers = ["Title", "Year", "Genre", "Rating", "Watched"];
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(headers.to_vec())];
    for row in &rows {
        lines.push(render(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}
