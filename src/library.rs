use crate::model::{Movie, ValidationError};
use crate::persisters::{MovieRecord, MovieStore, StoreError};

pub const DEFAULT_YEAR: i64 = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// The user's movies in insertion order, plus the unwatched ones.
///
/// The unwatched view holds indices into `movies` and is rebuilt from scratch
/// after every add or delete.
#[derive(Debug, Default)]
pub struct MovieLibrary {
    movies: Vec<Movie>,
    unwatched: Vec<usize>,
}

impl MovieLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, movie: Movie) {
        self.movies.push(movie);
        self.build_unwatched();
    }

    /// Removes every movie whose title matches, ignoring case. Returns how many went.
    pub fn delete_by_title(&mut self, title: &str) -> usize {
        let target = title.to_lowercase();
        let before = self.movies.len();
        self.movies.retain(|m| m.title().to_lowercase() != target);
        self.build_unwatched();
        before - self.movies.len()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn unwatched(&self) -> Vec<&Movie> {
        self.unwatched.iter().map(|&i| &self.movies[i]).collect()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Drops any rating outside `[0, 10]`. Returns the number of movies touched.
    pub fn validate_ratings(&mut self) -> usize {
        let mut reset = 0;
        for movie in self.movies.iter_mut() {
            if let Some(rating) = movie.rating() {
                if !Movie::is_valid_rating(rating) {
                    log::warn!(
                        "Resetting invalid rating {} for movie '{}'",
                        rating,
                        movie.title()
                    );
                    movie.clear_rating();
                    reset += 1;
                }
            }
        }
        reset
    }

    /// Appends every usable row from `store`. Bad rows are skipped, not fatal.
    pub fn load(&mut self, store: &dyn MovieStore) -> Result<LoadReport, StoreError> {
        let mut report = LoadReport::default();
        let records = match store.read_records()? {
            Some(records) => records,
            None => {
                log::info!("No existing movie file found. Starting with an empty library.");
                return Ok(report);
            }
        };

        for record in records {
            match Self::movie_from_record(record) {
                Ok(movie) => {
                    self.movies.push(movie);
                    report.loaded += 1;
                }
                Err(e) => {
                    log::warn!("Skipping invalid movie row: {}", e);
                    report.skipped += 1;
                }
            }
        }
        self.build_unwatched();

        log::info!(
            "Loaded {} movie(s), skipped {} row(s)",
            report.loaded,
            report.skipped
        );
        Ok(report)
    }

    pub fn save(&self, store: &dyn MovieStore) -> Result<(), StoreError> {
        let records: Vec<MovieRecord> = self.movies.iter().map(Self::record_from_movie).collect();
        store.write_records(&records)
    }

    fn build_unwatched(&mut self) {
        self.unwatched = self
            .movies
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.watched())
            .map(|(i, _)| i)
            .collect();
    }

    fn movie_from_record(record: MovieRecord) -> Result<Movie, ValidationError> {
        let title = record.title.unwrap_or_default();
        let year = parse_year(record.year.as_deref());
        let genre = record.genre.unwrap_or_default();
        let watched = parse_watched(record.watched.as_deref());
        let rating = parse_rating(&title, record.rating.as_deref());

        Movie::restore(title, year, &genre, watched, rating)
    }

    fn record_from_movie(movie: &Movie) -> MovieRecord {
        MovieRecord {
            title: Some(movie.title().to_string()),
            year: Some(movie.year().to_string()),
            genre: Some(movie.genre().to_string()),
            watched: Some(if movie.watched() { "True" } else { "False" }.to_string()),
            rating: movie.rating().map(|r| r.to_string()),
        }
    }
}

fn parse_year(cell: Option<&str>) -> i64 {
    let cell = cell.map(str::trim).unwrap_or_default();
    if let Ok(year) = cell.parse::<i64>() {
        return year;
    }

    // Spreadsheet tools like to write "1999.0".
    match cell.parse::<f64>() {
        Ok(year) if year.is_finite() && year.fract() == 0.0 => year as i64,
        _ => {
            log::debug!("Year '{}' is missing or invalid, using {}", cell, DEFAULT_YEAR);
            DEFAULT_YEAR
        }
    }
}

fn parse_watched(cell: Option<&str>) -> bool {
    match cell {
        Some(value) => matches!(
            value.trim().to_lowercase().as_str(),
            "true" | "yes" | "1" | "1.0"
        ),
        None => false,
    }
}

fn parse_rating(title: &str, cell: Option<&str>) -> Option<f64> {
    let cell = cell.map(str::trim).filter(|c| !c.is_empty())?;
    match cell.parse::<f64>() {
        Ok(rating) if !rating.is_nan() => Some(rating),
        Ok(_) => None,
        Err(_) => {
            log::warn!(
                "Ignoring unreadable rating '{}' for movie '{}'",
                cell,
                title
            );
            None
        }
    }
}
