use thiserror::Error;

pub const UNKNOWN_GENRE: &str = "Unknown";
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Title cannot be empty.")]
    EmptyTitle,

    #[error("Rating must be between 0 and 10, got {0}.")]
    RatingOutOfRange(f64),

    #[error("Year must be a number, got '{0}'.")]
    InvalidYear(String),

    #[error("Rating must be a number (0-10), got '{0}'.")]
    InvalidRating(String),

    #[error("Rating cannot be negative, got {0}.")]
    NegativeRating(f64),

    #[error("Rating must be <= 10, got {0}.")]
    RatingTooHigh(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    title: String,
    year: i64,
    genre: String,
    watched: bool,
    rating: Option<f64>,
}

impl Movie {
    pub fn new(title: impl Into<String>, year: i64) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        Ok(Movie {
            title,
            year,
            genre: UNKNOWN_GENRE.to_string(),
            watched: false,
            rating: None,
        })
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.set_genre(genre);
        self
    }

    pub fn with_watched(mut self, watched: impl Into<bool>) -> Self {
        self.set_watched(watched);
        self
    }

    pub fn with_rating(mut self, rating: Option<f64>) -> Result<Self, ValidationError> {
        self.set_rating(rating)?;
        Ok(self)
    }

    /// Rebuilds a movie from persisted data without checking the rating range.
    ///
    /// Files written before ratings were range checked may hold any number here;
    /// `MovieLibrary::validate_ratings` is what brings those back in line.
    pub(crate) fn restore(
        title: String,
        year: i64,
        genre: &str,
        watched: bool,
        rating: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let mut movie = Movie::new(title, year)?.with_genre(genre).with_watched(watched);
        movie.rating = rating;
        Ok(movie)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn watched(&self) -> bool {
        self.watched
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        self.title = title;
        Ok(())
    }

    pub fn set_year(&mut self, year: i64) {
        self.year = year;
    }

    pub fn set_genre(&mut self, genre: &str) {
        self.genre = if genre.is_empty() {
            UNKNOWN_GENRE.to_string()
        } else {
            genre.to_string()
        };
    }

    pub fn set_watched(&mut self, watched: impl Into<bool>) {
        self.watched = watched.into();
    }

    /// Rejects anything outside `[0, 10]` and leaves the current rating untouched.
    pub fn set_rating(&mut self, rating: Option<f64>) -> Result<(), ValidationError> {
        if let Some(r) = rating {
            if !Movie::is_valid_rating(r) {
                return Err(ValidationError::RatingOutOfRange(r));
            }
        }
        self.rating = rating;
        Ok(())
    }

    // NaN fails the range check as well.
    pub fn is_valid_rating(rating: f64) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&rating)
    }

    pub(crate) fn clear_rating(&mut self) {
        self.rating = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_title_and_year() {
        for (title, year) in [("Inception", 2010), ("M", -350), ("Dune: Part Three", 2031)] {
            let movie = Movie::new(title, year).unwrap();
            assert_eq!(movie.title(), title);
            assert_eq!(movie.year(), year);
        }
    }

    #[test]
    fn set_year_accepts_any_integer() {
        let mut movie = Movie::new("Metropolis", 1927).unwrap();
        movie.set_year(-1);
        assert_eq!(movie.year(), -1);
        movie.set_year(i64::MAX);
        assert_eq!(movie.year(), i64::MAX);
    }

    #[test]
    fn new_applies_defaults() {
        let movie = Movie::new("Alien", 1979).unwrap();
        assert_eq!(movie.genre(), "Unknown");
        assert!(!movie.watched());
        assert_eq!(movie.rating(), None);
    }

    #[test]
    fn new_rejects_empty_title() {
        assert_eq!(Movie::new("", 1999), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn set_title_rejects_empty_and_keeps_previous() {
        let mut movie = Movie::new("Heat", 1995).unwrap();
        assert_eq!(movie.set_title(""), Err(ValidationError::EmptyTitle));
        assert_eq!(movie.title(), "Heat");

        movie.set_title("Heat (Director's Cut)").unwrap();
        assert_eq!(movie.title(), "Heat (Director's Cut)");
    }

    #[test]
    fn set_rating_rejects_out_of_range() {
        let mut movie = Movie::new("Memento", 2000)
            .unwrap()
            .with_rating(Some(8.5))
            .unwrap();

        assert_eq!(
            movie.set_rating(Some(-0.1)),
            Err(ValidationError::RatingOutOfRange(-0.1))
        );
        assert_eq!(
            movie.set_rating(Some(10.5)),
            Err(ValidationError::RatingOutOfRange(10.5))
        );
        assert!(movie.set_rating(Some(f64::NAN)).is_err());
        assert_eq!(movie.rating(), Some(8.5));
    }

    #[test]
    fn set_rating_accepts_bounds_and_absent() {
        let mut movie = Movie::new("Memento", 2000).unwrap();
        movie.set_rating(Some(0.0)).unwrap();
        assert_eq!(movie.rating(), Some(0.0));
        movie.set_rating(Some(10.0)).unwrap();
        assert_eq!(movie.rating(), Some(10.0));
        movie.set_rating(None).unwrap();
        assert_eq!(movie.rating(), None);
    }

    #[test]
    fn with_rating_rejects_out_of_range() {
        let result = Movie::new("Cats", 2019).unwrap().with_rating(Some(11.0));
        assert_eq!(result, Err(ValidationError::RatingOutOfRange(11.0)));
    }

    #[test]
    fn empty_genre_becomes_unknown() {
        let mut movie = Movie::new("Arrival", 2016).unwrap().with_genre("Sci-Fi");
        assert_eq!(movie.genre(), "Sci-Fi");

        movie.set_genre("");
        assert_eq!(movie.genre(), "Unknown");
        assert_eq!(Movie::new("Arrival", 2016).unwrap().with_genre("").genre(), "Unknown");
    }

    #[test]
    fn restore_keeps_out_of_range_rating() {
        let movie = Movie::restore("Legacy".to_string(), 1990, "", true, Some(15.0)).unwrap();
        assert_eq!(movie.rating(), Some(15.0));
        assert_eq!(movie.genre(), "Unknown");
        assert!(movie.watched());
    }

    #[test]
    fn restore_still_requires_title() {
        let result = Movie::restore(String::new(), 1990, "Drama", false, None);
        assert_eq!(result, Err(ValidationError::EmptyTitle));
    }
}
