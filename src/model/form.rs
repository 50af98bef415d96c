use super::movie::{Movie, ValidationError, MAX_RATING, MIN_RATING};
use super::movie_details::MovieDetails;

/// Raw input for a new movie, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieForm {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub rating: String,
    pub watched: bool,
}

impl MovieForm {
    pub fn to_movie(&self) -> Result<Movie, ValidationError> {
        let title = self.title.trim();
        let year = Self::parse_year(self.year.trim())?;
        let rating = Self::parse_rating(self.rating.trim())?;

        Movie::new(title, year)?
            .with_genre(self.genre.trim())
            .with_watched(self.watched)
            .with_rating(rating)
    }

    /// Overwrites the fields a lookup knows about. `watched` is left alone.
    pub fn prefill(&mut self, details: &MovieDetails) {
        self.title = details.title.clone();
        self.year = details.year.clone().unwrap_or_default();
        self.genre = details.genre.clone();
        self.rating = details.rating.clone().unwrap_or_default();
    }

    fn parse_year(year: &str) -> Result<i64, ValidationError> {
        year.parse::<i64>()
            .map_err(|_| ValidationError::InvalidYear(year.to_string()))
    }

    fn parse_rating(rating: &str) -> Result<Option<f64>, ValidationError> {
        if rating.is_empty() {
            return Ok(None);
        }

        let value = match rating.parse::<f64>() {
            Ok(v) if !v.is_nan() => v,
            _ => return Err(ValidationError::InvalidRating(rating.to_string())),
        };

        if value < MIN_RATING {
            Err(ValidationError::NegativeRating(value))
        } else if value > MAX_RATING {
            Err(ValidationError::RatingTooHigh(value))
        } else {
            Ok(Some(value))
        }
    }
}
