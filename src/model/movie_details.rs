/// Values a lookup found for a title, kept as text so they can go straight
/// into a `MovieForm`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDetails {
    pub title: String,
    pub year: Option<String>,
    pub genre: String,
    pub rating: Option<String>,
}

impl MovieDetails {
    /// Keeps only the four leading digits of a year such as "2016–2025".
    pub fn leading_year(raw: &str) -> Option<String> {
        let digits: String = raw.chars().take(4).collect();
        if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
            Some(digits)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_year_extracts_first_four_digits() {
        assert_eq!(MovieDetails::leading_year("2010"), Some("2010".to_string()));
        assert_eq!(MovieDetails::leading_year("2016–2025"), Some("2016".to_string()));
        assert_eq!(MovieDetails::leading_year("1999–"), Some("1999".to_string()));
    }

    #[test]
    fn leading_year_requires_four_digits_at_start() {
        assert_eq!(MovieDetails::leading_year(""), None);
        assert_eq!(MovieDetails::leading_year("199"), None);
        assert_eq!(MovieDetails::leading_year("N/A"), None);
        assert_eq!(MovieDetails::leading_year("c. 1920"), None);
    }
}
