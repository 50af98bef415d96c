use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{LookupError, MovieLookup};
use crate::model::MovieDetails;

pub const DEFAULT_OMDB_URL: &str = "http://www.omdbapi.com/";

#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub api_key: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// The parts of an OMDb `?t=` response we care about.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "imdbRating")]
    imdb_rating: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl OmdbResponse {
    fn into_details(self) -> Result<MovieDetails, LookupError> {
        if self.response != "True" {
            return Err(LookupError::NotFound(
                self.error.unwrap_or_else(|| "no data available".to_string()),
            ));
        }

        let rating = match self.imdb_rating.trim() {
            "" | "N/A" => None,
            r => Some(r.to_string()),
        };

        Ok(MovieDetails {
            title: self.title,
            year: MovieDetails::leading_year(&self.year),
            genre: self.genre,
            rating,
        })
    }
}

impl OmdbClient {
    pub fn new(config: OmdbConfig) -> Result<Self, LookupError> {
        if config.api_key.is_empty() {
            return Err(LookupError::NotConfigured(
                "an OMDb API key is required".to_string(),
            ));
        }

        Ok(Self {
            client: Client::builder().build()?,
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_OMDB_URL.to_string()),
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl MovieLookup for OmdbClient {
    async fn lookup(&self, title: &str) -> Result<MovieDetails, LookupError> {
        log::debug!("Looking up '{}' on {}", title, self.base_url);

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            return Err(LookupError::Status(resp.status().as_u16()));
        }

        let body: OmdbResponse = resp.json().await?;
        body.into_details()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<MovieDetails, LookupError> {
        serde_json::from_str::<OmdbResponse>(json)
            .unwrap()
            .into_details()
    }

    #[test]
    fn found_movie_becomes_details() {
        let details = parse(
            r#"{"Title":"Inception","Year":"2010","Rated":"PG-13","Genre":"Action, Adventure, Sci-Fi",
                "imdbRating":"8.8","Response":"True"}"#,
        )
        .unwrap();

        assert_eq!(
            details,
            MovieDetails {
                title: "Inception".to_string(),
                year: Some("2010".to_string()),
                genre: "Action, Adventure, Sci-Fi".to_string(),
                rating: Some("8.8".to_string()),
            }
        );
    }

    #[test]
    fn year_range_keeps_first_year() {
        let details = parse(
            r#"{"Title":"Stranger Things","Year":"2016–2025","Genre":"Drama","imdbRating":"8.7","Response":"True"}"#,
        )
        .unwrap();
        assert_eq!(details.year.as_deref(), Some("2016"));
    }

    #[test]
    fn missing_rating_and_year_are_none() {
        let details =
            parse(r#"{"Title":"Obscure","Year":"N/A","imdbRating":"N/A","Response":"True"}"#)
                .unwrap();
        assert_eq!(details.year, None);
        assert_eq!(details.rating, None);
        assert_eq!(details.genre, "");
    }

    #[test]
    fn false_response_is_not_found() {
        let err = parse(r#"{"Response":"False","Error":"Movie not found!"}"#).unwrap_err();
        assert!(matches!(err, LookupError::NotFound(msg) if msg == "Movie not found!"));
    }

    #[test]
    fn false_response_without_error_text() {
        let err = parse(r#"{"Response":"False"}"#).unwrap_err();
        assert!(matches!(err, LookupError::NotFound(_)));
    }

    #[test]
    fn client_requires_api_key() {
        let result = OmdbClient::new(OmdbConfig {
            api_key: String::new(),
            base_url: None,
        });
        assert!(matches!(result, Err(LookupError::NotConfigured(_))));
    }
}
