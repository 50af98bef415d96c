use async_trait::async_trait;
use thiserror::Error;

use crate::model::MovieDetails;

pub mod omdb_client;

pub use omdb_client::{OmdbClient, OmdbConfig};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP Error: {0}")]
    Status(u16),

    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("Lookup not configured: {0}")]
    NotConfigured(String),
}

/// Something that can find details for a movie title.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    async fn lookup(&self, title: &str) -> Result<MovieDetails, LookupError>;
}
