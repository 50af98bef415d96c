use thiserror::Error;

use crate::clients::{LookupError, MovieLookup};
use crate::library::MovieLibrary;
use crate::model::{MovieForm, ValidationError};
use crate::persisters::{MovieStore, StoreError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error adding movie: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Please enter a movie title first.")]
    MissingTitle,
}

impl AppError {
    /// Anything but a failed read or write leaves the catalog as it was.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Store(_))
    }
}

/// Ties the catalog to where it is stored and where details are looked up.
///
/// Every mutation is written back to the store before returning.
pub struct Shell {
    library: MovieLibrary,
    store: Box<dyn MovieStore>,
    lookup: Option<Box<dyn MovieLookup>>,
    ratings_cleared: usize,
}

impl Shell {
    pub fn open(
        store: Box<dyn MovieStore>,
        lookup: Option<Box<dyn MovieLookup>>,
    ) -> Result<Self, AppError> {
        let mut library = MovieLibrary::new();
        library.load(store.as_ref())?;

        let ratings_cleared = library.validate_ratings();
        if ratings_cleared > 0 {
            log::info!("Cleared {} out-of-range rating(s)", ratings_cleared);
        }

        Ok(Shell {
            library,
            store,
            lookup,
            ratings_cleared,
        })
    }

    pub fn library(&self) -> &MovieLibrary {
        &self.library
    }

    /// Fills `form` from the lookup. On failure the form is left untouched.
    pub async fn fetch_details(&self, form: &mut MovieForm) -> Result<(), AppError> {
        let title = form.title.trim();
        if title.is_empty() {
            return Err(AppError::MissingTitle);
        }

        let lookup = self.lookup.as_ref().ok_or_else(|| {
            LookupError::NotConfigured("no OMDb API key was given".to_string())
        })?;

        let details = lookup.lookup(title).await?;
        log::info!("Found details for '{}'", details.title);
        form.prefill(&details);
        Ok(())
    }

    pub fn add_movie(&mut self, form: &MovieForm) -> Result<(), AppError> {
        let movie = form.to_movie()?;
        log::info!("Adding movie '{}' ({})", movie.title(), movie.year());
        self.library.add(movie);
        self.library.save(self.store.as_ref())?;
        Ok(())
    }

    pub fn delete_movies(&mut self, titles: &[String]) -> Result<usize, AppError> {
        let mut total = 0;
        for title in titles {
            let deleted = self.library.delete_by_title(title);
            log::info!("Deleted {} movie(s) titled '{}'.", deleted, title);
            total += deleted;
        }

        self.library.save(self.store.as_ref())?;
        Ok(total)
    }

    /// Writes the catalog back with every out-of-range rating cleared.
    /// Returns how many were cleared since the shell was opened.
    pub fn repair_ratings(&mut self) -> Result<usize, AppError> {
        self.ratings_cleared += self.library.validate_ratings();
        self.library.save(self.store.as_ref())?;
        Ok(self.ratings_cleared)
    }
}
