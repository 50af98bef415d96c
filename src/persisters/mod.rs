use std::cell::RefCell;

use thiserror::Error;

pub mod csv_store;

pub use csv_store::CsvMovieStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on movie file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error on movie file: {0}")]
    Csv(#[from] csv::Error),
}

/// One persisted row, before any parsing. A cell the file doesn't have is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieRecord {
    pub title: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub watched: Option<String>,
    pub rating: Option<String>,
}

impl MovieRecord {
    pub fn csv_titles() -> Vec<&'static str> {
        vec!["Title", "Year", "Genre", "Watched", "Rating"]
    }

    pub fn to_csvable_array(&self) -> Vec<String> {
        vec![
            self.title.clone().unwrap_or_default(),
            self.year.clone().unwrap_or_default(),
            self.genre.clone().unwrap_or_default(),
            self.watched.clone().unwrap_or_default(),
            self.rating.clone().unwrap_or_default(),
        ]
    }
}

pub trait MovieStore {
    /// `Ok(None)` means nothing has been persisted yet.
    fn read_records(&self) -> Result<Option<Vec<MovieRecord>>, StoreError>;

    fn write_records(&self, records: &[MovieRecord]) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryMovieStore {
    records: RefCell<Option<Vec<MovieRecord>>>,
}

impl MemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<MovieRecord>) -> Self {
        MemoryMovieStore {
            records: RefCell::new(Some(records)),
        }
    }

    pub fn records(&self) -> Option<Vec<MovieRecord>> {
        self.records.borrow().clone()
    }
}

impl MovieStore for MemoryMovieStore {
    fn read_records(&self) -> Result<Option<Vec<MovieRecord>>, StoreError> {
        Ok(self.records.borrow().clone())
    }

    fn write_records(&self, records: &[MovieRecord]) -> Result<(), StoreError> {
        *self.records.borrow_mut() = Some(records.to_vec());
        Ok(())
    }
}
