use std::path::PathBuf;

use csv::{ByteRecord, ReaderBuilder, Writer};

use super::{MovieRecord, MovieStore, StoreError};

pub const DEFAULT_FILE_NAME: &str = "movies.csv";

#[derive(Debug, Clone)]
pub struct CsvMovieStore {
    path: PathBuf,
}

impl CsvMovieStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvMovieStore { path: path.into() }
    }

    // Header cells that aren't UTF-8 can't be one of ours, so they just never match.
    fn column_index(headers: &ByteRecord, name: &str) -> Option<usize> {
        headers
            .iter()
            .position(|h| std::str::from_utf8(h).map(str::trim) == Ok(name))
    }
}

impl MovieStore for CsvMovieStore {
    fn read_records(&self) -> Result<Option<Vec<MovieRecord>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut rdr = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let headers = rdr.byte_headers()?.clone();
        let columns: Vec<Option<usize>> = MovieRecord::csv_titles()
            .into_iter()
            .map(|name| Self::column_index(&headers, name))
            .collect();

        let mut records = vec![];
        for (row, result) in rdr.byte_records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    log::warn!(
                        "Skipping unreadable row {} in {}: {}",
                        row + 1,
                        self.path.display(),
                        e
                    );
                    continue;
                }
            };

            let cell = |column: usize| {
                let bytes = columns[column].and_then(|idx| record.get(idx))?;
                match std::str::from_utf8(bytes) {
                    Ok(value) => Some(value.to_string()),
                    Err(e) => {
                        log::warn!(
                            "Ignoring unreadable {} cell in row {} of {}: {}",
                            MovieRecord::csv_titles()[column],
                            row + 1,
                            self.path.display(),
                            e
                        );
                        None
                    }
                }
            };
            records.push(MovieRecord {
                title: cell(0),
                year: cell(1),
                genre: cell(2),
                watched: cell(3),
                rating: cell(4),
            });
        }

        log::debug!("Read {} rows from {}", records.len(), self.path.display());
        Ok(Some(records))
    }

    fn write_records(&self, records: &[MovieRecord]) -> Result<(), StoreError> {
        let mut wrt = Writer::from_path(&self.path)?;
        wrt.write_record(MovieRecord::csv_titles())?;
        for record in records.iter() {
            wrt.write_record(record.to_csvable_array())?;
        }
        wrt.flush()?;

        log::debug!("Wrote {} rows to {}", records.len(), self.path.display());
        Ok(())
    }
}
