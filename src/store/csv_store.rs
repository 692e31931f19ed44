use std::path::PathBuf;

use tracing::debug;

use crate::app::{BookrakeError, Result};
use crate::domain::Book;
use crate::store::Store;

const HEADERS: [&str; 4] = ["Title", "Price", "Link", "Image URL"];

/// Tabular-file record store with the fixed column set
/// {Title, Price, Link, Image URL}.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Store for CsvStore {
    fn save_books(&self, books: &[Book]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;

        // serde only emits the header row alongside the first record, so
        // an empty run has to write it explicitly.
        if books.is_empty() {
            writer.write_record(HEADERS)?;
        }
        for book in books {
            writer.serialize(book)?;
        }
        writer.flush()?;

        debug!(records = books.len(), path = %self.path.display(), "record store written");
        Ok(())
    }

    fn load_books(&self) -> Result<Vec<Book>> {
        if !self.path.exists() {
            return Err(BookrakeError::MissingInput(self.path.clone()));
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let books = reader
            .deserialize()
            .collect::<std::result::Result<Vec<Book>, _>>()?;

        debug!(records = books.len(), path = %self.path.display(), "record store loaded");
        Ok(books)
    }
}
