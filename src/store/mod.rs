pub mod csv_store;

use crate::app::Result;
use crate::domain::Book;

pub use csv_store::CsvStore;

/// Persistence boundary between the scrape run and the render run.
///
/// One scrape run's output fully replaces the prior record set; no
/// append-only history is kept.
pub trait Store {
    /// Overwrite the store with this run's record set.
    fn save_books(&self, books: &[Book]) -> Result<()>;

    /// Load the persisted record set in insertion order.
    ///
    /// Fails with [`MissingInput`](crate::app::BookrakeError::MissingInput)
    /// when the store file doesn't exist.
    fn load_books(&self) -> Result<Vec<Book>>;
}
