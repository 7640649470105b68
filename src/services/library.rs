//! Catalog orchestration service.
//!
//! [`LibraryService`] owns one [`Catalog`] and one [`ActionLog`] for its
//! whole lifetime and implements the add/borrow/return/undo/search use
//! cases over the pair. Execution is synchronous and single-threaded; the
//! caller serializes invocations, so there is no locking and no
//! transaction machinery. Returned [`Book`] values are snapshots; the live
//! state stays inside the catalog and every later lookup observes it.

use validator::Validate;

use crate::{
    config::SeedConfig,
    error::{AppError, AppResult},
    models::{Action, ActionKind, Book, NewBook},
    store::{ActionLog, Catalog},
};

pub struct LibraryService {
    catalog: Catalog,
    history: ActionLog,
}

impl LibraryService {
    /// Create a service over an empty catalog.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            history: ActionLog::new(),
        }
    }

    /// Create a service seeded with a bootstrap inventory, in seed order.
    /// Seeded entries keep their configured availability and are not
    /// recorded in the undo history.
    pub fn with_seed(seed: &SeedConfig) -> Self {
        let mut catalog = Catalog::new();
        for entry in &seed.books {
            let mut book = Book::new(entry.title.clone(), entry.author.clone());
            book.is_available = entry.available;
            catalog.append(book);
        }
        tracing::info!(count = catalog.len(), "catalog seeded");
        Self {
            catalog,
            history: ActionLog::new(),
        }
    }

    /// Add a new record, available for lending.
    ///
    /// Fails with a validation error when title or author is blank.
    /// Additions are not undoable, so nothing is pushed onto the history.
    pub fn add_book(&mut self, new_book: NewBook) -> AppResult<Book> {
        new_book
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if new_book.title.trim().is_empty() || new_book.author.trim().is_empty() {
            return Err(AppError::Validation(
                "title and author must not be blank".to_string(),
            ));
        }

        let key = self.catalog.append(Book::new(new_book.title, new_book.author));
        let book = self.catalog.get(key).clone();
        tracing::debug!(title = %book.title, author = %book.author, "book added");
        Ok(book)
    }

    /// Borrow a record by title (case-insensitive, first match wins).
    ///
    /// On failure the catalog and the history are left unchanged.
    pub fn borrow(&mut self, title: &str) -> AppResult<Book> {
        let key = self
            .catalog
            .find_by_title(title)
            .ok_or_else(|| AppError::NotFound(format!("no book titled \"{}\"", title)))?;
        if !self.catalog.get(key).is_available {
            return Err(AppError::ItemUnavailable(self.catalog.get(key).title.clone()));
        }

        let book = self.catalog.set_availability(key, false).clone();
        // Key the action by the stored title so undo resolves to the same
        // record regardless of the caller's casing.
        self.history
            .push(Action::new(ActionKind::Borrow, book.title.clone()));
        tracing::debug!(title = %book.title, "book borrowed");
        Ok(book)
    }

    /// Return a borrowed record by title (case-insensitive, first match
    /// wins). Symmetric to [`LibraryService::borrow`].
    pub fn return_book(&mut self, title: &str) -> AppResult<Book> {
        let key = self
            .catalog
            .find_by_title(title)
            .ok_or_else(|| AppError::NotFound(format!("no book titled \"{}\"", title)))?;
        if self.catalog.get(key).is_available {
            return Err(AppError::ItemAlreadyAvailable(
                self.catalog.get(key).title.clone(),
            ));
        }

        let book = self.catalog.set_availability(key, true).clone();
        self.history
            .push(Action::new(ActionKind::Return, book.title.clone()));
        tracing::debug!(title = %book.title, "book returned");
        Ok(book)
    }

    /// Undo the most recent borrow/return that has not yet been undone.
    ///
    /// The popped action is consumed unconditionally: the inverse is applied
    /// without re-checking the record's current state, and if the record can
    /// no longer be found the undo degrades to a no-op (`Ok(None)`) without
    /// re-pushing the action. Both behaviors are inherited from the original
    /// design.
    pub fn undo(&mut self) -> AppResult<Option<Book>> {
        let action = self.history.pop().ok_or(AppError::EmptyHistory)?;

        let Some(key) = self.catalog.find_by_title(&action.title) else {
            tracing::warn!(title = %action.title, "undo target not found; action dropped");
            return Ok(None);
        };

        let book = self
            .catalog
            .set_availability(key, action.kind.undone_availability())
            .clone();
        tracing::debug!(title = %book.title, available = book.is_available, "action undone");
        Ok(Some(book))
    }

    /// Search by title or author substring, case-insensitive, insertion
    /// order preserved. Fails with a validation error on a blank query.
    pub fn search(&self, query: &str) -> AppResult<Vec<Book>> {
        if query.trim().is_empty() {
            return Err(AppError::Validation(
                "search query must not be blank".to_string(),
            ));
        }
        Ok(self
            .catalog
            .search(query)
            .into_iter()
            .map(|key| self.catalog.get(key).clone())
            .collect())
    }

    /// Full inventory snapshot in insertion order.
    pub fn list_all(&self) -> Vec<Book> {
        self.catalog.iter().cloned().collect()
    }

    /// Number of actions awaiting undo.
    pub fn pending_undo_count(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}

impl Default for LibraryService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_with_vanished_record_consumes_the_action() {
        let mut service = LibraryService::new();
        // No mutation path removes records today; forge a log entry whose
        // key matches nothing to pin the degraded behavior.
        service
            .history
            .push(Action::new(ActionKind::Borrow, "ghost"));

        let undone = service.undo().expect("log was not empty");
        assert!(undone.is_none());
        assert!(!service.can_undo());
    }

    #[test]
    fn test_undo_does_not_revalidate_current_state() {
        let mut service = LibraryService::new();
        service
            .add_book(NewBook::new("1984", "George Orwell"))
            .unwrap();
        service.borrow("1984").unwrap();

        // Independently flip the record back before undoing.
        let key = service.catalog.find_by_title("1984").unwrap();
        service.catalog.set_availability(key, true);

        // Undo of the borrow still applies its inverse unconditionally.
        let undone = service.undo().unwrap().expect("record exists");
        assert!(undone.is_available);
        assert!(!service.can_undo());
    }
}
