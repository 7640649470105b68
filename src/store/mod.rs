//! In-memory storage layer: the ordered catalog and the undo log.

pub mod catalog;
pub mod history;

pub use catalog::{BookKey, Catalog};
pub use history::ActionLog;
