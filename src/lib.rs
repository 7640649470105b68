//! Shelfmark Lending Catalog
//!
//! An in-memory catalog of lendable books: ordered container with
//! title/author search, borrow and return transitions, and a LIFO undo
//! history that reverses the most recent state change exactly once.

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorCode};
pub use services::LibraryService;
