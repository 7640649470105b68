//! Data models for Shelfmark

pub mod action;
pub mod book;

// Re-export commonly used types
pub use action::{Action, ActionKind};
pub use book::{Book, NewBook};
