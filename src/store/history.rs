//! LIFO log of reversible actions.

use crate::models::Action;

/// Stack of [`Action`]s awaiting undo.
///
/// Strict LIFO ordering is the sole guarantee: the top entry is always the
/// most recent undoable operation that has not yet been undone. Created
/// empty, grows by one per borrow/return, shrinks by one per undo, never
/// persisted.
#[derive(Debug, Default)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Remove and return the last-pushed action, or `None` when the log is
    /// empty. Never fails.
    pub fn pop(&mut self) -> Option<Action> {
        self.actions.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
