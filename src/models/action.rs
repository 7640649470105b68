//! Reversible catalog actions recorded for undo.

use serde::{Deserialize, Serialize};

/// The two reversible catalog operations.
///
/// Adding a book is deliberately absent: additions are not undoable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Borrow,
    Return,
}

impl ActionKind {
    /// Availability the affected record is restored to when an action of
    /// this kind is undone. Inversion is a pure function of the kind; no
    /// snapshot of the record is needed.
    pub fn undone_availability(self) -> bool {
        match self {
            ActionKind::Borrow => true,
            ActionKind::Return => false,
        }
    }
}

/// A single reversible state change, tagged with the affected record's
/// title key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub title: String,
}

impl Action {
    pub fn new(kind: ActionKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inversion_is_exhaustive() {
        assert!(ActionKind::Borrow.undone_availability());
        assert!(!ActionKind::Return.undone_availability());
    }
}
