//! Errors for malformed todo input.

use crate::types::TodoId;
use thiserror::Error;

/// Invalid argument supplied to the todo domain
///
/// Lookups by id never fail: toggling or deleting an unknown id is a no-op.
/// These errors only cover malformed input: a bad name for a new todo, or an
/// externally supplied list that breaks the list invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The name is empty or only whitespace
    #[error("Todo name cannot be empty")]
    EmptyName,

    /// The name exceeds the configured limit
    #[error("Todo name too long ({len} characters, max {max})")]
    NameTooLong {
        /// Length of the rejected name in characters
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// Ids start at 1
    #[error("Todo ids must be positive")]
    ZeroId,

    /// Two todos share an id
    #[error("Duplicate todo id {0}")]
    DuplicateId(TodoId),
}
