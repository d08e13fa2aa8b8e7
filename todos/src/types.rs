//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of items that can be added, toggled
//! and deleted. The list itself lives in [`crate::list`]; this module holds
//! the item types plus the reducer's state and action.

use crate::error::TodoError;
use crate::list::TodoList;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use todo_store_core::version::Version;
use todo_store_macros::{Action, State};

/// Default upper bound on a todo name, in characters
pub const DEFAULT_MAX_NAME_LEN: usize = 500;

/// Identifier of a todo, assigned by the store
///
/// Ids are positive. Within a list they are unique and never change once
/// assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// The id given to the first todo of an empty list
    pub const FIRST: Self = Self(1);

    /// Wraps a raw id
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub name: String,
    /// Whether the todo is done
    pub done: bool,
}

impl Todo {
    /// Creates a todo that is not done yet
    #[must_use]
    pub fn new(id: TodoId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            done: false,
        }
    }

    /// Returns a copy with `done` flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

/// The caller's half of a new todo: just its name
///
/// The store assigns the id and the initial `done` flag. A `NewTodo` can only
/// be built from a valid name, so adding one to a list cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    name: String,
}

impl NewTodo {
    /// Validates `name` against `max_len` (in characters)
    ///
    /// The name is kept as given; surrounding whitespace is not stripped.
    ///
    /// # Errors
    ///
    /// - [`TodoError::EmptyName`] if the name is empty or only whitespace
    /// - [`TodoError::NameTooLong`] if it has more than `max_len` characters
    pub fn new(name: impl Into<String>, max_len: usize) -> Result<Self, TodoError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(TodoError::EmptyName);
        }

        let len = name.chars().count();
        if len > max_len {
            return Err(TodoError::NameTooLong { len, max: max_len });
        }

        Ok(Self { name })
    }

    /// The validated name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Turns the request into a todo with the given id
    #[must_use]
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo::new(id, self.name)
    }
}

/// State held by the todo store
///
/// `version` is `None` until the list first changes and is bumped on every
/// change after that, so holders can detect a new list without diffing it.
#[derive(State, Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    /// The current list
    pub todos: TodoList,
    /// Why the last command was rejected (cleared by the next accepted one)
    pub last_error: Option<String>,
    /// Change counter
    #[version]
    pub version: Option<Version>,
}

impl TodoState {
    /// Creates a state with an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state starting from `todos`
    #[must_use]
    pub fn with_todos(todos: TodoList) -> Self {
        Self {
            todos,
            ..Self::default()
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of todos that are done
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.completed_count()
    }
}

/// Actions the todo reducer handles
///
/// Commands come from the user. `ValidationFailed` is fed back by the store
/// when a command carried malformed input.
#[derive(Action, Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    // ========== Commands ==========
    /// Command: flip the `done` flag of a todo
    #[command]
    ToggleDone {
        /// Todo to toggle
        id: TodoId,
    },

    /// Command: append a new todo
    #[command]
    AddTodo {
        /// Name of the new todo
        name: String,
    },

    /// Command: remove a todo
    #[command]
    DeleteTodo {
        /// Todo to delete
        id: TodoId,
    },

    // ========== Events ==========
    /// Event: a command was rejected
    #[event]
    ValidationFailed {
        /// Error message
        error: String,
    },
}
