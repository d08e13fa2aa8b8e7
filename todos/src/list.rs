//! The ordered todo list.

use crate::error::TodoError;
use crate::types::{Todo, TodoId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordered collection of todos; insertion order is display order
///
/// Invariants, checked whenever a list comes from outside the crate:
/// - every id is positive
/// - no two todos share an id
/// - every name is non-blank
///
/// Serializes as a plain JSON array of todos. Deserializing goes through
/// [`TodoList::from_todos`], so a malformed array is rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Todo>", into = "Vec<Todo>")]
pub struct TodoList(Vec<Todo>);

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a list from todos supplied by a caller
    ///
    /// # Errors
    ///
    /// - [`TodoError::ZeroId`] if any id is 0
    /// - [`TodoError::DuplicateId`] if two todos share an id
    /// - [`TodoError::EmptyName`] if any name is blank
    pub fn from_todos(todos: Vec<Todo>) -> Result<Self, TodoError> {
        let mut seen = BTreeSet::new();

        for todo in &todos {
            if todo.id.value() == 0 {
                return Err(TodoError::ZeroId);
            }
            if !seen.insert(todo.id) {
                return Err(TodoError::DuplicateId(todo.id));
            }
            if todo.name.trim().is_empty() {
                return Err(TodoError::EmptyName);
            }
        }

        Ok(Self(todos))
    }

    /// Wraps todos that are known to satisfy the list invariants
    pub(crate) const fn from_trusted(todos: Vec<Todo>) -> Self {
        Self(todos)
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list has no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the todos in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.0.iter()
    }

    /// The todos as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Todo] {
        &self.0
    }

    /// Returns the todo with `id`
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.0.iter().find(|todo| todo.id == id)
    }

    /// Checks if a todo with `id` exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of todos that are done
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|todo| todo.done).count()
    }

    /// Iterates the ids in display order
    pub fn ids(&self) -> impl Iterator<Item = TodoId> + '_ {
        self.0.iter().map(|todo| todo.id)
    }

    /// The id the next added todo receives
    ///
    /// One past the highest id in the list, or [`TodoId::FIRST`] when empty.
    /// The last element is irrelevant: deleting todos out of order never
    /// lets a new id collide with a remaining one.
    ///
    /// If the highest id is `u64::MAX` the lowest unused id is returned
    /// instead.
    #[must_use]
    pub fn next_id(&self) -> TodoId {
        match self.ids().map(TodoId::value).max() {
            None => TodoId::FIRST,
            Some(max) => max
                .checked_add(1)
                .map_or_else(|| self.lowest_free_id(), TodoId::new),
        }
    }

    fn lowest_free_id(&self) -> TodoId {
        let taken: BTreeSet<u64> = self.ids().map(TodoId::value).collect();
        (1..=u64::MAX)
            .find(|id| !taken.contains(id))
            .map_or(TodoId::FIRST, TodoId::new)
    }
}

impl TryFrom<Vec<Todo>> for TodoList {
    type Error = TodoError;

    fn try_from(todos: Vec<Todo>) -> Result<Self, Self::Error> {
        Self::from_todos(todos)
    }
}

impl From<TodoList> for Vec<Todo> {
    fn from(list: TodoList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The list a fresh session starts with
#[must_use]
pub fn seed() -> TodoList {
    TodoList::from_trusted(vec![
        Todo::new(TodoId::new(1), "Write the blog post"),
        Todo::new(TodoId::new(2), "Buy Christmas presents"),
        Todo::new(TodoId::new(3), "Leave Santa his mince pies"),
    ])
}
