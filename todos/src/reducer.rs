//! Reducer logic for the todo list.
//!
//! Each command runs the matching pure transition and swaps the result into
//! the state. Malformed input never touches the list: the reducer asks the
//! store to feed back a `ValidationFailed` event instead.

use crate::config::TodoConfig;
use crate::list::TodoList;
use crate::transitions;
use crate::types::{NewTodo, TodoAction, TodoState, DEFAULT_MAX_NAME_LEN};
use todo_store_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Environment for the todo reducer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TodoEnvironment {
    /// Longest accepted todo name, in characters
    pub max_name_len: usize,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub const fn new(max_name_len: usize) -> Self {
        Self { max_name_len }
    }

    /// Environment matching a loaded configuration
    #[must_use]
    pub const fn from_config(config: &TodoConfig) -> Self {
        Self::new(config.max_name_len)
    }
}

impl Default for TodoEnvironment {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NAME_LEN)
    }
}

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Replaces the list after an accepted command
    ///
    /// The version only moves when the list actually changed, so no-op
    /// toggles and deletes are invisible to version watchers.
    fn commit(state: &mut TodoState, next: TodoList) {
        state.last_error = None;

        if next == state.todos {
            tracing::debug!("Command left the list unchanged");
            return;
        }

        state.todos = next;
        state.bump_version();
        tracing::debug!(
            todos = state.todos.len(),
            version = ?state.version(),
            "List updated"
        );
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let kind = if action.is_event() { "event" } else { "command" };
        tracing::trace!(kind, ?action, "Reducing todo action");

        match action {
            // ========== Commands ==========
            TodoAction::ToggleDone { id } => {
                let next = transitions::toggle_done(&state.todos, id);
                Self::commit(state, next);
            },

            TodoAction::AddTodo { name } => match NewTodo::new(name, env.max_name_len) {
                Ok(new_todo) => {
                    let next = transitions::add_todo(&state.todos, new_todo);
                    Self::commit(state, next);
                },
                Err(error) => {
                    tracing::info!(%error, "Rejected new todo");
                    return smallvec![Effect::dispatch(TodoAction::ValidationFailed {
                        error: error.to_string(),
                    })];
                },
            },

            TodoAction::DeleteTodo { id } => {
                let next = transitions::delete_todo(&state.todos, id);
                Self::commit(state, next);
            },

            // ========== Events ==========
            TodoAction::ValidationFailed { error } => {
                state.last_error = Some(error);
            },
        }

        SmallVec::new()
    }
}
