//! In-memory todo list built on the todo store reducer architecture.
//!
//! The core is three pure transitions in [`transitions`]: toggle, add and
//! delete. Each takes the current [`TodoList`] and returns a new one. The
//! [`TodoReducer`] wires them to [`TodoAction`] commands so a
//! `todo_store_runtime::Store` can hold the list for a view, and
//! [`console`] is that view for a terminal.
//!
//! # Quick Start
//!
//! ```
//! use todos::transitions::{add_todo, delete_todo, toggle_done};
//! use todos::{NewTodo, TodoId, TodoList, DEFAULT_MAX_NAME_LEN};
//!
//! # fn main() -> Result<(), todos::TodoError> {
//! let list = TodoList::new();
//! let list = add_todo(&list, NewTodo::new("Buy Milk", DEFAULT_MAX_NAME_LEN)?);
//! let list = add_todo(&list, NewTodo::new("Get bread", DEFAULT_MAX_NAME_LEN)?);
//!
//! let list = toggle_done(&list, TodoId::new(1));
//! assert_eq!(list.completed_count(), 1);
//!
//! let list = delete_todo(&list, TodoId::new(2));
//! assert_eq!(list.len(), 1);
//!
//! // Ids come from the highest remaining id, not the last element
//! let list = add_todo(&list, NewTodo::new("Walk the dog", DEFAULT_MAX_NAME_LEN)?);
//! assert!(list.contains(TodoId::new(2)));
//! # Ok(())
//! # }
//! ```
//!
//! Through a store:
//!
//! ```
//! use todo_store_runtime::Store;
//! use todos::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//!
//! # fn main() -> Result<(), todo_store_runtime::StoreError> {
//! let mut store = Store::new(TodoState::new(), TodoReducer::new(), TodoEnvironment::default());
//!
//! store.send(TodoAction::AddTodo { name: "Buy Milk".to_string() })?;
//! store.send(TodoAction::AddTodo { name: String::new() })?;
//!
//! assert_eq!(store.state(TodoState::count), 1);
//! assert!(store.state(|s| s.last_error.is_some()));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod list;
pub mod reducer;
pub mod transitions;
pub mod types;

// Re-export commonly used types
pub use config::{ConfigError, TodoConfig};
pub use error::TodoError;
pub use list::{seed, TodoList};
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{NewTodo, Todo, TodoAction, TodoId, TodoState, DEFAULT_MAX_NAME_LEN};
