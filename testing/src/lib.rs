//! # Todo Store Testing
//!
//! Testing utilities for reducers built on `todo-store-core`.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then builder for reducer tests that can
//!   feed dispatched actions back like the store does
//! - Effect assertion helpers in [`assertions`]
//! - [`init_test_tracing`] to see reducer logs while debugging a test
//!
//! ## Example
//!
//! ```ignore
//! use todo_store_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::default())
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::AddTodo { name: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.todos.len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//!
//! // A rejected add and the event it feeds back, in one test
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::default())
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::AddTodo { name: String::new() })
//!     .with_feedback()
//!     .then_state(|state| assert!(state.last_error.is_some()))
//!     .run();
//! ```


pub use reducer_test::{assertions, ReducerTest, MAX_FEEDBACK_ROUNDS};

/// Install a test-friendly tracing subscriber
///
/// Output goes through the test harness's captured writer, filtered by
/// `RUST_LOG`. Safe to call from every test; only the first call installs.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
