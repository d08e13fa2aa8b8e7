//! # Todo Store Runtime
//!
//! The `Store` is the caller-side state container: it owns the current state,
//! hands it to the reducer one action at a time, and executes the effects the
//! reducer returns.
//!
//! Everything runs synchronously on the caller's thread. A `send` returns once
//! the action and every action it dispatched have been reduced.
//!
//! ## Example
//!
//! ```ignore
//! use todo_store_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use todo_store_core::{effect::Effect, reducer::Reducer};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Dispatched actions kept producing further dispatches
        ///
        /// State changes made before the limit was hit are kept; the
        /// remaining queued actions are dropped.
        #[error("Effect feedback exceeded {limit} rounds")]
        FeedbackLimitExceeded {
            /// The configured limit
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Store configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of feedback rounds a single `send` may run
    pub max_feedback_depth: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_depth: 16,
        }
    }
}

impl StoreConfig {
    /// Set the maximum feedback depth
    #[must_use]
    pub const fn with_max_feedback_depth(mut self, depth: usize) -> Self {
        self.max_feedback_depth = depth;
        self
    }
}

/// The Store - runtime coordinator for a reducer
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: S,
    reducer: R,
    environment: E,
    config: StoreConfig,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    A: std::fmt::Debug,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_config(initial_state, reducer, environment, StoreConfig::default())
    }

    /// Create a new Store with custom configuration
    #[must_use]
    pub const fn with_config(
        initial_state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
    ) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
            config,
        }
    }

    /// Send an action to the store
    ///
    /// Runs the reducer, then feeds every `Effect::Dispatch` back into it
    /// round by round until no effects remain. Actions dispatched in the same
    /// round are reduced in the order they were returned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FeedbackLimitExceeded`] when dispatched actions
    /// keep producing new dispatches past `max_feedback_depth` rounds.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub fn send(&mut self, action: A) -> Result<(), StoreError> {
        let mut round = vec![action];
        let mut depth = 0;

        while !round.is_empty() {
            if depth > self.config.max_feedback_depth {
                tracing::warn!(
                    limit = self.config.max_feedback_depth,
                    dropped = round.len(),
                    "Effect feedback limit exceeded"
                );
                return Err(StoreError::FeedbackLimitExceeded {
                    limit: self.config.max_feedback_depth,
                });
            }

            let mut next = Vec::new();
            for action in round {
                metrics::counter!("store.actions.total").increment(1);
                tracing::debug!(?action, depth, "Processing action");

                let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
                tracing::trace!("Reducer completed, returned {} effects", effects.len());

                for effect in effects {
                    match effect {
                        Effect::None => {},
                        Effect::Dispatch(action) => {
                            metrics::counter!("store.effects.dispatched").increment(1);
                            next.push(*action);
                        },
                    }
                }
            }

            round = next;
            depth += 1;
        }

        Ok(())
    }

    /// Read current state via a closure
    ///
    /// ```ignore
    /// let count = store.state(|s| s.todos.len());
    /// ```
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        f(&self.state)
    }

    /// Consume the store and return the current state
    pub fn into_state(self) -> S {
        self.state
    }
}
