//! Effect descriptions.
//!
//! Effects are NOT executed by reducers. They are values describing what
//! should happen next, returned from a reducer and executed by the store.

/// Effect type - describes follow-up work for the store
///
/// # Type Parameters
///
/// - `Action`: The action type that effects can produce (feedback loop)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Feed an action back into the reducer once the current one completes
    Dispatch(Box<Action>),
}

impl<Action> Effect<Action> {
    /// Build a `Dispatch` effect for `action`
    #[must_use]
    pub fn dispatch(action: Action) -> Self {
        Self::Dispatch(Box::new(action))
    }

    /// Returns true for `Effect::None`
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The action a `Dispatch` effect carries, if any
    #[must_use]
    pub fn dispatched(&self) -> Option<&Action> {
        match self {
            Self::Dispatch(action) => Some(action),
            Self::None => None,
        }
    }
}
