//! State versioning.
//!
//! A `Version` counts the changes a piece of state has gone through. Holders
//! of state compare versions to detect that a new value was produced without
//! diffing the state itself.

/// Monotonic change counter for a state value.
///
/// # Examples
///
/// ```
/// use todo_store_core::version::Version;
///
/// let v1 = Version::new(1);
/// let v2 = v1.next();
/// assert_eq!(v2.value(), 2);
/// assert!(v1 < v2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u64);

impl Version {
    /// Create a new `Version` with the given value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the version number.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Get the next version (current + 1).
    ///
    /// Saturates at `u64::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_increments() {
        assert_eq!(Version::new(4).next().value(), 5);
    }

    #[test]
    fn next_saturates() {
        assert_eq!(Version::new(u64::MAX).next(), Version::new(u64::MAX));
    }
}
