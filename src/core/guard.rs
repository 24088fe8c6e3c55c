//! Guard predicates for controlling pump transitions.
//!
//! Guards are pure boolean functions that decide whether a transition may
//! fire. The auto-mode policy is written entirely in terms of them.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use pumpwise::core::Guard;
///
/// let too_wet = Guard::new(|humidity: &i32| *humidity > 85);
///
/// assert!(too_wet.check(&90));
/// assert!(!too_wet.check(&60));
/// ```
pub struct Guard<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this subject.
    pub fn check(&self, subject: &T) -> bool {
        (self.predicate)(subject)
    }

    /// Combine two guards; both must pass.
    ///
    /// ```rust
    /// use pumpwise::core::Guard;
    ///
    /// let above_50 = Guard::new(|h: &i32| *h > 50);
    /// let below_70 = Guard::new(|h: &i32| *h < 70);
    /// let band = above_50.and(below_70);
    ///
    /// assert!(band.check(&60));
    /// assert!(!band.check(&40));
    /// assert!(!band.check(&80));
    /// ```
    pub fn and(self, other: Guard<T>) -> Self
    where
        T: 'static,
    {
        Guard::new(move |subject: &T| self.check(subject) && other.check(subject))
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Mode, RunState};

    #[test]
    fn guard_allows_matching_subjects() {
        let guard = Guard::new(|s: &RunState| matches!(s, RunState::Stopped));

        assert!(guard.check(&RunState::Stopped));
        assert!(!guard.check(&RunState::Running));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|m: &Mode| *m == Mode::Auto);

        let result1 = guard.check(&Mode::Auto);
        let result2 = guard.check(&Mode::Auto);

        assert_eq!(result1, result2);
    }

    #[test]
    fn and_requires_both() {
        let guard = Guard::new(|h: &i32| *h > 10).and(Guard::new(|h: &i32| h % 2 == 0));

        assert!(guard.check(&12));
        assert!(!guard.check(&13));
        assert!(!guard.check(&8));
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|h: &i32| *h < 30);
        let cloned = guard.clone();

        assert_eq!(guard.check(&20), cloned.check(&20));
        assert_eq!(guard.check(&40), cloned.check(&40));
    }
}
