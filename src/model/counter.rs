use serde::{Deserialize, Serialize};
use std::fmt;

/// Tap count.
///
/// All operations are total. Increment saturates at `i64::MAX`; decrement
/// has no lower bound of its own, callers gate it with [`Counter::can_decrement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counter(i64);

impl Counter {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    /// Minus is only offered while there is something to take away.
    pub fn can_decrement(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Counter::default().value(), 0);
    }

    #[test]
    fn n_increments_from_zero_yield_n() {
        for n in [0usize, 1, 2, 17, 250] {
            let counter = (0..n).fold(Counter::default(), |c, _| c.increment());
            assert_eq!(counter.value(), n as i64);
        }
    }

    #[test]
    fn decrement_has_no_floor() {
        let counter = Counter::default().decrement();
        assert_eq!(counter.value(), -1);
        assert!(!counter.can_decrement());
    }

    #[test]
    fn increment_saturates() {
        assert_eq!(Counter::new(i64::MAX).increment().value(), i64::MAX);
    }

    #[test]
    fn reset_returns_zero() {
        assert_eq!(Counter::new(42).reset(), Counter::default());
    }

    #[test]
    fn can_decrement_only_when_positive() {
        assert!(!Counter::new(0).can_decrement());
        assert!(Counter::new(1).can_decrement());
    }
}
