//! Retry policy for transport failures.
//!
//! Paystack answers (any status) are never retried. Only connection errors and
//! timeouts are, with a fixed delay between attempts.

use std::time::Duration;

/// Default number of attempts, including the first one.
pub const DEFAULT_RETRY_ATTEMPTS: usize = 3;

/// Default pause between two attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(150);

/// How many times a request is attempted and how long to wait in between.
///
/// # Examples
///
/// ```
/// use paystack::RetryPolicy;
/// use std::time::Duration;
///
/// // Three attempts, 150ms apart
/// let policy = RetryPolicy::new(3, Duration::from_millis(150));
///
/// assert_eq!(policy.delay_for_attempt(1), Some(Duration::from_millis(150)));
/// assert_eq!(policy.delay_for_attempt(2), Some(Duration::from_millis(150)));
/// assert_eq!(policy.delay_for_attempt(3), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: usize,
    delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy making at most `attempts` attempts.
    ///
    /// Zero is treated as one: a request is always sent at least once.
    pub fn new(attempts: usize, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }

    /// A policy that sends each request exactly once.
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Total number of attempts, including the first.
    pub fn max_attempts(&self) -> usize {
        self.attempts
    }

    /// Fixed pause between attempts.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the delay to wait after the given failed attempt, or `None` if no
    /// attempts remain.
    ///
    /// # Arguments
    ///
    /// * `attempt` - The attempt that just failed (1-indexed)
    pub fn delay_for_attempt(&self, attempt: usize) -> Option<Duration> {
        if attempt < self.attempts {
            Some(self.delay)
        } else {
            None
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_delays() {
        let policy = RetryPolicy::new(4, Duration::from_millis(20));

        assert_eq!(policy.delay_for_attempt(1), Some(Duration::from_millis(20)));
        assert_eq!(policy.delay_for_attempt(2), Some(Duration::from_millis(20)));
        assert_eq!(policy.delay_for_attempt(3), Some(Duration::from_millis(20)));
        assert_eq!(policy.delay_for_attempt(4), None);
    }

    #[test]
    fn test_zero_attempts_means_one() {
        let policy = RetryPolicy::new(0, Duration::from_secs(1));
        assert_eq!(policy.max_attempts(), 1);
        assert_eq!(policy.delay_for_attempt(1), None);
    }

    #[test]
    fn test_defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay(), Duration::from_millis(150));
        assert_eq!(RetryPolicy::none().delay_for_attempt(1), None);
    }
}
