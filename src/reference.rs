//! Transaction reference generation.

use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Generator for unique transaction references.
///
/// References look like `TXN_66f1c2a80b1e3_9f3a01c2`: a 13-character time
/// token (Unix seconds then microseconds, in hex) followed by 4 random bytes.
/// They are suitable as idempotency keys for
/// [`TransactionService::initialize`](crate::services::TransactionService::initialize).
#[derive(Debug, Clone, Copy, Default)]
pub struct TransRef;

impl TransRef {
    /// Generates a fresh reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use paystack::TransRef;
    ///
    /// let reference = TransRef::generate();
    /// assert!(reference.starts_with("TXN_"));
    /// ```
    pub fn generate() -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let suffix: u32 = rand::thread_rng().gen();

        format!(
            "TXN_{:08x}{:05x}_{:08x}",
            now.as_secs(),
            now.subsec_micros(),
            suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_format() {
        let reference = TransRef::generate();
        let parts: Vec<&str> = reference.split('_').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "TXN");
        assert_eq!(parts[1].len(), 13);
        assert_eq!(parts[2].len(), 8);
        assert!(parts[1..]
            .iter()
            .all(|part| part.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())));
        assert!(reference.len() > 10);
    }

    #[test]
    fn test_consecutive_references_differ() {
        let first = TransRef::generate();
        let second = TransRef::generate();
        assert_ne!(first, second);
    }
}
