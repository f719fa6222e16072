//! Domain errors.
//!
//! Every guarded operation in the tour fails the same way: the input fell
//! outside the range the operation is defined on. The offending input is
//! carried in the variant so callers can report it.

/// Input outside an operation's valid domain.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("factorial is not defined for negative numbers (got {0})")]
    NegativeFactorial(i64),

    #[error("prime check requires number >= 2 (got {0})")]
    PrimeBelowTwo(i64),

    #[error("negative exponents not supported (got {0})")]
    NegativeExponent(i64),
}

impl DomainError {
    /// The input that was rejected.
    pub fn input(&self) -> i64 {
        match *self {
            Self::NegativeFactorial(n) | Self::PrimeBelowTwo(n) | Self::NegativeExponent(n) => n,
        }
    }
}

/// Result alias for domain-checked operations.
pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        assert_eq!(
            DomainError::NegativeFactorial(-1).to_string(),
            "factorial is not defined for negative numbers (got -1)"
        );
        assert_eq!(
            DomainError::PrimeBelowTwo(1).to_string(),
            "prime check requires number >= 2 (got 1)"
        );
        assert_eq!(
            DomainError::NegativeExponent(-3).to_string(),
            "negative exponents not supported (got -3)"
        );
    }

    #[test]
    fn test_input() {
        assert_eq!(DomainError::NegativeFactorial(-7).input(), -7);
        assert_eq!(DomainError::PrimeBelowTwo(0).input(), 0);
        assert_eq!(DomainError::NegativeExponent(-2).input(), -2);
    }
}
