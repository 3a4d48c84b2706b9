use thiserror::Error;

/// Reasons the validator rejects a candidate expense.
///
/// All three variants are recoverable: the caller drops the input and the
/// store stays untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid category.")]
    InvalidCategory,
    #[error("Amount must be positive.")]
    InvalidAmount,
    #[error("Invalid date.")]
    InvalidDate,
}
