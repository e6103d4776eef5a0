use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SortError {
    /// Decimal digits are only defined for non-negative keys.
    #[error("invalid input at index {index}: {value} is negative")]
    InvalidInput { index: usize, value: String },
}
