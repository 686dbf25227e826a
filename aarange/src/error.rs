//! Module containing the universal error type
use thiserror::Error;

/// Universal error type for range arithmetic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input ended before a value was complete
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A required delimiter is missing
    #[error("expected '{expected}' in {input:?}")]
    MissingDelimiter {
        /// The delimiter that was expected
        expected: char,
        /// The text being parsed
        input: String,
    },

    /// A scalar value could not be parsed
    #[error("invalid scalar {0:?}")]
    BadScalar(String),

    /// An error symbol index could not be parsed
    #[error("invalid symbol index {0:?}")]
    BadIndex(String),

    /// Text remained after a complete value was parsed
    #[error("trailing input {0:?}")]
    TrailingInput(String),

    /// The operand's bounds leave the function's domain
    #[error("{op} is undefined on part of {bounds}")]
    Domain {
        /// Name of the operation
        op: &'static str,
        /// Bounds of the offending operand, in `[lo,hi]` form
        bounds: String,
    },
}
