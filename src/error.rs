//! Error types for the lispel frontend.
//!
//! Only the scanner and the parser produce Rust-level errors: they run before
//! any runtime value exists. Every failure after that point (unbound symbols,
//! bad argument types, division by zero, ...) is an ordinary
//! [`Value::Err`](crate::runtime::Value) flowing through the same return path
//! as successful results.

use thiserror::Error;

/// Frontend errors raised while turning source text into a parse tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Source text contains a character the language has no use for
    #[error("Syntax error at line {line}, column {col}: {message}")]
    SyntaxError {
        /// Line number where the error occurred (1-indexed)
        line: usize,
        /// Column number where the error occurred (1-indexed)
        col: usize,
        /// Error description
        message: String,
    },

    /// Input ended inside an unterminated expression
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// Token cannot start or continue an expression at this position
    #[error("Unexpected token: expected {expected}, got {got}")]
    UnexpectedToken {
        /// Expected token description
        expected: String,
        /// Actual token received
        got: String,
    },
}

/// Result type for lispel frontend operations
pub type Result<T> = std::result::Result<T, Error>;
