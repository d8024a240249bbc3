use thiserror::Error;

/// Errors surfaced by parsing and by division-like operations.
#[derive(Debug, Error)]
pub enum ArithmeticError {
    /// The literal is not of the form `[+-]?[0-9]+`.
    #[error("invalid integer literal {0:?}")]
    InvalidFormat(String),

    /// Divisor, modulus or rational denominator is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Reading tokens from the underlying stream failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
