use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Division by zero is not allowed.")]
    DivisionByZero,
    #[error("Could not parse numbers: '{0}', '{1}'")]
    InvalidNumbers(String, String),
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("Usage: <op> <a> <b>  (e.g., add 2 3)")]
    Usage,
}
