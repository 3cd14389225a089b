use crate::errors::{Error, Result};

/// Returns the sum of two numbers
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns the difference of two numbers
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns the product of two numbers
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns the quotient of two numbers, failing if the divisor is zero
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }

    Ok(a / b)
}
