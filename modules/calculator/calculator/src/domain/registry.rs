//! Operator registry: the fixed mapping from symbol to arithmetic function.

use calculator_sdk::Operator;

use super::error::DomainError;

/// A binary arithmetic function.
pub type BinaryFn = fn(f64, f64) -> Result<f64, DomainError>;

/// Resolve a client-supplied symbol.
///
/// # Errors
/// `UnsupportedOperator` when the symbol is not exactly one of `+ - * /`.
pub fn resolve(symbol: &str) -> Result<Operator, DomainError> {
    Operator::from_symbol(symbol).ok_or_else(|| DomainError::unsupported_operator(symbol))
}

#[must_use]
pub fn function(operator: Operator) -> BinaryFn {
    match operator {
        Operator::Add => add,
        Operator::Subtract => subtract,
        Operator::Multiply => multiply,
        Operator::Divide => divide,
    }
}

/// Apply `operator` to `a` and `b`.
///
/// # Errors
/// `DivisionByZero` when dividing by exactly zero, `NonFiniteResult` when the
/// result overflows to infinity or is NaN.
pub fn apply(operator: Operator, a: f64, b: f64) -> Result<f64, DomainError> {
    let result = function(operator)(a, b)?;
    if !result.is_finite() {
        return Err(DomainError::NonFiniteResult);
    }
    Ok(result)
}

/// Supported operators in advertised order.
#[must_use]
pub fn supported() -> &'static [Operator] {
    &Operator::ALL
}

#[allow(clippy::unnecessary_wraps)] // shares the BinaryFn signature
fn add(a: f64, b: f64) -> Result<f64, DomainError> {
    Ok(a + b)
}

#[allow(clippy::unnecessary_wraps)]
fn subtract(a: f64, b: f64) -> Result<f64, DomainError> {
    Ok(a - b)
}

#[allow(clippy::unnecessary_wraps)]
fn multiply(a: f64, b: f64) -> Result<f64, DomainError> {
    Ok(a * b)
}

fn divide(a: f64, b: f64) -> Result<f64, DomainError> {
    // exact comparison; -0.0 == 0.0 as well
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(a / b)
}
