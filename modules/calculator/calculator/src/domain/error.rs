//! Domain error types for the calculator module.

use calculator_sdk::CalculatorError;
use thiserror::Error;

/// Domain-level errors for the calculator module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The symbol is not one of `+ - * /`.
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("At least one operation is required")]
    EmptyChain,

    #[error("The first operation must include 'num1'")]
    MissingFirstOperand,

    /// A chain step lacks `operator` or `num2`.
    #[error("Operation {index} must include 'operator' and 'num2'")]
    MalformedStep { index: usize },

    /// The result overflowed to infinity or is NaN.
    #[error("Result is not a finite number")]
    NonFiniteResult,
}

impl DomainError {
    #[must_use]
    pub fn unsupported_operator(symbol: impl Into<String>) -> Self {
        Self::UnsupportedOperator(symbol.into())
    }

    #[must_use]
    pub fn malformed_step(index: usize) -> Self {
        Self::MalformedStep { index }
    }
}

impl From<DomainError> for CalculatorError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UnsupportedOperator(symbol) => {
                CalculatorError::unsupported_operator(symbol)
            }
            DomainError::DivisionByZero => CalculatorError::DivisionByZero,
            DomainError::EmptyChain => CalculatorError::EmptyChain,
            DomainError::MissingFirstOperand => CalculatorError::MissingFirstOperand,
            DomainError::MalformedStep { index } => CalculatorError::MalformedStep { index },
            DomainError::NonFiniteResult => CalculatorError::NonFiniteResult,
        }
    }
}
