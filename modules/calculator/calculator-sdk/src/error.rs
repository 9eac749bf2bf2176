/// Error type for calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("unsupported operator: {symbol}")]
    UnsupportedOperator { symbol: String },

    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("at least one operation is required")]
    EmptyChain,

    #[error("the first operation must include 'num1'")]
    MissingFirstOperand,

    #[error("operation {index} must include 'operator' and 'num2'")]
    MalformedStep { index: usize },

    #[error("result is not a finite number")]
    NonFiniteResult,
}

impl CalculatorError {
    #[must_use]
    pub fn unsupported_operator(symbol: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            symbol: symbol.into(),
        }
    }
}
