//! Calculator API trait
//!
//! Contract trait for the calculator service.

use crate::error::CalculatorError;
use crate::models::{Chain, ChainStepInput, OperationRecord, Operator};

/// Calculator API trait.
///
/// Every successful evaluation is recorded in the service's history.
pub trait CalculatorClient: Send + Sync {
    /// Apply `operator` (one of `+ - * /`) to `num1` and `num2`.
    ///
    /// # Errors
    /// `UnsupportedOperator` for an unknown symbol, `DivisionByZero` for `x / 0`.
    fn calculate(&self, num1: f64, num2: f64, operator: &str) -> Result<f64, CalculatorError>;

    /// Validate loosely-shaped steps and fold them left to right.
    ///
    /// # Errors
    /// Any structural error (`EmptyChain`, `MissingFirstOperand`, `MalformedStep`,
    /// `UnsupportedOperator`) before evaluation starts, or the first arithmetic
    /// failure met during the fold.
    fn calculate_chain(&self, steps: &[ChainStepInput]) -> Result<f64, CalculatorError>;

    /// Fold an already validated chain.
    ///
    /// # Errors
    /// The first arithmetic failure met during the fold.
    fn evaluate_chain(&self, chain: &Chain) -> Result<f64, CalculatorError>;

    /// Snapshot of the history, oldest first.
    fn history(&self) -> Vec<OperationRecord>;

    /// Drop every history record. Returns how many were removed.
    fn clear_history(&self) -> usize;

    fn supported_operators(&self) -> Vec<Operator>;
}
