//! Domain service for the calculator
//!
//! Evaluates single operations and chains, recording every successful
//! evaluation in the history log.

use calculator_sdk::{Chain, ChainStepInput, OperationRecord, Operator};
use tracing::{debug, info};

use super::chain::build_chain;
use super::error::DomainError;
use super::history::HistoryLog;
use super::registry;
use crate::config::CalculatorConfig;

/// Calculator domain service.
///
/// Shared between handlers behind an `Arc`; the history is the only
/// mutable state.
#[derive(Debug, Default)]
pub struct Service {
    history: HistoryLog,
}

impl Service {
    #[must_use]
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            history: HistoryLog::new(config.max_history),
        }
    }

    /// Evaluate `num1 <operator> num2` and record it.
    ///
    /// # Errors
    /// `UnsupportedOperator`, `DivisionByZero` or `NonFiniteResult`; nothing
    /// is recorded then.
    pub fn calculate(&self, num1: f64, num2: f64, operator: &str) -> Result<f64, DomainError> {
        let operator = registry::resolve(operator)?;
        let record = evaluate(num1, num2, operator)?;
        debug!(num1, num2, %operator, result = record.result, "evaluated operation");
        self.history.append(record);
        Ok(record.result)
    }

    /// Validate `steps` and fold them left to right.
    ///
    /// # Errors
    /// Structural errors are reported before any step runs. An arithmetic
    /// failure stops the fold; steps already evaluated stay recorded.
    pub fn calculate_chain(&self, steps: &[ChainStepInput]) -> Result<f64, DomainError> {
        let chain = build_chain(steps)?;
        self.evaluate_chain(&chain)
    }

    /// Fold a typed chain, one history record per evaluated step.
    ///
    /// # Errors
    /// The first arithmetic failure; earlier steps stay recorded.
    pub fn evaluate_chain(&self, chain: &Chain) -> Result<f64, DomainError> {
        let mut records = Vec::with_capacity(chain.step_count());
        let outcome = fold_chain(chain, &mut records);
        let evaluated = records.len();
        self.history.append_all(records);

        match &outcome {
            Ok(result) => info!(steps = evaluated, result, "chain evaluated"),
            Err(e) => info!(
                steps = chain.step_count(),
                evaluated,
                error = %e,
                "chain aborted"
            ),
        }
        outcome
    }

    #[must_use]
    pub fn history(&self) -> Vec<OperationRecord> {
        self.history.snapshot()
    }

    /// Returns the number of records removed.
    pub fn clear_history(&self) -> usize {
        let removed = self.history.clear();
        info!(removed, "history cleared");
        removed
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn supported_operators() -> &'static [Operator] {
        registry::supported()
    }
}

fn evaluate(num1: f64, num2: f64, operator: Operator) -> Result<OperationRecord, DomainError> {
    let result = registry::apply(operator, num1, num2)?;
    Ok(OperationRecord {
        num1,
        num2,
        operator,
        result,
    })
}

fn fold_chain(chain: &Chain, records: &mut Vec<OperationRecord>) -> Result<f64, DomainError> {
    let first = chain.first();
    let mut acc = evaluate(first.num1, first.num2, first.operator)?;
    records.push(acc);

    for step in chain.rest() {
        acc = evaluate(acc.result, step.num2, step.operator)?;
        records.push(acc);
    }
    Ok(acc.result)
}
