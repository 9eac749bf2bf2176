//! Structural validation of loosely-shaped chain steps.

use calculator_sdk::{Chain, ChainStepInput, FirstStep, NextStep};

use super::error::DomainError;
use super::registry;

/// Turn client-supplied steps into a typed [`Chain`].
///
/// Checks run in this order: empty list, missing `num1` on the first step,
/// then per step (in order) missing `operator`/`num2` and unknown symbols.
/// A `num1` on any later step is ignored.
///
/// # Errors
/// `EmptyChain`, `MissingFirstOperand`, `MalformedStep` or `UnsupportedOperator`.
pub fn build_chain(steps: &[ChainStepInput]) -> Result<Chain, DomainError> {
    let Some((head, tail)) = steps.split_first() else {
        return Err(DomainError::EmptyChain);
    };

    let Some(num1) = head.num1 else {
        return Err(DomainError::MissingFirstOperand);
    };
    let first = parse_step(0, head)?;
    let mut chain = Chain::new(FirstStep {
        num1,
        num2: first.num2,
        operator: first.operator,
    });

    for (offset, step) in tail.iter().enumerate() {
        chain.push(parse_step(offset + 1, step)?);
    }

    Ok(chain)
}

fn parse_step(index: usize, step: &ChainStepInput) -> Result<NextStep, DomainError> {
    let (Some(symbol), Some(num2)) = (step.operator.as_deref(), step.num2) else {
        return Err(DomainError::malformed_step(index));
    };
    let operator = registry::resolve(symbol)?;
    Ok(NextStep { num2, operator })
}
