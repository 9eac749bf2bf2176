//! Public models for the calculator module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the calculator module and its consumers.

use std::fmt;

/// One of the four supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in the order they are advertised to clients.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Exact symbol match; no trimming or aliases.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single successful evaluation, as kept in the history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationRecord {
    pub num1: f64,
    pub num2: f64,
    pub operator: Operator,
    pub result: f64,
}

/// Opening step of a chain: carries both operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstStep {
    pub num1: f64,
    pub num2: f64,
    pub operator: Operator,
}

/// Any later step: the first operand is the previous result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NextStep {
    pub num2: f64,
    pub operator: Operator,
}

/// A validated, non-empty chain of operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    first: FirstStep,
    rest: Vec<NextStep>,
}

impl Chain {
    #[must_use]
    pub fn new(first: FirstStep) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Append a step that uses the running result as its first operand.
    #[must_use]
    pub fn then(mut self, operator: Operator, num2: f64) -> Self {
        self.rest.push(NextStep { num2, operator });
        self
    }

    pub fn push(&mut self, step: NextStep) {
        self.rest.push(step);
    }

    #[must_use]
    pub fn first(&self) -> &FirstStep {
        &self.first
    }

    #[must_use]
    pub fn rest(&self) -> &[NextStep] {
        &self.rest
    }

    /// Number of steps, the opening one included. Never zero.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.rest.len() + 1
    }
}

/// Chain step as clients send it, before structural validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainStepInput {
    pub num1: Option<f64>,
    pub num2: Option<f64>,
    pub operator: Option<String>,
}

impl ChainStepInput {
    #[must_use]
    pub fn first(num1: f64, operator: impl Into<String>, num2: f64) -> Self {
        Self {
            num1: Some(num1),
            num2: Some(num2),
            operator: Some(operator.into()),
        }
    }

    #[must_use]
    pub fn next(operator: impl Into<String>, num2: f64) -> Self {
        Self {
            num1: None,
            num2: Some(num2),
            operator: Some(operator.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_through_lookup() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        assert_eq!(Operator::from_symbol("%"), None);
        assert_eq!(Operator::from_symbol(" +"), None);
        assert_eq!(Operator::from_symbol(""), None);
    }

    #[test]
    fn advertised_order_is_canonical() {
        let symbols: Vec<&str> = Operator::ALL.into_iter().map(Operator::symbol).collect();
        assert_eq!(symbols, ["+", "-", "*", "/"]);
        assert_eq!(Operator::Divide.to_string(), "/");
    }

    #[test]
    fn chain_builder_keeps_step_order() {
        let chain = Chain::new(FirstStep {
            num1: 10.0,
            num2: 5.0,
            operator: Operator::Add,
        })
        .then(Operator::Multiply, 2.0)
        .then(Operator::Subtract, 3.0);

        assert_eq!(chain.step_count(), 3);
        assert_eq!(chain.first().operator, Operator::Add);
        assert_eq!(
            chain.rest().iter().map(|s| s.operator).collect::<Vec<_>>(),
            [Operator::Multiply, Operator::Subtract]
        );
    }

    #[test]
    fn step_input_constructors() {
        let first = ChainStepInput::first(10.0, "+", 5.0);
        assert_eq!(first.num1, Some(10.0));
        assert_eq!(first.operator.as_deref(), Some("+"));

        let next = ChainStepInput::next("*", 2.0);
        assert_eq!(next.num1, None);
        assert_eq!(next.num2, Some(2.0));
    }
}
