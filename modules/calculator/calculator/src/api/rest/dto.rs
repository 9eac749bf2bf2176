//! REST DTOs for the calculator module.

use calc_errors::ValidationViolation;
use calculator_sdk::{ChainStepInput, OperationRecord, Operator};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::extract::Validate;

/// Operator symbol accepted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OperatorDto {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl From<OperatorDto> for Operator {
    fn from(op: OperatorDto) -> Self {
        match op {
            OperatorDto::Add => Operator::Add,
            OperatorDto::Subtract => Operator::Subtract,
            OperatorDto::Multiply => Operator::Multiply,
            OperatorDto::Divide => Operator::Divide,
        }
    }
}

impl OperatorDto {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        Operator::from(self).symbol()
    }
}

/// Request DTO for a single operation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({"num1": 10, "num2": 5, "operator": "+"}))]
pub struct CalculateRequest {
    pub num1: f64,
    pub num2: f64,
    pub operator: OperatorDto,
}

impl Validate for CalculateRequest {}

/// One element of a chain request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChainStepDto {
    /// First operand; only read on the first step.
    #[serde(default)]
    pub num1: Option<f64>,
    pub num2: f64,
    pub operator: OperatorDto,
}

impl From<&ChainStepDto> for ChainStepInput {
    fn from(step: &ChainStepDto) -> Self {
        Self {
            num1: step.num1,
            num2: Some(step.num2),
            operator: Some(step.operator.symbol().to_owned()),
        }
    }
}

/// Request DTO for a chain of operations.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({"operations": [
    {"num1": 10, "operator": "+", "num2": 5},
    {"operator": "*", "num2": 2},
    {"operator": "-", "num2": 3}
]}))]
pub struct CalculateChainRequest {
    pub operations: Vec<ChainStepDto>,
}

impl CalculateChainRequest {
    #[must_use]
    pub fn to_steps(&self) -> Vec<ChainStepInput> {
        self.operations.iter().map(ChainStepInput::from).collect()
    }
}

impl Validate for CalculateChainRequest {
    fn validate(&self) -> Result<(), Vec<ValidationViolation>> {
        if self.operations.is_empty() {
            return Err(vec![ValidationViolation::new(
                "operations",
                "at least one operation is required",
            )]);
        }
        Ok(())
    }
}

/// Result of a single operation or a chain.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"result": 15.0, "message": "10 + 5 = 15"}))]
pub struct OperationResponse {
    pub result: f64,
    pub message: String,
}

/// One history entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryItemDto {
    pub num1: f64,
    pub num2: f64,
    pub operator: String,
    pub result: f64,
}

impl From<OperationRecord> for HistoryItemDto {
    fn from(record: OperationRecord) -> Self {
        Self {
            num1: record.num1,
            num2: record.num2,
            operator: record.operator.symbol().to_owned(),
            result: record.result,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    pub history: Vec<HistoryItemDto>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperationsResponse {
    pub operations: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_dto_parses_symbols() {
        let req: CalculateRequest =
            serde_json::from_str(r#"{"num1": 1, "num2": 2, "operator": "/"}"#).unwrap();
        assert_eq!(req.operator, OperatorDto::Divide);
        assert_eq!(Operator::from(req.operator), Operator::Divide);
    }

    #[test]
    fn test_operator_dto_rejects_unknown_symbol() {
        let res: Result<CalculateRequest, _> =
            serde_json::from_str(r#"{"num1": 1, "num2": 2, "operator": "%"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_chain_step_num1_is_optional() {
        let req: CalculateChainRequest = serde_json::from_str(
            r#"{"operations": [{"num1": 10, "operator": "+", "num2": 5}, {"operator": "*", "num2": 2}]}"#,
        )
        .unwrap();
        let steps = req.to_steps();
        assert_eq!(steps[0], ChainStepInput::first(10.0, "+", 5.0));
        assert_eq!(steps[1], ChainStepInput::next("*", 2.0));
    }

    #[test]
    fn test_chain_step_requires_num2() {
        let res: Result<CalculateChainRequest, _> =
            serde_json::from_str(r#"{"operations": [{"num1": 10, "operator": "+"}]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_empty_chain_fails_validation() {
        let req = CalculateChainRequest { operations: vec![] };
        let violations = req.validate().unwrap_err();
        assert_eq!(violations[0].field, "operations");
    }

    #[test]
    fn test_history_item_uses_symbol() {
        let dto = HistoryItemDto::from(OperationRecord {
            num1: 10.0,
            num2: 5.0,
            operator: Operator::Subtract,
            result: 5.0,
        });
        assert_eq!(dto.operator, "-");
    }
}
