use std::sync::Arc;

use calculator_sdk::{
    CalculatorClient, CalculatorError, Chain, ChainStepInput, OperationRecord, Operator,
};

use crate::domain::service::Service;

/// In-process [`CalculatorClient`] backed by the module's service.
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalculatorClient for LocalClient {
    fn calculate(&self, num1: f64, num2: f64, operator: &str) -> Result<f64, CalculatorError> {
        self.service
            .calculate(num1, num2, operator)
            .map_err(Into::into)
    }

    fn calculate_chain(&self, steps: &[ChainStepInput]) -> Result<f64, CalculatorError> {
        self.service.calculate_chain(steps).map_err(Into::into)
    }

    fn evaluate_chain(&self, chain: &Chain) -> Result<f64, CalculatorError> {
        self.service.evaluate_chain(chain).map_err(Into::into)
    }

    fn history(&self) -> Vec<OperationRecord> {
        self.service.history()
    }

    fn clear_history(&self) -> usize {
        self.service.clear_history()
    }

    fn supported_operators(&self) -> Vec<Operator> {
        Service::supported_operators().to_vec()
    }
}
