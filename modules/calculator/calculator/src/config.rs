//! Configuration for the calculator module.

use serde::{Deserialize, Serialize};

/// Configuration for the calculator module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct CalculatorConfig {
    /// Name reported by the health endpoint.
    pub service_name: String,

    /// Upper bound on kept history records; oldest are evicted first.
    /// `None` keeps everything for the lifetime of the process.
    pub max_history: Option<usize>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            service_name: "calculator-api".to_owned(),
            max_history: None,
        }
    }
}
