//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorClient`)
//! - Models (`Operator`, `OperationRecord`, `Chain`, `ChainStepInput`)
//! - Error type (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, ChainStepInput};
//!
//! let client: Arc<dyn CalculatorClient> = module.client();
//! let sum = client.calculate(1.0, 2.0, "+")?;
//! let chained = client.calculate_chain(&[
//!     ChainStepInput::first(10.0, "+", 5.0),
//!     ChainStepInput::next("*", 2.0),
//! ])?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT ===
mod api;
pub use api::CalculatorClient;

// === ERRORS ===
mod error;
pub use error::CalculatorError;

// === MODELS ===
pub mod models;
pub use models::{Chain, ChainStepInput, FirstStep, NextStep, OperationRecord, Operator};
