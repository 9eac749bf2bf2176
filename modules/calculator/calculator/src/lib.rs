//! Calculator Module
//!
//! Arithmetic over `+ - * /`, left-to-right operation chains, and an
//! in-memory history, exposed over REST.
//!
//! ## Architecture
//!
//! - `domain/registry.rs` - operator symbols to arithmetic functions
//! - `domain/service.rs` - evaluation and chain folding
//! - `domain/history.rs` - shared history log
//! - `api/rest/` - DTOs, handlers, routes, error mapping
//! - `module.rs` - wiring of service, client, and router
//!
//! The public API is defined in `calculator-sdk` and re-exported here.

pub use calculator_sdk::{
    CalculatorClient, CalculatorError, Chain, ChainStepInput, OperationRecord, Operator,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::CalculatorModule;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;

pub use config::CalculatorConfig;
