//! Domain layer for the calculator module

pub mod chain;
pub mod error;
pub mod history;
pub mod registry;
pub mod service;

#[cfg(test)]
mod service_test;
