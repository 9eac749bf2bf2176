//! Error payloads shared by the calculator HTTP surface.
//!
//! Everything that leaves the API as an error is a [`Problem`]
//! (`application/problem+json`, RFC 9457).

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod problem;

pub use problem::{
    APPLICATION_PROBLEM_JSON, Problem, ValidationViolation, internal_error, unprocessable_entity,
};
