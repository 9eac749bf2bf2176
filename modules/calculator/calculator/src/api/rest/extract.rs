//! JSON body extraction with schema validation.
//!
//! A body that parses but does not fit the request DTO, or is not JSON at
//! all, is answered with a 422 Problem, keeping schema violations apart from
//! domain errors (400).

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use calc_errors::{Problem, ValidationViolation, unprocessable_entity};
use serde::de::DeserializeOwned;

use super::error::CODE_VALIDATION;

/// Checks that serde alone cannot express.
pub trait Validate {
    /// # Errors
    /// One violation per offending field.
    fn validate(&self) -> Result<(), Vec<ValidationViolation>> {
        Ok(())
    }
}

/// `Json<T>` that rejects with a Problem instead of plain text.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let instance = req.uri().path().to_owned();

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| rejection_to_problem(&rejection, &instance))?;

        value.validate().map_err(|violations| {
            tracing::debug!(count = violations.len(), "request failed validation");
            validation_problem("Request body failed validation", violations, &instance)
        })?;

        Ok(Self(value))
    }
}

fn rejection_to_problem(rejection: &JsonRejection, instance: &str) -> Problem {
    tracing::debug!(error = %rejection, "rejected request body");
    match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => validation_problem(
            "Request body does not match the expected schema",
            vec![ValidationViolation::new("body", rejection.body_text())],
            instance,
        ),
        JsonRejection::MissingJsonContentType(_) => Problem::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported Media Type",
            "Expected request with `Content-Type: application/json`",
        )
        .with_code(CODE_VALIDATION)
        .with_instance(instance),
        // body could not be read at all, e.g. over the size limit
        _ => Problem::new(
            rejection.status(),
            rejection.status().canonical_reason().unwrap_or("Bad Request"),
            rejection.body_text(),
        )
        .with_code(CODE_VALIDATION)
        .with_instance(instance),
    }
}

fn validation_problem(
    detail: &str,
    violations: Vec<ValidationViolation>,
    instance: &str,
) -> Problem {
    unprocessable_entity(detail)
        .with_code(CODE_VALIDATION)
        .with_instance(instance)
        .with_errors(violations)
}
