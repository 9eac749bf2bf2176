//! REST error mapping for the calculator module.

use axum::http::StatusCode;
use calc_errors::{Problem, internal_error};

use crate::domain::error::DomainError;

/// Standard result type for calculator handlers.
pub type ApiResult<T> = Result<T, Problem>;

pub const CODE_VALIDATION: &str = "CALCULATOR_VALIDATION";
pub const CODE_INTERNAL: &str = "CALCULATOR_INTERNAL";

/// Map a domain error to an RFC 9457 Problem. All domain errors are 400s.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let (code, title) = match e {
        DomainError::UnsupportedOperator(_) => {
            ("CALCULATOR_UNSUPPORTED_OPERATOR", "Unsupported operator")
        }
        DomainError::DivisionByZero => ("CALCULATOR_DIVISION_BY_ZERO", "Division by zero"),
        DomainError::EmptyChain => ("CALCULATOR_EMPTY_CHAIN", "Empty chain"),
        DomainError::MissingFirstOperand => (
            "CALCULATOR_MISSING_FIRST_OPERAND",
            "Missing first operand",
        ),
        DomainError::MalformedStep { .. } => ("CALCULATOR_MALFORMED_STEP", "Malformed step"),
        DomainError::NonFiniteResult => ("CALCULATOR_NON_FINITE_RESULT", "Non-finite result"),
    };
    tracing::debug!(error = %e, code, "domain error");

    let mut problem = Problem::new(StatusCode::BAD_REQUEST, title, e.to_string())
        .with_code(code)
        .with_instance(instance);

    if let Some(id) = trace_id {
        problem = problem.with_trace_id(id);
    }
    problem
}

/// Generic 500 that does not leak the cause to the client. The request path
/// is not known where this is built, so `instance` stays empty.
pub fn internal_problem() -> Problem {
    internal_error("An internal error occurred").with_code(CODE_INTERNAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_bad_requests() {
        let cases = [
            DomainError::unsupported_operator("%"),
            DomainError::DivisionByZero,
            DomainError::EmptyChain,
            DomainError::MissingFirstOperand,
            DomainError::malformed_step(1),
            DomainError::NonFiniteResult,
        ];
        for e in cases {
            let p = domain_error_to_problem(&e, "/calculate");
            assert_eq!(p.status, StatusCode::BAD_REQUEST);
            assert_eq!(p.detail, e.to_string());
            assert_eq!(p.instance, "/calculate");
            assert!(p.code.starts_with("CALCULATOR_"));
        }
    }

    #[test]
    fn test_non_finite_result_code() {
        let p = domain_error_to_problem(&DomainError::NonFiniteResult, "/calculate");
        assert_eq!(p.code, "CALCULATOR_NON_FINITE_RESULT");
        assert_eq!(p.detail, "Result is not a finite number");
    }

    #[test]
    fn test_internal_problem_hides_details() {
        let p = internal_problem();
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(p.code, CODE_INTERNAL);
        assert_eq!(p.detail, "An internal error occurred");
        assert_eq!(p.instance, "");
    }
}
