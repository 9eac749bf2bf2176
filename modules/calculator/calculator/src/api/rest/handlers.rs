use std::sync::Arc;

use axum::{Json, extract::Extension};
use utoipa::openapi::OpenApi;

use crate::domain::service::Service;

use super::dto::{
    CalculateChainRequest, CalculateRequest, HealthResponse, HistoryItemDto, HistoryResponse,
    MessageResponse, OperationResponse, OperationsResponse, RootResponse,
};
use super::error::{ApiResult, domain_error_to_problem};
use super::extract::ValidatedJson;

/// Static identity reported by `/` and `/health`.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
}

pub async fn root(Extension(info): Extension<Arc<ServiceInfo>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Calculator API - backend running".to_owned(),
        version: info.version.clone(),
    })
}

pub async fn health(Extension(info): Extension<Arc<ServiceInfo>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        service: info.name.clone(),
    })
}

pub async fn list_operations() -> Json<OperationsResponse> {
    let operations: Vec<String> = Service::supported_operators()
        .iter()
        .map(|op| op.symbol().to_owned())
        .collect();
    let count = operations.len();
    Json(OperationsResponse { operations, count })
}

pub async fn calculate(
    Extension(svc): Extension<Arc<Service>>,
    ValidatedJson(req): ValidatedJson<CalculateRequest>,
) -> ApiResult<Json<OperationResponse>> {
    let symbol = req.operator.symbol();
    let result = svc
        .calculate(req.num1, req.num2, symbol)
        .map_err(|e| domain_error_to_problem(&e, "/calculate"))?;

    Ok(Json(OperationResponse {
        result,
        message: format!(
            "{} {symbol} {} = {}",
            format_number(req.num1),
            format_number(req.num2),
            format_number(result)
        ),
    }))
}

/// Plain decimal for ordinary magnitudes, scientific notation for very large
/// or very small ones so the message stays short.
fn format_number(x: f64) -> String {
    let magnitude = x.abs();
    if x != 0.0 && !(1e-6..1e16).contains(&magnitude) {
        format!("{x:e}")
    } else {
        format!("{x}")
    }
}

pub async fn calculate_chain(
    Extension(svc): Extension<Arc<Service>>,
    ValidatedJson(req): ValidatedJson<CalculateChainRequest>,
) -> ApiResult<Json<OperationResponse>> {
    let result = svc
        .calculate_chain(&req.to_steps())
        .map_err(|e| domain_error_to_problem(&e, "/calculate-chain"))?;

    Ok(Json(OperationResponse {
        result,
        message: "Chain executed successfully".to_owned(),
    }))
}

pub async fn get_history(Extension(svc): Extension<Arc<Service>>) -> Json<HistoryResponse> {
    let history: Vec<HistoryItemDto> = svc.history().into_iter().map(Into::into).collect();
    let count = history.len();
    Json(HistoryResponse { history, count })
}

pub async fn clear_history(Extension(svc): Extension<Arc<Service>>) -> Json<MessageResponse> {
    svc.clear_history();
    Json(MessageResponse {
        message: "History cleared".to_owned(),
    })
}

pub async fn openapi_json(Extension(doc): Extension<Arc<OpenApi>>) -> Json<OpenApi> {
    Json(doc.as_ref().clone())
}
