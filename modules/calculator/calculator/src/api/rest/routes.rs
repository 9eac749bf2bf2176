use std::sync::Arc;

use axum::{Extension, Router};

use crate::api::rest::openapi::{OpenApiDocs, OperationDoc};
use crate::api::rest::{dto, handlers};
use crate::domain::service::Service;

const TAG: &str = "Calculator";

pub fn register_routes(
    mut router: Router,
    docs: &mut OpenApiDocs,
    service: Arc<Service>,
    info: Arc<handlers::ServiceInfo>,
) -> Router {
    router = OperationDoc::get("/")
        .operation_id("calculator.root")
        .summary("Service banner")
        .tag(TAG)
        .json_response::<dto::RootResponse>(200, "Service is running")
        .register(router, docs, handlers::root);

    router = OperationDoc::get("/operations")
        .operation_id("calculator.list_operations")
        .summary("List supported operators")
        .tag(TAG)
        .json_response::<dto::OperationsResponse>(200, "Supported operator symbols")
        .register(router, docs, handlers::list_operations);

    router = OperationDoc::post("/calculate")
        .operation_id("calculator.calculate")
        .summary("Evaluate a single operation")
        .tag(TAG)
        .json_request::<dto::CalculateRequest>()
        .json_response::<dto::OperationResponse>(200, "Operation result")
        .problem_response(400, "Division by zero or unsupported operator")
        .problem_response(422, "Request body failed validation")
        .register(router, docs, handlers::calculate);

    router = OperationDoc::post("/calculate-chain")
        .operation_id("calculator.calculate_chain")
        .summary("Evaluate a chain of operations left to right")
        .tag(TAG)
        .json_request::<dto::CalculateChainRequest>()
        .json_response::<dto::OperationResponse>(200, "Final chain result")
        .problem_response(400, "Chain could not be evaluated")
        .problem_response(422, "Request body failed validation")
        .register(router, docs, handlers::calculate_chain);

    router = OperationDoc::get("/history")
        .operation_id("calculator.get_history")
        .summary("List evaluated operations")
        .tag(TAG)
        .json_response::<dto::HistoryResponse>(200, "History in evaluation order")
        .register(router, docs, handlers::get_history);

    router = OperationDoc::delete("/history")
        .operation_id("calculator.clear_history")
        .summary("Clear the history")
        .tag(TAG)
        .json_response::<dto::MessageResponse>(200, "History cleared")
        .register(router, docs, handlers::clear_history);

    router = OperationDoc::get("/health")
        .operation_id("calculator.health")
        .summary("Health check")
        .tag(TAG)
        .json_response::<dto::HealthResponse>(200, "Service is healthy")
        .register(router, docs, handlers::health);

    router.layer(Extension(service)).layer(Extension(info))
}
