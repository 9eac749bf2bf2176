//! Module declaration for the calculator.

use std::sync::Arc;

use axum::Router;
use axum::extract::Extension;
use axum::routing::get;
use calculator_sdk::CalculatorClient;
use tracing::{debug, info};
use utoipa::openapi::OpenApi;

use crate::api::rest::handlers::{self, ServiceInfo};
use crate::api::rest::openapi::{OpenApiDocs, OpenApiInfo};
use crate::api::rest::routes;
use crate::config::CalculatorConfig;
use crate::domain::service::Service;
use crate::local_client::LocalClient;

/// Calculator module.
///
/// Owns the domain service and hands out the REST router and an
/// in-process client, both sharing the same history.
#[derive(Clone)]
pub struct CalculatorModule {
    service: Arc<Service>,
    info: Arc<ServiceInfo>,
}

impl CalculatorModule {
    #[must_use]
    pub fn new(config: &CalculatorConfig) -> Self {
        info!(service = %config.service_name, "Initializing calculator module");
        debug!(max_history = ?config.max_history, "Loaded calculator config");

        Self {
            service: Arc::new(Service::new(config)),
            info: Arc::new(ServiceInfo {
                name: config.service_name.clone(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
            }),
        }
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn CalculatorClient> {
        Arc::new(LocalClient::new(self.service()))
    }

    /// Every calculator route plus `/openapi.json`.
    #[must_use]
    pub fn router(&self) -> Router {
        let mut docs = OpenApiDocs::new();
        let router = routes::register_routes(
            Router::new(),
            &mut docs,
            self.service(),
            Arc::clone(&self.info),
        );
        let openapi = Arc::new(self.openapi(&docs));
        info!(
            operations = docs.operation_count(),
            "Calculator REST routes registered"
        );

        router
            .route("/openapi.json", get(handlers::openapi_json))
            .layer(Extension(openapi))
    }

    fn openapi(&self, docs: &OpenApiDocs) -> OpenApi {
        docs.build_openapi(&OpenApiInfo {
            title: "Calculator API".to_owned(),
            version: self.info.version.clone(),
            description: Some(
                "Arithmetic over + - * /, operation chains, and history".to_owned(),
            ),
        })
    }
}
