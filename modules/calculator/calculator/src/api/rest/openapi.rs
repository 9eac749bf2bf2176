//! OpenAPI document assembly.
//!
//! Routes are declared with [`OperationDoc`], which mounts the handler on the
//! router and records the operation in [`OpenApiDocs`]. Request and response
//! types are collected as components so operations can reference them.

use std::collections::{BTreeMap, HashMap};

use axum::Router;
use axum::handler::Handler;
use axum::routing::{MethodFilter, on};
use calc_errors::{APPLICATION_PROBLEM_JSON, Problem};
use utoipa::openapi::{
    OpenApi, OpenApiBuilder, Ref, RefOr, Required,
    content::ContentBuilder,
    info::InfoBuilder,
    path::{HttpMethod, OperationBuilder as UOperationBuilder, PathItemBuilder, PathsBuilder},
    request_body::RequestBodyBuilder,
    response::{ResponseBuilder, ResponsesBuilder},
    schema::{ComponentsBuilder, Schema},
};
use utoipa::{PartialSchema, ToSchema};

type SchemaCollection = Vec<(String, RefOr<Schema>)>;

const APPLICATION_JSON: &str = "application/json";

/// Document metadata.
#[derive(Debug, Clone)]
pub struct OpenApiInfo {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Delete,
}

impl Verb {
    fn filter(self) -> MethodFilter {
        match self {
            Self::Get => MethodFilter::GET,
            Self::Post => MethodFilter::POST,
            Self::Delete => MethodFilter::DELETE,
        }
    }

    fn http_method(self) -> HttpMethod {
        match self {
            Self::Get => HttpMethod::Get,
            Self::Post => HttpMethod::Post,
            Self::Delete => HttpMethod::Delete,
        }
    }
}

#[derive(Debug, Clone)]
struct ResponseDoc {
    status: u16,
    content_type: &'static str,
    description: &'static str,
    schema_name: String,
}

/// One documented route.
#[derive(Clone)]
#[must_use]
pub struct OperationDoc {
    verb: Verb,
    path: &'static str,
    operation_id: Option<&'static str>,
    summary: Option<&'static str>,
    tag: Option<&'static str>,
    request_schema: Option<String>,
    responses: Vec<ResponseDoc>,
    schemas: SchemaCollection,
}

impl OperationDoc {
    fn new(verb: Verb, path: &'static str) -> Self {
        Self {
            verb,
            path,
            operation_id: None,
            summary: None,
            tag: None,
            request_schema: None,
            responses: Vec::new(),
            schemas: Vec::new(),
        }
    }

    pub fn get(path: &'static str) -> Self {
        Self::new(Verb::Get, path)
    }

    pub fn post(path: &'static str) -> Self {
        Self::new(Verb::Post, path)
    }

    pub fn delete(path: &'static str) -> Self {
        Self::new(Verb::Delete, path)
    }

    pub fn operation_id(mut self, id: &'static str) -> Self {
        self.operation_id = Some(id);
        self
    }

    pub fn summary(mut self, summary: &'static str) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn json_request<T: ToSchema + 'static>(mut self) -> Self {
        self.request_schema = Some(self.collect::<T>());
        self
    }

    pub fn json_response<T: ToSchema + 'static>(
        mut self,
        status: u16,
        description: &'static str,
    ) -> Self {
        let schema_name = self.collect::<T>();
        self.responses.push(ResponseDoc {
            status,
            content_type: APPLICATION_JSON,
            description,
            schema_name,
        });
        self
    }

    pub fn problem_response(mut self, status: u16, description: &'static str) -> Self {
        let schema_name = self.collect::<Problem>();
        self.responses.push(ResponseDoc {
            status,
            content_type: APPLICATION_PROBLEM_JSON,
            description,
            schema_name,
        });
        self
    }

    /// Mount `handler` on `router` and record the operation in `docs`.
    pub fn register<H, T>(self, router: Router, docs: &mut OpenApiDocs, handler: H) -> Router
    where
        H: Handler<T, ()>,
        T: 'static,
    {
        let router = router.route(self.path, on(self.verb.filter(), handler));
        docs.register(self);
        router
    }

    /// Adds `T` and everything it references; returns the component name.
    fn collect<T: ToSchema + 'static>(&mut self) -> String {
        let name = T::name().to_string();
        self.schemas
            .push((name.clone(), <T as PartialSchema>::schema()));
        T::schemas(&mut self.schemas);
        name
    }
}

/// Registered operations and schema components.
#[derive(Default)]
pub struct OpenApiDocs {
    operations: Vec<OperationDoc>,
    components: HashMap<String, RefOr<Schema>>,
}

impl OpenApiDocs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, mut op: OperationDoc) {
        for (name, schema) in op.schemas.drain(..) {
            self.components.entry(name).or_insert(schema);
        }
        tracing::debug!(
            method = ?op.verb,
            path = op.path,
            operation_id = op.operation_id.unwrap_or("-"),
            "registered API operation"
        );
        self.operations.push(op);
    }

    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    #[must_use]
    pub fn build_openapi(&self, info: &OpenApiInfo) -> OpenApi {
        tracing::debug!(
            operations = self.operations.len(),
            schemas = self.components.len(),
            "building OpenAPI document"
        );

        // several verbs may share one path
        let mut by_path: BTreeMap<&str, PathItemBuilder> = BTreeMap::new();
        for spec in &self.operations {
            let item = by_path
                .remove(spec.path)
                .unwrap_or_else(PathItemBuilder::new);
            by_path.insert(
                spec.path,
                item.operation(spec.verb.http_method(), build_operation(spec)),
            );
        }

        let mut paths = PathsBuilder::new();
        for (path, item) in by_path {
            paths = paths.path(path, item.build());
        }

        let mut components = ComponentsBuilder::new();
        let mut names: Vec<&String> = self.components.keys().collect();
        names.sort();
        for name in names {
            if let Some(schema) = self.components.get(name) {
                components = components.schema(name.clone(), schema.clone());
            }
        }

        let openapi_info = InfoBuilder::new()
            .title(&info.title)
            .version(&info.version)
            .description(info.description.clone())
            .build();

        OpenApiBuilder::new()
            .info(openapi_info)
            .paths(paths.build())
            .components(Some(components.build()))
            .build()
    }
}

fn schema_ref(name: &str) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn build_operation(spec: &OperationDoc) -> utoipa::openapi::path::Operation {
    let mut op = UOperationBuilder::new()
        .operation_id(spec.operation_id)
        .summary(spec.summary);

    if let Some(tag) = spec.tag {
        op = op.tag(tag);
    }

    if let Some(name) = &spec.request_schema {
        let content = ContentBuilder::new().schema(Some(schema_ref(name))).build();
        let body = RequestBodyBuilder::new()
            .content(APPLICATION_JSON, content)
            .required(Some(Required::True))
            .build();
        op = op.request_body(Some(body));
    }

    let mut responses = ResponsesBuilder::new();
    for r in &spec.responses {
        let content = ContentBuilder::new()
            .schema(Some(schema_ref(&r.schema_name)))
            .build();
        let resp = ResponseBuilder::new()
            .description(r.description)
            .content(r.content_type, content)
            .build();
        responses = responses.response(r.status.to_string(), resp);
    }
    op.responses(responses.build()).build()
}
