use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::employee::EmployeeRepository;

use crate::openapi::ApiDoc;

pub mod employees;
pub mod faults;

#[derive(Clone)]
pub struct ServerState {
    pub employees: Arc<dyn EmployeeRepository>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: directory routes, error-simulation
/// routes, and the OpenAPI explorer.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(employees::home))
        .route("/health", get(health))
        .route("/employee/:name", get(employees::search_by_name))
        .route("/employees", get(employees::list_all))
        .route("/error/runtime", get(faults::runtime_error))
        .route("/error/http500", get(faults::simulated_http500))
        .route("/error/delay", get(faults::delayed_response))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        // panics unwind no further than this layer; the response is its 500
        .layer(CatchPanicLayer::new())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
