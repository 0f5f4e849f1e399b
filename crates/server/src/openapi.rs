use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Wire shape of an employee record.
#[derive(ToSchema)]
pub struct EmployeeDoc {
    pub id: i32,
    pub name: String,
    pub title: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::home,
        crate::routes::employees::search_by_name,
        crate::routes::employees::list_all,
        crate::routes::faults::runtime_error,
        crate::routes::faults::simulated_http500,
        crate::routes::faults::delayed_response,
    ),
    components(schemas(HealthResponse, EmployeeDoc)),
    tags(
        (name = "employees"),
        (name = "errors"),
        (name = "health")
    )
)]
pub struct ApiDoc;
