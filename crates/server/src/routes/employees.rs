use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use models::employee;

use crate::errors::ApiError;
use crate::openapi::EmployeeDoc;
use crate::routes::ServerState;

#[utoipa::path(get, path = "/", tag = "employees", responses((status = 200, description = "Greeting")))]
pub async fn home() -> &'static str {
    info!(route = "/", "serving greeting");
    "Welcome to Payroll Management System"
}

/// Exact-name search. Acknowledges the searched name without returning the
/// matched records; the match count only shows up in the log.
#[utoipa::path(
    get,
    path = "/employee/{name}",
    tag = "employees",
    params(("name" = String, Path, description = "Exact employee name")),
    responses((status = 200, description = "Search acknowledgement"))
)]
pub async fn search_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> String {
    // the raw, unvalidated input lands in the log verbatim
    info!(route = "/employee/:name", input = %name, "employee search requested");
    let matches = state.employees.find_by_exact_name(&name).await;
    info!(count = matches.len(), "employee search finished");
    format!("Searched for employee: {name}")
}

/// All employees in insertion order.
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    responses(
        (status = 200, description = "Employee roster", body = [EmployeeDoc]),
        (status = 500, description = "Store read failed")
    )
)]
pub async fn list_all(
    State(state): State<ServerState>,
) -> Result<Json<Vec<employee::Model>>, ApiError> {
    info!(route = "/employees", "listing all employees");
    let all = state
        .employees
        .find_all()
        .await
        .map_err(|e| ApiError(e.to_string()))?;
    Ok(Json(all))
}
