use std::time::Duration;

use axum::http::StatusCode;
use tracing::info;

/// Fixed hold time for the delay route.
const RESPONSE_DELAY: Duration = Duration::from_secs(30);

/// Panics on purpose; the catch-panic layer answers with a bare 500.
#[utoipa::path(get, path = "/error/runtime", tag = "errors", responses((status = 500, description = "Unhandled error")))]
pub async fn runtime_error() -> &'static str {
    info!(route = "/error/runtime", "raising simulated runtime error");
    panic!("simulated unhandled error");
}

/// A handled failure: fixed 500 body, no unwinding.
#[utoipa::path(get, path = "/error/http500", tag = "errors", responses((status = 500, description = "Simulated server error")))]
pub async fn simulated_http500() -> (StatusCode, &'static str) {
    info!(route = "/error/http500", "returning simulated 500");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Simulated Internal Server Error: Could not process your request.",
    )
}

/// Holds the worker thread for the full delay instead of yielding, so each
/// in-flight call occupies one unit of server concurrency.
#[utoipa::path(get, path = "/error/delay", tag = "errors", responses((status = 200, description = "Delayed response")))]
pub async fn delayed_response() -> &'static str {
    info!(
        route = "/error/delay",
        delay_secs = RESPONSE_DELAY.as_secs(),
        "blocking handler before responding"
    );
    std::thread::sleep(RESPONSE_DELAY);
    "Response after a 30-second delay."
}
