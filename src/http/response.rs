//! Response encoding.
//!
//! # Responsibilities
//! - Turn a `HealthReport` into a JSON response
//! - Map health to the status code an uptime monitor acts on

use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::health::HealthReport;

impl IntoResponse for HealthReport {
    fn into_response(self) -> Response {
        (self.http_status(), Json(self)).into_response()
    }
}
