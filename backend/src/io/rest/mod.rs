//! # REST API Interface Layer
//!
//! HTTP endpoints of the roster service. This layer:
//! - deserializes requests into domain commands through the mappers
//! - translates domain errors into status codes with fixed messages
//! - logs every request and every fault
//!
//! Internal error details are logged, never returned to the client.

pub mod auth_apis;
pub mod coroinha_apis;
pub mod mappers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::MessageResponse;

/// JSON `{"message": ...}` response with the given status
pub(crate) fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(MessageResponse::new(message))).into_response()
}
