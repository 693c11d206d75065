//! # REST API for the Altar Server Roster
//!
//! Endpoints for creating, retrieving, updating, and deleting roster records.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tracing::{error, info, warn};

use crate::domain::CoroinhaError;
use crate::io::rest::mappers::coroinha_mapper::CoroinhaMapper;
use crate::io::rest::message_response;
use crate::AppState;
use shared::{CoroinhaRequest, MessageResponse};

const NOT_FOUND: &str = "Coroinha não encontrado";
const NOT_FOUND_FOR_UPDATE: &str = "Coroinha não encontrado para atualização";
const NOT_FOUND_FOR_DELETE: &str = "Coroinha não encontrado para exclusão";
const DELETED: &str = "Coroinha excluído com sucesso";
const INVALID_BIRTH_DATE: &str = "Data de nascimento inválida, use o formato DD/MM/AA";
const INVALID_BODY: &str = "Dados do coroinha inválidos";

const LIST_FAILED: &str = "Erro ao buscar coroinhas";
const GET_FAILED: &str = "Erro ao buscar coroinha por ID";
const CREATE_FAILED: &str = "Erro ao criar coroinha";
const UPDATE_FAILED: &str = "Erro ao atualizar coroinha por ID";
const DELETE_FAILED: &str = "Erro ao excluir coroinha por ID";

/// Create a router for the roster APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/coroinhas", get(list_coroinhas).post(create_coroinha))
        .route(
            "/coroinhas/:id",
            get(get_coroinha).put(update_coroinha).delete(delete_coroinha),
        )
}

/// Map a service error to a response. Only "not found" and invalid dates
/// are reported as client errors; everything else is a logged 500.
fn error_response(e: CoroinhaError, not_found: &str, fault: &str) -> Response {
    match e {
        CoroinhaError::NotFound(_) => message_response(StatusCode::NOT_FOUND, not_found),
        CoroinhaError::InvalidBirthDate(_) => message_response(StatusCode::BAD_REQUEST, INVALID_BIRTH_DATE),
        e => {
            error!("{}: {}", fault, e);
            message_response(StatusCode::INTERNAL_SERVER_ERROR, fault)
        }
    }
}

/// Bodies that are not JSON or do not fit the record shape get a fixed
/// message; the deserializer's detail stays in the log.
fn rejection_response(rejection: JsonRejection) -> Response {
    warn!("Rejected request body: {}", rejection.body_text());
    message_response(StatusCode::BAD_REQUEST, INVALID_BODY)
}

/// List all altar servers
pub async fn list_coroinhas(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /coroinhas");

    match state.coroinha_service.list_coroinhas().await {
        Ok(coroinhas) => (StatusCode::OK, Json(CoroinhaMapper::to_dto_list(coroinhas))).into_response(),
        Err(e) => error_response(e, NOT_FOUND, LIST_FAILED),
    }
}

/// Get an altar server by ID
pub async fn get_coroinha(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("GET /coroinhas/{}", id);

    match state.coroinha_service.get_coroinha(&id).await {
        Ok(coroinha) => (StatusCode::OK, Json(CoroinhaMapper::to_dto(coroinha))).into_response(),
        Err(e) => error_response(e, NOT_FOUND, GET_FAILED),
    }
}

/// Register a new altar server
pub async fn create_coroinha(
    State(state): State<AppState>,
    request: Result<Json<CoroinhaRequest>, JsonRejection>,
) -> impl IntoResponse {
    info!("POST /coroinhas");

    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return rejection_response(rejection),
    };
    let command = CoroinhaMapper::to_create_command(request);

    match state.coroinha_service.create_coroinha(command).await {
        Ok(coroinha) => (StatusCode::CREATED, Json(CoroinhaMapper::to_dto(coroinha))).into_response(),
        Err(e) => error_response(e, NOT_FOUND, CREATE_FAILED),
    }
}

/// Update the supplied fields of an altar server
pub async fn update_coroinha(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<CoroinhaRequest>, JsonRejection>,
) -> impl IntoResponse {
    info!("PUT /coroinhas/{}", id);

    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return rejection_response(rejection),
    };
    let command = CoroinhaMapper::to_update_command(id, request);

    match state.coroinha_service.update_coroinha(command).await {
        Ok(coroinha) => (StatusCode::OK, Json(CoroinhaMapper::to_dto(coroinha))).into_response(),
        Err(e) => error_response(e, NOT_FOUND_FOR_UPDATE, UPDATE_FAILED),
    }
}

/// Delete an altar server
pub async fn delete_coroinha(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("DELETE /coroinhas/{}", id);

    match state.coroinha_service.delete_coroinha(&id).await {
        Ok(_) => (StatusCode::OK, Json(MessageResponse::new(DELETED))).into_response(),
        Err(e) => error_response(e, NOT_FOUND_FOR_DELETE, DELETE_FAILED),
    }
}
