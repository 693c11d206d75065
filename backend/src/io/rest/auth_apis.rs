use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use tracing::{error, info, warn};

use crate::domain::commands::auth::LoginCommand;
use crate::domain::AuthError;
use crate::io::rest::message_response;
use crate::AppState;
use shared::{LoginRequest, LoginResponse};

const INVALID_CREDENTIALS: &str = "Credenciais inválidas";
const LOGIN_FAILED: &str = "Erro ao autenticar";

/// Create the login router
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Exchange the fixed account's credentials for the placeholder token.
/// A body without a string username and password is a failed login.
pub async fn login(
    State(state): State<AppState>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            warn!("POST /login - rejected body: {}", rejection.body_text());
            return message_response(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS);
        }
    };
    info!("POST /login - username: {}", request.username);

    let command = LoginCommand {
        username: request.username,
        password: request.password,
    };

    match state.auth_service.login(command).await {
        Ok(result) => (StatusCode::OK, Json(LoginResponse { token: result.token })).into_response(),
        Err(AuthError::InvalidCredentials) => message_response(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS),
        Err(e) => {
            error!("{}: {}", LOGIN_FAILED, e);
            message_response(StatusCode::INTERNAL_SERVER_ERROR, LOGIN_FAILED)
        }
    }
}
