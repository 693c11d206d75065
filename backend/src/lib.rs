//! # Coroinhas Backend
//!
//! Roster service for a parish's altar servers (*coroinhas*).
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (services, commands, models)
//!     ↓
//! Storage Layer (CoroinhaStorage trait, SQLite repository)
//! ```
//!
//! [`initialize_backend`] wires storage and services from [`config::Settings`]
//! into an [`AppState`]; [`create_router`] exposes that state over HTTP.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{http::Method, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Settings;
use crate::domain::{AuthService, CoroinhaService, FixedCredentialVerifier};
use crate::storage::{CoroinhaRepository, DbConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub coroinha_service: CoroinhaService,
    pub auth_service: AuthService,
}

impl AppState {
    /// State backed by a fresh in-memory database and the built-in account
    #[cfg(test)]
    pub(crate) async fn init_test() -> Self {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        Self {
            coroinha_service: CoroinhaService::new(Arc::new(CoroinhaRepository::new(db))),
            auth_service: AuthService::new(Arc::new(FixedCredentialVerifier::default())),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(settings: &Settings) -> Result<AppState> {
    info!("Setting up database");
    let db_conn = DbConnection::new(
        &settings.database_url,
        settings.database_max_connections,
        settings.database_acquire_timeout(),
    )
    .await?;

    info!("Setting up domain services");
    let coroinha_service = CoroinhaService::new(Arc::new(CoroinhaRepository::new(db_conn)));
    let verifier = FixedCredentialVerifier::new(&settings.auth_username, &settings.auth_password_hash)?;
    let auth_service = AuthService::new(Arc::new(verifier));

    Ok(AppState {
        coroinha_service,
        auth_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, request_timeout: Duration) -> Router {
    // The roster is consumed by browser frontends served from other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .merge(io::rest::coroinha_apis::router())
        .merge(io::rest::auth_apis::router())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
