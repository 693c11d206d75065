//! # Domain Module
//!
//! Business logic of the roster service, independent of HTTP and of the
//! storage backend.
//!
//! ## Module Organization
//!
//! - **coroinha_service**: CRUD over roster records, including the birth date transform
//! - **auth_service**: placeholder credential check behind `/login`
//! - **birth_date**: `DD/MM/YY` parsing
//! - **commands**: inputs the REST layer hands to the services
//! - **models**: domain entities

pub mod auth_service;
pub mod birth_date;
pub mod commands;
pub mod coroinha_service;
pub mod models;

pub use auth_service::{AuthError, AuthService, CredentialVerifier, FixedCredentialVerifier};
pub use coroinha_service::{CoroinhaError, CoroinhaService};
