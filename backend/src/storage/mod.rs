//! # Storage Module
//!
//! Handles persistence of roster records.
//!
//! The domain layer only sees the [`CoroinhaStorage`] trait, so the backend can
//! be swapped without touching services or the REST layer. The shipped
//! implementation is SQLite through SQLx.
//!
//! ## Storage Features
//!
//! - **Single-record atomicity**: every operation is one SQL statement
//! - **Async Operations**: non-blocking database access on the tokio runtime
//! - **Connection Pooling**: bounded pool with an explicit acquire timeout

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::CoroinhaRepository;
pub use traits::{CoroinhaStorage, StorageError, StorageResult};
