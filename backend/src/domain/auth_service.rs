//! Placeholder credential check for the single administrative account.
//!
//! Only one fixed account exists and a successful login returns a static,
//! non-expiring token. Anything that needs real sessions has to provide its
//! own [`CredentialVerifier`].

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::auth::{LoginCommand, LoginResult};

/// Username of the built-in account
pub const DEFAULT_USERNAME: &str = "eduardosmyk";

/// Argon2id hash of the built-in account's password
pub const DEFAULT_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$bzwqnlG31AiaHlxzsvTW4Q$AScZN7mbVgKMVkeUz/lTkfkqljNAic5h/ewOPr6HfuA";

/// Token handed out on every successful login
pub const PLACEHOLDER_TOKEN: &str = "token_de_exemplo";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid password hash configured: {0}")]
    InvalidConfiguration(String),
    #[error("Credential check did not complete: {0}")]
    Interrupted(#[from] tokio::task::JoinError),
}

/// Decides whether a username/password pair is accepted and issues a token.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Result<String, AuthError>;
}

/// Accepts exactly one username whose password matches a fixed Argon2 hash.
#[derive(Debug, Clone)]
pub struct FixedCredentialVerifier {
    username: String,
    password_hash: String,
}

impl FixedCredentialVerifier {
    /// Fails when `password_hash` is not a valid PHC string.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Result<Self, AuthError> {
        let password_hash = password_hash.into();
        PasswordHash::new(&password_hash).map_err(|e| AuthError::InvalidConfiguration(e.to_string()))?;

        Ok(Self {
            username: username.into(),
            password_hash,
        })
    }
}

impl Default for FixedCredentialVerifier {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password_hash: DEFAULT_PASSWORD_HASH.to_string(),
        }
    }
}

impl CredentialVerifier for FixedCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username != self.username {
            return Err(AuthError::InvalidCredentials);
        }

        let parsed_hash = PasswordHash::new(&self.password_hash)
            .map_err(|e| AuthError::InvalidConfiguration(e.to_string()))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(PLACEHOLDER_TOKEN.to_string())
    }
}

/// Service behind the login endpoint
#[derive(Clone)]
pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
}

impl AuthService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }

    /// Check the credentials on the blocking pool; Argon2 is CPU bound.
    pub async fn login(&self, command: LoginCommand) -> Result<LoginResult, AuthError> {
        info!("Checking credentials for user: {}", command.username);

        let verifier = Arc::clone(&self.verifier);
        let username = command.username.clone();
        let outcome =
            tokio::task::spawn_blocking(move || verifier.verify(&command.username, &command.password)).await?;

        match outcome {
            Ok(token) => {
                info!("Login succeeded for user: {}", username);
                Ok(LoginResult { token })
            }
            Err(e) => {
                warn!("Login failed for user {}: {}", username, e);
                Err(e)
            }
        }
    }
}
