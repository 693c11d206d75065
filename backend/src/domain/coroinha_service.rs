use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::birth_date::parse_birth_date;
use crate::domain::commands::coroinha::{CreateCoroinhaCommand, UpdateCoroinhaCommand};
use crate::domain::models::coroinha::{Coroinha, CoroinhaPatch, NewCoroinha};
use crate::storage::traits::{CoroinhaStorage, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum CoroinhaError {
    #[error("Coroinha not found: {0}")]
    NotFound(Uuid),
    #[error("Malformed coroinha id: {0}")]
    MalformedId(String),
    #[error("Invalid birth date: {0:?}")]
    InvalidBirthDate(Option<String>),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Service for managing the altar server roster
#[derive(Clone)]
pub struct CoroinhaService {
    storage: Arc<dyn CoroinhaStorage>,
}

impl CoroinhaService {
    pub fn new(storage: Arc<dyn CoroinhaStorage>) -> Self {
        Self { storage }
    }

    /// List every registered altar server
    pub async fn list_coroinhas(&self) -> Result<Vec<Coroinha>, CoroinhaError> {
        info!("Listing all coroinhas");

        let coroinhas = self.storage.list_all().await?;

        info!("Found {} coroinhas", coroinhas.len());
        Ok(coroinhas)
    }

    /// Get one altar server by id
    pub async fn get_coroinha(&self, id: &str) -> Result<Coroinha, CoroinhaError> {
        let id = Self::parse_id(id)?;
        info!("Getting coroinha: {}", id);

        match self.storage.get_by_id(id).await? {
            Some(coroinha) => Ok(coroinha),
            None => {
                warn!("Coroinha not found: {}", id);
                Err(CoroinhaError::NotFound(id))
            }
        }
    }

    /// Register a new altar server. The birth date is required.
    pub async fn create_coroinha(&self, command: CreateCoroinhaCommand) -> Result<Coroinha, CoroinhaError> {
        info!("Creating coroinha: name={:?}", command.full_name);

        let date_of_birth = parse_birth_date(command.date_of_birth.as_deref())
            .ok_or(CoroinhaError::InvalidBirthDate(command.date_of_birth))?;

        let coroinha = self
            .storage
            .insert(NewCoroinha {
                full_name: command.full_name,
                guardian_name: command.guardian_name,
                guardian_contact: command.guardian_contact,
                date_of_birth,
                availability: command.availability.unwrap_or_default(),
            })
            .await?;

        info!("Created coroinha with ID: {}", coroinha.id);
        Ok(coroinha)
    }

    /// Replace the supplied fields of an existing record.
    /// An absent birth date keeps the stored one; a null or malformed one is
    /// rejected. A null availability clears every flag.
    pub async fn update_coroinha(&self, command: UpdateCoroinhaCommand) -> Result<Coroinha, CoroinhaError> {
        let id = Self::parse_id(&command.id)?;
        info!("Updating coroinha: {}", id);

        let date_of_birth = match command.date_of_birth {
            Some(raw) => Some(
                parse_birth_date(raw.as_deref()).ok_or(CoroinhaError::InvalidBirthDate(raw))?,
            ),
            None => None,
        };

        let patch = CoroinhaPatch {
            full_name: command.full_name,
            guardian_name: command.guardian_name,
            guardian_contact: command.guardian_contact,
            date_of_birth,
            availability: command.availability.map(Option::unwrap_or_default),
        };

        match self.storage.update_by_id(id, patch).await? {
            Some(coroinha) => {
                info!("Updated coroinha: {}", id);
                Ok(coroinha)
            }
            None => {
                warn!("Coroinha not found for update: {}", id);
                Err(CoroinhaError::NotFound(id))
            }
        }
    }

    /// Delete a record, returning what was removed
    pub async fn delete_coroinha(&self, id: &str) -> Result<Coroinha, CoroinhaError> {
        let id = Self::parse_id(id)?;
        info!("Deleting coroinha: {}", id);

        match self.storage.delete_by_id(id).await? {
            Some(coroinha) => {
                info!("Deleted coroinha: {}", id);
                Ok(coroinha)
            }
            None => {
                warn!("Coroinha not found for deletion: {}", id);
                Err(CoroinhaError::NotFound(id))
            }
        }
    }

    fn parse_id(id: &str) -> Result<Uuid, CoroinhaError> {
        Uuid::parse_str(id).map_err(|_| CoroinhaError::MalformedId(id.to_string()))
    }
}
