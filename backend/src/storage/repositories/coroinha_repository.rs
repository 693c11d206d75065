use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::models::coroinha::{Availability, Coroinha, CoroinhaPatch, NewCoroinha};
use crate::storage::connection::DbConnection;
use crate::storage::traits::{CoroinhaStorage, StorageError, StorageResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

const COLUMNS: &str = "id, nome_completo, nome_responsavel, contato_responsavel, data_nascimento, \
                       sabado, domingo, quarta_feira, primeira_sexta_feira";

/// Repository for roster records
#[derive(Clone)]
pub struct CoroinhaRepository {
    db: DbConnection,
}

impl CoroinhaRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_coroinha(row: &SqliteRow) -> StorageResult<Coroinha> {
        let raw_id: String = row.try_get("id")?;
        let id = Uuid::parse_str(&raw_id).map_err(|e| StorageError::Corrupt {
            id: raw_id.clone(),
            reason: format!("invalid id: {}", e),
        })?;

        let raw_date: String = row.try_get("data_nascimento")?;
        let date_of_birth =
            NaiveDate::parse_from_str(&raw_date, DATE_FORMAT).map_err(|e| StorageError::Corrupt {
                id: raw_id.clone(),
                reason: format!("invalid data_nascimento '{}': {}", raw_date, e),
            })?;

        Ok(Coroinha {
            id,
            full_name: row.try_get("nome_completo")?,
            guardian_name: row.try_get("nome_responsavel")?,
            guardian_contact: row.try_get("contato_responsavel")?,
            date_of_birth,
            availability: Availability {
                saturday: row.try_get("sabado")?,
                sunday: row.try_get("domingo")?,
                wednesday: row.try_get("quarta_feira")?,
                first_friday: row.try_get("primeira_sexta_feira")?,
            },
        })
    }
}

/// Split a patch field into "is it supplied" and the value to write
fn supplied(field: Option<Option<String>>) -> (bool, Option<String>) {
    (field.is_some(), field.flatten())
}

#[async_trait]
impl CoroinhaStorage for CoroinhaRepository {
    async fn insert(&self, coroinha: NewCoroinha) -> StorageResult<Coroinha> {
        let coroinha = coroinha.with_id(Uuid::new_v4());

        sqlx::query(
            r#"
            INSERT INTO coroinhas (
                id, nome_completo, nome_responsavel, contato_responsavel, data_nascimento,
                sabado, domingo, quarta_feira, primeira_sexta_feira
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(coroinha.id.to_string())
        .bind(&coroinha.full_name)
        .bind(&coroinha.guardian_name)
        .bind(&coroinha.guardian_contact)
        .bind(coroinha.date_of_birth.format(DATE_FORMAT).to_string())
        .bind(coroinha.availability.saturday)
        .bind(coroinha.availability.sunday)
        .bind(coroinha.availability.wednesday)
        .bind(coroinha.availability.first_friday)
        .execute(self.db.pool())
        .await?;

        Ok(coroinha)
    }

    async fn list_all(&self) -> StorageResult<Vec<Coroinha>> {
        let rows = sqlx::query(&format!("SELECT {} FROM coroinhas ORDER BY rowid", COLUMNS))
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(Self::row_to_coroinha).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Option<Coroinha>> {
        let row = sqlx::query(&format!("SELECT {} FROM coroinhas WHERE id = ?", COLUMNS))
            .bind(id.to_string())
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::row_to_coroinha).transpose()
    }

    async fn update_by_id(&self, id: Uuid, patch: CoroinhaPatch) -> StorageResult<Option<Coroinha>> {
        // One statement so the read-modify-write is atomic for the record.
        // Each column is paired with a flag saying whether the patch supplies it,
        // so a supplied NULL clears the column. Availability flags move together.
        let (set_full_name, full_name) = supplied(patch.full_name);
        let (set_guardian_name, guardian_name) = supplied(patch.guardian_name);
        let (set_guardian_contact, guardian_contact) = supplied(patch.guardian_contact);
        let replace_availability = patch.availability.is_some();
        let availability = patch.availability.unwrap_or_default();

        let row = sqlx::query(&format!(
            r#"
            UPDATE coroinhas SET
                nome_completo = CASE WHEN ? THEN ? ELSE nome_completo END,
                nome_responsavel = CASE WHEN ? THEN ? ELSE nome_responsavel END,
                contato_responsavel = CASE WHEN ? THEN ? ELSE contato_responsavel END,
                data_nascimento = COALESCE(?, data_nascimento),
                sabado = CASE WHEN ? THEN ? ELSE sabado END,
                domingo = CASE WHEN ? THEN ? ELSE domingo END,
                quarta_feira = CASE WHEN ? THEN ? ELSE quarta_feira END,
                primeira_sexta_feira = CASE WHEN ? THEN ? ELSE primeira_sexta_feira END
            WHERE id = ?
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(set_full_name)
        .bind(full_name)
        .bind(set_guardian_name)
        .bind(guardian_name)
        .bind(set_guardian_contact)
        .bind(guardian_contact)
        .bind(patch.date_of_birth.map(|d| d.format(DATE_FORMAT).to_string()))
        .bind(replace_availability)
        .bind(availability.saturday)
        .bind(replace_availability)
        .bind(availability.sunday)
        .bind(replace_availability)
        .bind(availability.wednesday)
        .bind(replace_availability)
        .bind(availability.first_friday)
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_coroinha).transpose()
    }

    async fn delete_by_id(&self, id: Uuid) -> StorageResult<Option<Coroinha>> {
        let row = sqlx::query(&format!("DELETE FROM coroinhas WHERE id = ? RETURNING {}", COLUMNS))
            .bind(id.to_string())
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::row_to_coroinha).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> CoroinhaRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        CoroinhaRepository::new(db)
    }

    fn new_coroinha(name: &str) -> NewCoroinha {
        NewCoroinha {
            full_name: Some(name.to_string()),
            guardian_name: Some("Maria Souza".to_string()),
            guardian_contact: Some("(41) 99999-0000".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(2012, 3, 15).unwrap(),
            availability: Availability {
                saturday: Some(true),
                sunday: Some(false),
                wednesday: None,
                first_friday: None,
            },
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = setup_test().await;
        let input = new_coroinha("Ana Souza");

        let stored = repo.insert(input.clone()).await.expect("Failed to insert");
        let fetched = repo
            .get_by_id(stored.id)
            .await
            .expect("Failed to get")
            .expect("Record should exist");

        assert_eq!(fetched, input.with_id(stored.id));
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let repo = setup_test().await;

        let first = repo.insert(new_coroinha("Ana")).await.unwrap();
        let second = repo.insert(new_coroinha("Ana")).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = setup_test().await;

        let result = repo.get_by_id(Uuid::new_v4()).await.expect("Query failed");

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_all_returns_every_record() {
        let repo = setup_test().await;

        let empty = repo.list_all().await.expect("Failed to list");
        assert!(empty.is_empty(), "Database should be empty at test start");

        let mut inserted = Vec::new();
        for name in ["Ana", "Bruno", "Carla"] {
            inserted.push(repo.insert(new_coroinha(name)).await.unwrap().id);
        }

        let listed: Vec<Uuid> = repo
            .list_all()
            .await
            .expect("Failed to list")
            .into_iter()
            .map(|c| c.id)
            .collect();

        assert_eq!(listed.len(), 3);
        for id in &inserted {
            assert!(listed.contains(id));
        }
    }

    #[tokio::test]
    async fn test_update_keeps_unsupplied_fields() {
        let repo = setup_test().await;
        let stored = repo.insert(new_coroinha("Ana")).await.unwrap();

        let patch = CoroinhaPatch {
            guardian_contact: Some(Some("(41) 3333-1111".to_string())),
            ..Default::default()
        };
        let updated = repo
            .update_by_id(stored.id, patch)
            .await
            .expect("Failed to update")
            .expect("Record should exist");

        assert_eq!(updated.guardian_contact.as_deref(), Some("(41) 3333-1111"));
        assert_eq!(updated.full_name, stored.full_name);
        assert_eq!(updated.guardian_name, stored.guardian_name);
        assert_eq!(updated.date_of_birth, stored.date_of_birth);
        assert_eq!(updated.availability, stored.availability);

        let fetched = repo.get_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_replaces_date_and_availability() {
        let repo = setup_test().await;
        let stored = repo.insert(new_coroinha("Ana")).await.unwrap();

        let patch = CoroinhaPatch {
            date_of_birth: NaiveDate::from_ymd_opt(2011, 1, 2),
            availability: Some(Availability {
                wednesday: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let updated = repo.update_by_id(stored.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.date_of_birth, NaiveDate::from_ymd_opt(2011, 1, 2).unwrap());
        assert_eq!(
            updated.availability,
            Availability {
                wednesday: Some(true),
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn test_update_with_null_clears_text_field() {
        let repo = setup_test().await;
        let stored = repo.insert(new_coroinha("Ana")).await.unwrap();

        let patch = CoroinhaPatch {
            full_name: Some(None),
            ..Default::default()
        };
        let updated = repo.update_by_id(stored.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.full_name, None);
        assert_eq!(updated.guardian_name, stored.guardian_name);
        assert_eq!(updated.guardian_contact, stored.guardian_contact);
        assert_eq!(updated.availability, stored.availability);
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = setup_test().await;

        let result = repo
            .update_by_id(Uuid::new_v4(), CoroinhaPatch::default())
            .await
            .expect("Query failed");

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let repo = setup_test().await;
        let stored = repo.insert(new_coroinha("Ana")).await.unwrap();

        let deleted = repo.delete_by_id(stored.id).await.expect("Failed to delete");
        assert_eq!(deleted, Some(stored.clone()));

        let after = repo.get_by_id(stored.id).await.unwrap();
        assert!(after.is_none());

        let deleted_again = repo.delete_by_id(stored.id).await.unwrap();
        assert!(deleted_again.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_date_is_reported() {
        let repo = setup_test().await;
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO coroinhas (id, data_nascimento) VALUES (?, ?)")
            .bind(id.to_string())
            .bind("not a date")
            .execute(repo.db.pool())
            .await
            .unwrap();

        let result = repo.get_by_id(id).await;

        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }
}
