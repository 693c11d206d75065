use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// DbConnection owns the SQLite pool shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str, max_connections: u32, acquire_timeout: Duration) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!("Creating database at {}", url);
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(url)
            .await?;

        Self::setup_schema(&pool).await?;

        info!("Connected to database");
        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url, 4, Duration::from_secs(5)).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // Availability flags are nullable: a flag the client never sent stays absent
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS coroinhas (
                id TEXT PRIMARY KEY,
                nome_completo TEXT,
                nome_responsavel TEXT,
                contato_responsavel TEXT,
                data_nascimento TEXT NOT NULL,
                sabado BOOLEAN,
                domingo BOOLEAN,
                quarta_feira BOOLEAN,
                primeira_sexta_feira BOOLEAN
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
