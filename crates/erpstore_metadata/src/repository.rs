use anyhow::{bail, Context, Result};
use chrono::Utc;
use erpstore_contract::FileRecord;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

const SCHEMA_SQL: &str = include_str!("sql/schema.sql");

/// File records kept as JSON documents in the `storage_resources` table.
#[derive(Debug, Clone)]
pub struct MetadataRepository {
    pool: SqlitePool,
}

impl MetadataRepository {
    pub async fn connect(sqlite_path: &str, max_connections: u32) -> Result<Self> {
        let uri = normalize_sqlite_uri(sqlite_path);
        let options = SqliteConnectOptions::from_str(&uri)
            .with_context(|| format!("invalid sqlite URI: {}", uri))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .with_context(|| format!("failed to connect sqlite pool at {uri}"))?;

        let repository = Self { pool };
        repository.migrate().await?;
        Ok(repository)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn migrate(&self) -> Result<()> {
        for statement in SCHEMA_SQL.split(';') {
            let sql = statement.trim();
            if sql.is_empty() {
                continue;
            }
            sqlx::query(sql)
                .execute(&self.pool)
                .await
                .with_context(|| format!("migration failed for statement: {sql}"))?;
        }
        info!("metadata sqlite schema ready");
        Ok(())
    }

    /// Appends every record in order. Either all of them land or none do.
    pub async fn insert_files(&self, records: &[FileRecord]) -> Result<u64> {
        if records.is_empty() {
            bail!("no file records to insert");
        }

        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await.context("begin insert transaction")?;
        for record in records {
            let document_json =
                serde_json::to_string(record).context("serialize file record")?;
            sqlx::query("INSERT INTO storage_resources(document_json, inserted_at) VALUES (?, ?)")
                .bind(document_json)
                .bind(&now)
                .execute(&mut *tx)
                .await
                .with_context(|| format!("insert file record {}", record.path))?;
        }
        tx.commit().await.context("commit insert transaction")?;

        Ok(records.len() as u64)
    }

    pub async fn list_files(&self) -> Result<Vec<FileRecord>> {
        let rows = sqlx::query_scalar::<_, String>(
            "SELECT document_json FROM storage_resources ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .context("query storage resources")?;

        rows.into_iter()
            .map(|row| serde_json::from_str::<FileRecord>(&row).context("parse file record document"))
            .collect()
    }

    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("metadata ping")?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn normalize_sqlite_uri(raw: &str) -> String {
    if raw.starts_with("sqlite:") {
        raw.to_string()
    } else {
        format!("sqlite://{raw}")
    }
}
