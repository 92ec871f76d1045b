use serde_json::Value as JsonValue;
use sqlx::Row;
use sqlx::mysql::MySqlPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::entities::UploadedFile;
use crate::error::StoreError;
use crate::schema::TableSchema;

/// Thin persistence adapter over one table: recreate it, insert one record
/// inside a transaction, read a record back by id.
pub struct FileStore {
    pool: MySqlPool,
    schema: TableSchema,
    max_payload_size: usize,
}

impl FileStore {
    pub fn new(pool: MySqlPool, schema: TableSchema, max_payload_size: usize) -> Self {
        Self {
            pool,
            schema,
            max_payload_size,
        }
    }

    /// Drop the table if present, then create it from the schema
    /// definition. Destructive: any existing rows are lost. Demo-only
    /// semantics, do not point this at data you care about.
    pub async fn init(&self) -> Result<(), StoreError> {
        let drop_sql = self.schema.drop_table_sql();
        debug!("{drop_sql}");
        sqlx::query(&drop_sql).execute(&self.pool).await?;

        let create_sql = self.schema.create_table_sql();
        debug!("{create_sql}");
        sqlx::query(&create_sql).execute(&self.pool).await?;

        info!("✅ Table '{}' recreated", self.schema.name);
        Ok(())
    }

    /// Insert one file record and return its generated id.
    ///
    /// The insert runs in a single transaction; on any failure the
    /// transaction rolls back and nothing is written.
    pub async fn upload(
        &self,
        filename: &str,
        file_bytes: Vec<u8>,
        json_data: JsonValue,
    ) -> Result<Uuid, StoreError> {
        if file_bytes.len() > self.max_payload_size {
            return Err(StoreError::PayloadTooLarge {
                size: file_bytes.len(),
                limit: self.max_payload_size,
            });
        }

        let record = UploadedFile::new(filename, file_bytes, json_data)?;

        let mut tx = self.pool.begin().await?;
        // Bind order follows the column order declared in the schema.
        sqlx::query(&self.schema.insert_sql())
            .bind(record.id.to_string())
            .bind(&record.filename)
            .bind(record.uploaded)
            .bind(&record.file_bytes)
            .bind(&record.json_data)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!(
            "✅ Uploaded '{}' ({} bytes) as {}",
            record.filename,
            record.file_bytes.len(),
            record.id
        );

        Ok(record.id)
    }

    /// Read one record back by id.
    pub async fn fetch(&self, id: Uuid) -> Result<Option<UploadedFile>, StoreError> {
        let row = sqlx::query(&self.schema.select_by_id_sql())
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id_text: String = row.try_get("id")?;
        let id = Uuid::parse_str(&id_text)
            .map_err(|_| StoreError::Corrupt(format!("stored id is not a UUID: {id_text:?}")))?;

        Ok(Some(UploadedFile {
            id,
            filename: row.try_get("filename")?,
            uploaded: row.try_get("uploaded")?,
            file_bytes: row.try_get("file_bytes")?,
            json_data: row.try_get("json_data")?,
        }))
    }

    /// Number of rows currently in the table.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let row = sqlx::query(&self.schema.count_sql())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get(0)?)
    }
}
