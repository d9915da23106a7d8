use crate::db::sqlite::SqlitePool;
use crate::error::LinkPageError;
use chrono::{SecondsFormat, Utc};
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::info;

/// Key of the single object the public page reads.
pub const AVATAR_KEY: &str = "avatar.png";

#[derive(Debug, Clone, PartialEq)]
pub struct StoredBlob {
    pub content_type: String,
    /// Quoted strong ETag derived from the content hash.
    pub etag: String,
    pub data: Vec<u8>,
}

/// Named binary objects kept in the `blobs` table.
#[derive(Clone)]
pub struct BlobStorage {
    pool: SqlitePool,
}

impl BlobStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, key: &str) -> Result<Option<StoredBlob>, LinkPageError> {
        let rec: Option<(String, String, Vec<u8>)> =
            sqlx::query_as("SELECT content_type, etag, data FROM blobs WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(rec.map(|(content_type, etag, data)| StoredBlob {
            content_type,
            etag,
            data,
        }))
    }

    /// Store (or replace) an object and return its ETag.
    pub async fn put(
        &self,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<String, LinkPageError> {
        let etag = content_etag(data);
        sqlx::query(
            r#"
            INSERT INTO blobs (key, content_type, etag, data, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                content_type = excluded.content_type,
                etag = excluded.etag,
                data = excluded.data,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(content_type)
        .bind(&etag)
        .bind(data)
        .bind(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
        .execute(&self.pool)
        .await?;
        Ok(etag)
    }

    /// Read a file from disk and store it under `key`.
    pub async fn import_file(&self, key: &str, path: &Path) -> Result<String, LinkPageError> {
        let data = tokio::fs::read(path).await?;
        let content_type = content_type_for(path);
        let etag = self.put(key, &data, content_type).await?;
        info!(
            key,
            path = %path.display(),
            size = data.len(),
            content_type,
            "imported blob from file"
        );
        Ok(etag)
    }
}

/// `"<hex sha256>"`, usable verbatim as an ETag header value.
pub fn content_etag(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("\"{:x}\"", hasher.finalize())
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
