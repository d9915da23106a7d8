use crate::db::models::{ConfigKey, Link, NewLink, SiteConfig};
use crate::db::schema::SQLITE_INIT;
use crate::error::LinkPageError;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if missing) the SQLite database behind `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, LinkPageError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    Ok(pool)
}

/// Config store and link store, both backed by the same pool.
#[derive(Clone)]
pub struct ProfileStorage {
    pool: SqlitePool,
}

impl ProfileStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), LinkPageError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn load_site_config(&self) -> Result<SiteConfig, LinkPageError> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT key, value FROM config WHERE key IN (?, ?, ?)")
                .bind(ConfigKey::Bio.as_str())
                .bind(ConfigKey::Email.as_str())
                .bind(ConfigKey::Password.as_str())
                .fetch_all(&self.pool)
                .await?;

        let mut cfg = SiteConfig::default();
        for (key, value) in rows {
            if let Some(key) = ConfigKey::parse(&key) {
                cfg.set(key, value);
            }
        }
        Ok(cfg)
    }

    pub async fn get_config(&self, key: ConfigKey) -> Result<Option<String>, LinkPageError> {
        let rec: Option<(String,)> = sqlx::query_as("SELECT value FROM config WHERE key = ?")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(rec.map(|r| r.0))
    }

    /// Overwrite (or create) a config row. Last write wins.
    pub async fn set_config(&self, key: ConfigKey, value: &str) -> Result<(), LinkPageError> {
        sqlx::query(
            r#"
            INSERT INTO config (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key.as_str())
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a config row only when it does not exist yet. Returns whether it was written.
    pub async fn seed_config(&self, key: ConfigKey, value: &str) -> Result<bool, LinkPageError> {
        let res = sqlx::query("INSERT OR IGNORE INTO config (key, value) VALUES (?, ?)")
            .bind(key.as_str())
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    /// All links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, LinkPageError> {
        let rows = sqlx::query(
            r#"SELECT id, title, url, icon, description, created_at
               FROM links ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_link).collect()
    }

    pub async fn insert_link(&self, link: NewLink) -> Result<Link, LinkPageError> {
        let created_at = Utc::now().trunc_subsecs(3);
        let res = sqlx::query(
            r#"INSERT INTO links (title, url, icon, description, created_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(&link.title)
        .bind(&link.url)
        .bind(&link.icon)
        .bind(&link.description)
        .bind(created_at.to_rfc3339_opts(SecondsFormat::Millis, true))
        .execute(&self.pool)
        .await?;

        Ok(Link {
            id: res.last_insert_rowid(),
            title: link.title,
            url: link.url,
            icon: link.icon,
            description: link.description,
            created_at,
        })
    }

    /// Delete by id. Returns whether a row was removed; unknown ids are a no-op.
    pub async fn delete_link(&self, id: i64) -> Result<bool, LinkPageError> {
        let res = sqlx::query("DELETE FROM links WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    fn row_to_link(row: SqliteRow) -> Result<Link, LinkPageError> {
        let id: i64 = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let url: String = row.try_get("url")?;
        let icon: Option<String> = row.try_get("icon")?;
        let description: Option<String> = row.try_get("description")?;
        let created_at_str: String = row.try_get("created_at")?;

        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(Link {
            id,
            title,
            url,
            icon,
            description,
            created_at,
        })
    }
}
