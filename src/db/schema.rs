//! SQL DDL for initializing the profile storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `config`: key/value rows, expected keys `bio`, `email`, `password`
/// - `links`: `created_at` stored as RFC3339 text with millisecond precision,
///   so lexical order is chronological order
/// - `blobs`: named binary objects with their content type and ETag
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS config (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS links (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    url TEXT NOT NULL,
    icon TEXT NULL,
    description TEXT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_links_created_at ON links(created_at);

CREATE TABLE IF NOT EXISTS blobs (
    key TEXT PRIMARY KEY,
    content_type TEXT NOT NULL,
    etag TEXT NOT NULL,
    data BLOB NOT NULL,
    updated_at TEXT NOT NULL
);
"#;
