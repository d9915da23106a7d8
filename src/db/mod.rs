//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and the typed config record
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: config and link access
//! - `blob.rs`: named binary objects (the avatar)

pub mod blob;
pub mod models;
pub mod schema;
pub mod sqlite;

pub use blob::{AVATAR_KEY, BlobStorage, StoredBlob};
pub use models::{ConfigKey, Link, NewLink, SiteConfig, is_allowed_link_url};
pub use schema::SQLITE_INIT;
pub use sqlite::{ProfileStorage, SqlitePool, connect};
