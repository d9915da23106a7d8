use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::db::{BlobStorage, ProfileStorage, SqlitePool};
use crate::handlers::admin_api::{
    add_link_handler, delete_link_handler, login_handler, logout_handler, update_config_handler,
    upload_avatar_handler,
};
use crate::handlers::pages::{admin_handler, avatar_handler, health_handler, home_handler};

/// Request body cap for avatar uploads; other routes keep axum's 2 MiB default.
pub const AVATAR_BODY_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct LinkPageState {
    pub profile: ProfileStorage,
    pub blobs: BlobStorage,
    pub insecure_cookie: bool,
}

impl LinkPageState {
    pub fn new(pool: SqlitePool, insecure_cookie: bool) -> Self {
        Self {
            profile: ProfileStorage::new(pool.clone()),
            blobs: BlobStorage::new(pool),
            insecure_cookie,
        }
    }
}

pub fn linkpage_router(state: LinkPageState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/avatar", get(avatar_handler))
        .route("/admin", get(admin_handler))
        .route("/healthz", get(health_handler))
        .route("/api/login", post(login_handler))
        .route("/api/logout", post(logout_handler))
        .route("/api/config", post(update_config_handler))
        .route("/api/links", post(add_link_handler))
        .route("/api/links/delete", post(delete_link_handler))
        .route(
            "/api/avatar",
            post(upload_avatar_handler).layer(DefaultBodyLimit::max(AVATAR_BODY_LIMIT)),
        )
        .with_state(state)
}
