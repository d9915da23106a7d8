#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use linkpage::{LinkPageState, config::Config, linkpage_router, service::prepare_state};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

pub const PASSWORD: &str = "correct horse";
pub const SEED_BIO: &str = "seeded biography";
pub const SEED_EMAIL: &str = "me@example.com";
pub const ADMIN_COOKIE: &str = "auth=true";

pub struct TestApp {
    pub app: Router,
    pub state: LinkPageState,
    db_path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.db_path);
        for suffix in ["-wal", "-shm"] {
            let mut p = self.db_path.clone().into_os_string();
            p.push(suffix);
            let _ = fs::remove_file(p);
        }
    }
}

fn temp_db_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "linkpage-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    temp_path
}

/// App over a fresh database seeded with bio, email and password.
pub async fn spawn_app() -> TestApp {
    let mut cfg = Config::default();
    cfg.profile.bio = SEED_BIO.to_string();
    cfg.profile.email = SEED_EMAIL.to_string();
    cfg.profile.password = PASSWORD.to_string();
    spawn_app_with(cfg).await
}

/// App over a fresh database with no config rows at all.
pub async fn spawn_unseeded_app() -> TestApp {
    spawn_app_with(Config::default()).await
}

pub async fn spawn_app_with(mut cfg: Config) -> TestApp {
    let db_path = temp_db_path("test");
    cfg.basic.database_url = format!("sqlite:{}", db_path.display());
    cfg.basic.insecure_cookie = true;

    let state = prepare_state(&cfg).await.expect("failed to prepare state");
    let app = linkpage_router(state.clone());
    TestApp {
        app,
        state,
        db_path,
    }
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(req).await.expect("request failed")
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).expect("failed to build request"))
            .await
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(
            builder
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
        )
        .await
    }
}

pub async fn body_string(resp: Response<Body>) -> String {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(body.to_vec()).expect("response body was not utf-8")
}

pub fn location(resp: &Response<Body>) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub fn set_cookies(resp: &Response<Body>) -> Vec<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect()
}
