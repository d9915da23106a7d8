mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use common::{ADMIN_COOKIE, body_string, location, spawn_app, spawn_app_with};
use linkpage::config::Config;
use linkpage::db::{AVATAR_KEY, blob::content_etag};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";
const BOUNDARY: &str = "linkpage-test-boundary";

fn multipart_body(field: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"me.png\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(cookie: Option<&str>, body: Vec<u8>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/avatar")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).expect("failed to build request")
}

#[tokio::test]
async fn missing_avatar_is_not_found() {
    let t = spawn_app().await;

    let resp = t.get("/avatar", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(resp).await, "No Avatar");
}

#[tokio::test]
async fn stored_avatar_is_served_with_etag() {
    let t = spawn_app().await;
    let etag = t
        .state
        .blobs
        .put(AVATAR_KEY, PNG_BYTES, "image/png")
        .await
        .expect("put failed");
    assert_eq!(etag, content_etag(PNG_BYTES));

    let resp = t.get("/avatar", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
    assert_eq!(
        resp.headers().get(header::ETAG).and_then(|v| v.to_str().ok()),
        Some(etag.as_str())
    );
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(&body[..], PNG_BYTES);
}

#[tokio::test]
async fn matching_if_none_match_is_not_modified() {
    let t = spawn_app().await;
    let etag = t
        .state
        .blobs
        .put(AVATAR_KEY, PNG_BYTES, "image/png")
        .await
        .expect("put failed");

    let resp = t
        .send(
            Request::builder()
                .uri("/avatar")
                .header(header::IF_NONE_MATCH, etag.as_str())
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert!(body.is_empty());

    let resp = t
        .send(
            Request::builder()
                .uri("/avatar")
                .header(header::IF_NONE_MATCH, "\"stale\"")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn upload_without_session_is_bounced() {
    let t = spawn_app().await;

    let resp = t
        .send(upload_request(None, multipart_body("avatar", "image/png", PNG_BYTES)))
        .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/admin"));

    let stored = t.state.blobs.get(AVATAR_KEY).await.expect("get failed");
    assert!(stored.is_none());
}

#[tokio::test]
async fn upload_with_session_replaces_avatar() {
    let t = spawn_app().await;
    t.state
        .blobs
        .put(AVATAR_KEY, b"old", "image/gif")
        .await
        .expect("put failed");

    let resp = t
        .send(upload_request(
            Some(ADMIN_COOKIE),
            multipart_body("avatar", "image/png", PNG_BYTES),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), Some("/admin"));

    let stored = t
        .state
        .blobs
        .get(AVATAR_KEY)
        .await
        .expect("get failed")
        .expect("avatar missing after upload");
    assert_eq!(stored.data, PNG_BYTES);
    assert_eq!(stored.content_type, "image/png");
    assert_eq!(stored.etag, content_etag(PNG_BYTES));
}

#[tokio::test]
async fn upload_accepts_photos_over_two_mebibytes() {
    let t = spawn_app().await;
    let photo = vec![0xAB_u8; 3 * 1024 * 1024];

    let resp = t
        .send(upload_request(
            Some(ADMIN_COOKIE),
            multipart_body("avatar", "image/jpeg", &photo),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let stored = t
        .state
        .blobs
        .get(AVATAR_KEY)
        .await
        .expect("get failed")
        .expect("avatar missing after upload");
    assert_eq!(stored.data.len(), photo.len());
    assert_eq!(stored.content_type, "image/jpeg");
}

#[tokio::test]
async fn upload_rejects_non_image_and_missing_field() {
    let t = spawn_app().await;

    let resp = t
        .send(upload_request(
            Some(ADMIN_COOKIE),
            multipart_body("avatar", "text/plain", b"hello"),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = t
        .send(upload_request(
            Some(ADMIN_COOKIE),
            multipart_body("picture", "image/png", PNG_BYTES),
        ))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = t.state.blobs.get(AVATAR_KEY).await.expect("get failed");
    assert!(stored.is_none());
}

#[tokio::test]
async fn avatar_file_is_imported_on_startup() {
    let mut path = std::env::temp_dir();
    path.push(format!("linkpage-avatar-{}.png", std::process::id()));
    std::fs::write(&path, PNG_BYTES).expect("failed to write avatar file");

    let mut cfg = Config::default();
    cfg.basic.avatar_path = Some(path.clone());
    let t = spawn_app_with(cfg).await;
    let _ = std::fs::remove_file(&path);

    let resp = t.get("/avatar", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let expected = content_etag(PNG_BYTES);
    assert_eq!(
        resp.headers().get(header::ETAG).and_then(|v| v.to_str().ok()),
        Some(expected.as_str())
    );
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
}

#[tokio::test]
async fn unreadable_avatar_path_does_not_block_startup() {
    let mut cfg = Config::default();
    cfg.basic.avatar_path = Some(std::env::temp_dir().join("linkpage-missing-avatar.png"));
    let t = spawn_app_with(cfg).await;

    let resp = t.get("/avatar", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
