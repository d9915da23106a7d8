use axum::{
    Form,
    extract::{
        Multipart, State,
        multipart::MultipartRejection,
        rejection::FormRejection,
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tracing::{info, warn};

use crate::db::{AVATAR_KEY, ConfigKey, NewLink, is_allowed_link_url};
use crate::middleware::{end_session, is_authenticated, issue_session, verify_password};
use crate::{LinkPageError, router::LinkPageState};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfigForm {
    pub bio: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddLinkForm {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteLinkForm {
    pub id: i64,
}

impl TryFrom<AddLinkForm> for NewLink {
    type Error = LinkPageError;

    fn try_from(form: AddLinkForm) -> Result<Self, Self::Error> {
        let title = form.title.trim();
        let url = form.url.trim();
        if title.is_empty() {
            return Err(LinkPageError::InvalidInput("title is required".to_string()));
        }
        if url.is_empty() {
            return Err(LinkPageError::InvalidInput("url is required".to_string()));
        }
        if !is_allowed_link_url(url) {
            return Err(LinkPageError::InvalidInput(
                "url must be an absolute http, https or mailto address".to_string(),
            ));
        }
        Ok(NewLink {
            title: title.to_string(),
            url: url.to_string(),
            icon: non_empty(form.icon),
            description: non_empty(form.description),
        })
    }
}

/// Browsers submit untouched optional inputs as empty strings.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 302 back to the admin console. Also where unauthenticated mutations are bounced.
pub fn redirect_to_admin() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/admin")]).into_response()
}

/// POST /api/login
pub async fn login_handler(
    State(state): State<LinkPageState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, LinkPageError> {
    let stored = state
        .profile
        .get_config(ConfigKey::Password)
        .await?
        .unwrap_or_default();

    if !verify_password(&form.password, &stored) {
        warn!("admin login rejected: wrong password");
        return Ok((StatusCode::FORBIDDEN, "wrong password").into_response());
    }

    info!("admin login accepted");
    let jar = issue_session(jar, state.insecure_cookie);
    Ok((jar, redirect_to_admin()).into_response())
}

/// POST /api/logout
pub async fn logout_handler(jar: CookieJar) -> Response {
    (end_session(jar), redirect_to_admin()).into_response()
}

/// POST /api/config
pub async fn update_config_handler(
    State(state): State<LinkPageState>,
    jar: CookieJar,
    form: Result<Form<ConfigForm>, FormRejection>,
) -> Result<Response, LinkPageError> {
    if !is_authenticated(&jar) {
        return Ok(redirect_to_admin());
    }
    let Form(form) = form?;

    state.profile.set_config(ConfigKey::Bio, &form.bio).await?;
    if let Some(email) = form.email.as_deref() {
        state
            .profile
            .set_config(ConfigKey::Email, email.trim())
            .await?;
    }
    info!(
        bio_len = form.bio.len(),
        email_updated = form.email.is_some(),
        "profile config updated"
    );
    Ok(redirect_to_admin())
}

/// POST /api/links
pub async fn add_link_handler(
    State(state): State<LinkPageState>,
    jar: CookieJar,
    form: Result<Form<AddLinkForm>, FormRejection>,
) -> Result<Response, LinkPageError> {
    if !is_authenticated(&jar) {
        return Ok(redirect_to_admin());
    }
    let Form(form) = form?;

    let link = state.profile.insert_link(NewLink::try_from(form)?).await?;
    info!(id = link.id, title = %link.title, url = %link.url, "link added");
    Ok(redirect_to_admin())
}

/// POST /api/links/delete
pub async fn delete_link_handler(
    State(state): State<LinkPageState>,
    jar: CookieJar,
    form: Result<Form<DeleteLinkForm>, FormRejection>,
) -> Result<Response, LinkPageError> {
    if !is_authenticated(&jar) {
        return Ok(redirect_to_admin());
    }
    let Form(form) = form?;

    let removed = state.profile.delete_link(form.id).await?;
    info!(id = form.id, removed, "link delete requested");
    Ok(redirect_to_admin())
}

/// POST /api/avatar (multipart field `avatar`)
pub async fn upload_avatar_handler(
    State(state): State<LinkPageState>,
    jar: CookieJar,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, LinkPageError> {
    if !is_authenticated(&jar) {
        return Ok(redirect_to_admin());
    }
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("avatar") {
            continue;
        }
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        if !content_type.starts_with("image/") {
            return Err(LinkPageError::InvalidInput(format!(
                "avatar must be an image, got {content_type}"
            )));
        }
        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(LinkPageError::InvalidInput("avatar file is empty".to_string()));
        }

        let etag = state.blobs.put(AVATAR_KEY, &data, &content_type).await?;
        info!(size = data.len(), content_type = %content_type, etag = %etag, "avatar replaced");
        return Ok(redirect_to_admin());
    }

    Err(LinkPageError::InvalidInput(
        "missing `avatar` file field".to_string(),
    ))
}
