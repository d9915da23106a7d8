use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::{TypedHeader, extract::CookieJar};
use headers::{ETag, IfNoneMatch};
use maud::Markup;
use tracing::{debug, warn};

use crate::db::AVATAR_KEY;
use crate::middleware::is_authenticated;
use crate::views::{render_dashboard, render_home, render_login};
use crate::{LinkPageError, router::LinkPageState};

/// GET / -> public profile page.
pub async fn home_handler(
    State(state): State<LinkPageState>,
) -> Result<Markup, LinkPageError> {
    let cfg = state.profile.load_site_config().await?;
    let links = state.profile.list_links().await?;
    Ok(render_home(&cfg, &links))
}

/// GET /avatar -> stored avatar bytes with ETag, 304 on a matching `If-None-Match`, 404 when absent.
pub async fn avatar_handler(
    State(state): State<LinkPageState>,
    if_none_match: Option<TypedHeader<IfNoneMatch>>,
) -> Result<Response, LinkPageError> {
    let Some(blob) = state.blobs.get(AVATAR_KEY).await? else {
        debug!("avatar requested but none stored");
        return Ok((StatusCode::NOT_FOUND, "No Avatar").into_response());
    };

    let etag = match blob.etag.parse::<ETag>() {
        Ok(etag) => etag,
        Err(_) => {
            warn!(etag = %blob.etag, "stored avatar etag is not a valid header value");
            return Ok(([(header::CONTENT_TYPE, blob.content_type)], blob.data).into_response());
        }
    };

    if let Some(TypedHeader(inm)) = if_none_match
        && !inm.precondition_passes(&etag)
    {
        return Ok((StatusCode::NOT_MODIFIED, TypedHeader(etag)).into_response());
    }

    Ok((
        TypedHeader(etag),
        [(header::CONTENT_TYPE, blob.content_type)],
        blob.data,
    )
        .into_response())
}

/// GET /admin -> login form without a session, management view with one.
pub async fn admin_handler(
    State(state): State<LinkPageState>,
    jar: CookieJar,
) -> Result<Markup, LinkPageError> {
    if !is_authenticated(&jar) {
        return Ok(render_login());
    }
    let cfg = state.profile.load_site_config().await?;
    let links = state.profile.list_links().await?;
    Ok(render_dashboard(&cfg, &links))
}

pub async fn health_handler() -> &'static str {
    "ok"
}
