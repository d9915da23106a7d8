use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use subtle::ConstantTimeEq;
use time::Duration;

/// Name of the admin session cookie.
pub const AUTH_COOKIE: &str = "auth";
/// The only value that counts as an admin session.
pub const AUTH_VALUE: &str = "true";
pub const SESSION_DAYS: i64 = 7;

/// Authorization guard for admin-only handlers.
///
/// The cookie value itself is the whole credential: there is no server-side
/// session and nothing is signed, so a hand-crafted `auth=true` passes too.
pub fn is_authenticated(jar: &CookieJar) -> bool {
    jar.get(AUTH_COOKIE)
        .is_some_and(|c| c.value() == AUTH_VALUE)
}

/// Add the admin session cookie to the jar.
pub fn issue_session(jar: CookieJar, insecure_cookie: bool) -> CookieJar {
    jar.add(build_cookie(insecure_cookie))
}

/// Remove the admin session cookie from the client.
pub fn end_session(jar: CookieJar) -> CookieJar {
    jar.remove(clear_cookie())
}

/// Compare a submitted password with the stored one.
///
/// Stored value is plaintext. An empty stored password never matches, so a
/// database without a `password` row cannot be logged into.
pub fn verify_password(submitted: &str, stored: &str) -> bool {
    if stored.is_empty() {
        return false;
    }
    bool::from(submitted.as_bytes().ct_eq(stored.as_bytes()))
}

fn build_cookie(insecure_cookie: bool) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, AUTH_VALUE))
        .path("/")
        .http_only(true)
        .secure(!insecure_cookie)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(SESSION_DAYS))
        .build()
}

fn clear_cookie() -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, "")).path("/").build()
}
