pub mod auth;

pub use auth::{AUTH_COOKIE, end_session, is_authenticated, issue_session, verify_password};
