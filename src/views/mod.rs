//! HTML rendering for the public page and the admin console.
//!
//! Pages are `maud` templates; interpolated values are HTML-escaped by maud.
//! Link targets are only emitted as `href` when `db::is_allowed_link_url` accepts them.

pub mod admin;
pub mod home;

use maud::{DOCTYPE, Markup, PreEscaped, html};

pub use admin::{render_dashboard, render_login};
pub use home::render_home;

/// Shown while `/avatar` is missing; used from the `<img onerror>` handler.
pub(crate) const PLACEHOLDER_AVATAR: &str = "data:image/svg+xml,%3Csvg xmlns=%27http://www.w3.org/2000/svg%27 viewBox=%270 0 96 96%27%3E%3Crect width=%2796%27 height=%2796%27 rx=%2748%27 fill=%27%23d4d4d8%27/%3E%3Ccircle cx=%2748%27 cy=%2738%27 r=%2716%27 fill=%27%23f4f4f5%27/%3E%3Cpath d=%27M18 84c4-18 18-26 30-26s26 8 30 26%27 fill=%27%23f4f4f5%27/%3E%3C/svg%3E";

pub(crate) fn page(title: &str, style: &'static str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(style)) }
            }
            body { (body) }
        }
    }
}
