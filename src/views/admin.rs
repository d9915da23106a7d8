use maud::{Markup, html};

use super::page;
use crate::db::{Link, SiteConfig};

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#f4f4f5;color:#18181b}\
main{max-width:640px;margin:0 auto;padding:40px 20px}\
section{background:#fff;border:1px solid #e4e4e7;border-radius:12px;padding:20px;margin-bottom:20px}\
label{display:block;font-size:13px;margin:10px 0 4px;color:#52525b}\
input[type=text],input[type=url],input[type=password],textarea{width:100%;box-sizing:border-box;padding:8px;\
border:1px solid #d4d4d8;border-radius:8px;font:inherit}\
textarea{min-height:96px}\
button{margin-top:12px;padding:8px 16px;border:0;border-radius:8px;background:#18181b;color:#fff;cursor:pointer}\
.links{list-style:none;padding:0;margin:0}\
.links li{display:flex;justify-content:space-between;align-items:center;gap:12px;padding:10px 0;border-top:1px solid #f4f4f5}\
.links .url{color:#71717a;font-size:12px;word-break:break-all}\
.links button{margin:0;background:#dc2626}";

/// Standalone password form shown to visitors without a session.
pub fn render_login() -> Markup {
    let body = html! {
        main {
            section {
                h1 { "Admin" }
                form method="post" action="/api/login" {
                    label for="password" { "Password" }
                    input type="password" id="password" name="password" required autofocus;
                    button type="submit" { "Log in" }
                }
            }
        }
    };
    page("Admin login", STYLE, body)
}

/// Management view: bio editor, new-link form, avatar upload, existing links.
pub fn render_dashboard(cfg: &SiteConfig, links: &[Link]) -> Markup {
    let body = html! {
        main {
            section {
                h1 { "Profile" }
                form method="post" action="/api/config" {
                    label for="bio" { "Bio" }
                    textarea id="bio" name="bio" { (cfg.bio) }
                    label for="email" { "Email" }
                    input type="text" id="email" name="email" value=(cfg.email);
                    button type="submit" { "Save" }
                }
            }
            section {
                h2 { "Avatar" }
                form method="post" action="/api/avatar" enctype="multipart/form-data" {
                    input type="file" name="avatar" accept="image/*" required;
                    button type="submit" { "Upload" }
                }
            }
            section {
                h2 { "Add link" }
                form method="post" action="/api/links" {
                    label for="title" { "Title" }
                    input type="text" id="title" name="title" required;
                    label for="url" { "URL" }
                    input type="url" id="url" name="url" required;
                    label for="icon" { "Icon (optional)" }
                    input type="text" id="icon" name="icon";
                    label for="description" { "Description (optional)" }
                    input type="text" id="description" name="description";
                    button type="submit" { "Add" }
                }
            }
            section {
                h2 { "Links (" (links.len()) ")" }
                ul.links {
                    @for link in links {
                        li {
                            span {
                                (link.title)
                                br;
                                span.url { (link.url) }
                            }
                            form method="post" action="/api/links/delete"
                                onsubmit="return confirm('Delete this link?')" {
                                input type="hidden" name="id" value=(link.id);
                                button type="submit" { "Delete" }
                            }
                        }
                    }
                }
            }
            form method="post" action="/api/logout" {
                button type="submit" { "Log out" }
            }
        }
    };
    page("Admin", STYLE, body)
}
