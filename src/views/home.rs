use maud::{Markup, html};

use super::{PLACEHOLDER_AVATAR, page};
use crate::db::{Link, SiteConfig, is_allowed_link_url};

pub const DEFAULT_ICON: &str = "✦";
pub const DEFAULT_DESCRIPTION: &str = "click to visit";

const STYLE: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#fafafa;color:#18181b}\
main{max-width:560px;margin:0 auto;padding:48px 20px;text-align:center}\
.avatar{width:96px;height:96px;border-radius:50%;object-fit:cover}\
.bio{margin:16px 0 4px;white-space:pre-line}\
.email{color:#52525b;font-size:14px}\
.links{list-style:none;padding:0;margin:32px 0 0}\
.links a{display:flex;gap:14px;align-items:center;padding:14px 18px;margin-bottom:12px;\
border-radius:12px;background:#fff;border:1px solid #e4e4e7;color:inherit;text-decoration:none;text-align:left}\
.links .icon{font-size:22px}.links .title{font-weight:600}.links .desc{color:#71717a;font-size:13px}";

/// Public profile page. `links` are emitted in the order given.
pub fn render_home(cfg: &SiteConfig, links: &[Link]) -> Markup {
    let fallback = format!("this.onerror=null;this.src='{PLACEHOLDER_AVATAR}'");
    let body = html! {
        main {
            img.avatar src="/avatar" alt="avatar" onerror=(fallback);
            p.bio { (cfg.bio) }
            a.email href={ "mailto:" (cfg.email) } { (cfg.email) }
            ul.links {
                @for link in links {
                    li {
                        @if is_allowed_link_url(&link.url) {
                            a href=(link.url) target="_blank" rel="noopener noreferrer" {
                                (link_card(link))
                            }
                        } @else {
                            a { (link_card(link)) }
                        }
                    }
                }
            }
        }
    };
    page("Links", STYLE, body)
}

fn link_card(link: &Link) -> Markup {
    html! {
        span.icon { (link.icon.as_deref().unwrap_or(DEFAULT_ICON)) }
        span {
            span.title { (link.title) }
            br;
            span.desc { (link.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)) }
        }
    }
}
