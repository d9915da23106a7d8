use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One outbound link as stored in the `links` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a link; id and timestamp are server-assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewLink {
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}

/// URL schemes a link may point at.
pub const ALLOWED_LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Whether `raw` is an absolute URL with an allowed scheme.
/// Anything else (`javascript:`, `data:`, relative paths) must not become an `href`.
pub fn is_allowed_link_url(raw: &str) -> bool {
    url::Url::parse(raw.trim())
        .map(|u| ALLOWED_LINK_SCHEMES.contains(&u.scheme()))
        .unwrap_or(false)
}

/// The closed set of keys the `config` table is read and written through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Bio,
    Email,
    Password,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [ConfigKey::Bio, ConfigKey::Email, ConfigKey::Password];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::Bio => "bio",
            ConfigKey::Email => "email",
            ConfigKey::Password => "password",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// Typed view over the `config` rows. Missing rows load as empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteConfig {
    pub bio: String,
    pub email: String,
    pub password: String,
}

impl SiteConfig {
    pub fn set(&mut self, key: ConfigKey, value: String) {
        match key {
            ConfigKey::Bio => self.bio = value,
            ConfigKey::Email => self.email = value,
            ConfigKey::Password => self.password = value,
        }
    }
}
