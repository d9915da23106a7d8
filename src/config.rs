use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration.
///
/// Sources, lowest precedence first:
/// - built-in defaults
/// - `config.toml` in the working directory (optional)
/// - `LINKPAGE_*` environment variables, `__` separating sections
///   (e.g. `LINKPAGE_BASIC__LISTEN_ADDR=127.0.0.1:3000`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub basic: BasicConfig,
    pub profile: ProfileSeed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
    /// Drop the `Secure` attribute from the session cookie (plain-http dev setups).
    pub insecure_cookie: bool,
    /// Image imported as `avatar.png` on startup.
    pub avatar_path: Option<PathBuf>,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:linkpage.db".to_string(),
            loglevel: "info".to_string(),
            insecure_cookie: false,
            avatar_path: None,
        }
    }
}

/// Initial values for the config table. Only written when the row is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSeed {
    pub bio: String,
    pub email: String,
    pub password: String,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LINKPAGE_").split("__"))
    }
}
