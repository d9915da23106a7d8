use crate::config::Config;
use crate::db::{self, AVATAR_KEY, ConfigKey, ProfileStorage};
use crate::error::LinkPageError;
use crate::router::LinkPageState;
use tracing::{info, warn};

/// Open the database, apply the schema, seed missing config rows and import
/// the configured avatar. Returns state ready for [`crate::linkpage_router`].
pub async fn prepare_state(cfg: &Config) -> Result<LinkPageState, LinkPageError> {
    let pool = db::connect(&cfg.basic.database_url).await?;
    let state = LinkPageState::new(pool, cfg.basic.insecure_cookie);

    state.profile.init_schema().await?;
    seed_profile(&state.profile, cfg).await?;

    if let Some(path) = cfg.basic.avatar_path.as_ref() {
        if let Err(e) = state.blobs.import_file(AVATAR_KEY, path).await {
            warn!(path = %path.display(), error = %e, "failed to import avatar");
        }
    }

    Ok(state)
}

async fn seed_profile(profile: &ProfileStorage, cfg: &Config) -> Result<(), LinkPageError> {
    let seeds = [
        (ConfigKey::Bio, cfg.profile.bio.as_str()),
        (ConfigKey::Email, cfg.profile.email.as_str()),
        (ConfigKey::Password, cfg.profile.password.as_str()),
    ];
    for (key, value) in seeds {
        if value.is_empty() {
            continue;
        }
        if profile.seed_config(key, value).await? {
            info!(key = key.as_str(), "seeded config row");
        }
    }

    if profile.get_config(ConfigKey::Password).await?.is_none() {
        warn!("no admin password stored; set LINKPAGE_PROFILE__PASSWORD to enable /admin");
    }
    Ok(())
}
