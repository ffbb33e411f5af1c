use std::error::Error;
use std::sync::Arc;

use action_guard_rs::admin_auth::AdminAuth;
use action_guard_rs::constants::DEV_ORIGIN;
use action_guard_rs::metadata::{MetadataOptions, SiteConfig, SiteMetadata};
use action_guard_rs::{ActionGuard, GuardOptions};

#[derive(Clone)]
pub struct AppState {
    pub guard: Arc<ActionGuard>,
    pub admin: Option<Arc<AdminAuth>>,
    pub metadata: Arc<SiteMetadata>,
}

pub fn build_state() -> Result<AppState, Box<dyn Error>> {
    let guard = ActionGuard::new(GuardOptions::from_env())?;

    let admin = match AdminAuth::from_env() {
        Ok(admin) => Some(Arc::new(admin)),
        Err(err) => {
            tracing::warn!("admin login disabled: {err}");
            None
        }
    };

    let metadata_options = match MetadataOptions::from_env() {
        Ok(options) => options,
        Err(err) => {
            tracing::warn!("falling back to {DEV_ORIGIN} for metadata: {err}");
            MetadataOptions::new(DEV_ORIGIN)?
        }
    };
    let site = SiteConfig {
        name: "Example Author".into(),
        site_name: "Example Site".into(),
        description: "Writing and projects".into(),
    };

    Ok(AppState {
        guard: Arc::new(guard),
        admin,
        metadata: Arc::new(SiteMetadata::build(&site, &metadata_options)),
    })
}

pub mod middleware;
