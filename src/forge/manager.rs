//! Manager that wraps forge implementations
use log::*;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        traits::Forge,
        types::{Release, UpdateReleaseRequest},
    },
};

pub struct ForgeManager {
    forge: Box<dyn Forge>,
    remote_config: RemoteConfig,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>) -> Self {
        let remote_config = forge.remote_config();
        Self {
            forge,
            remote_config,
        }
    }

    pub fn remote_config(&self) -> RemoteConfig {
        self.remote_config.clone()
    }

    pub async fn get_release_by_id(&self, id: u64) -> Result<Release> {
        self.forge.get_release_by_id(id).await
    }

    pub async fn get_release_by_tag(&self, tag: &str) -> Result<Release> {
        self.forge.get_release_by_tag(tag).await
    }

    pub async fn update_release(
        &self,
        req: UpdateReleaseRequest,
    ) -> Result<()> {
        if self.remote_config.dry_run {
            warn!(
                "dry_run: would update release {} with body:\n{}",
                req.release_id, req.body
            );
            return Ok(());
        }

        self.forge.update_release(req).await
    }
}
