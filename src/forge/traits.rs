//! Traits related to remote git forges
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        types::{Release, UpdateReleaseRequest},
    },
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge {
    fn remote_config(&self) -> RemoteConfig;
    async fn get_release_by_id(&self, id: u64) -> Result<Release>;
    async fn get_release_by_tag(&self, tag: &str) -> Result<Release>;
    async fn update_release(&self, req: UpdateReleaseRequest) -> Result<()>;
}
