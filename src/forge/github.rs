//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        traits::Forge,
        types::{Release, UpdateReleaseRequest},
    },
};

#[derive(Debug, Deserialize)]
struct ReleasePayload {
    pub id: u64,
    pub body: Option<String>,
}

impl From<ReleasePayload> for Release {
    fn from(payload: ReleasePayload) -> Self {
        Release {
            id: payload.id,
            body: payload.body.unwrap_or_default(),
        }
    }
}

/// GitHub forge implementation using Octocrab for release lookups and
/// release note updates.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = format!("{}://api.{}", config.scheme, config.host);
        let builder = Octocrab::builder()
            .personal_token(config.token.expose_secret().to_string())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }

    fn release_endpoint(&self, selector: &str) -> String {
        format!(
            "{}/repos/{}/{}/releases/{}",
            self.base_uri, self.config.owner, self.config.repo, selector
        )
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn get_release_by_id(&self, id: u64) -> Result<Release> {
        info!("fetching release by id: {id}");

        let endpoint = self.release_endpoint(&id.to_string());
        let payload: ReleasePayload =
            self.instance.get(endpoint, None::<&()>).await?;

        Ok(payload.into())
    }

    async fn get_release_by_tag(&self, tag: &str) -> Result<Release> {
        info!("fetching release by tag: {tag}");

        let endpoint = self.release_endpoint(&format!("tags/{tag}"));
        let payload: ReleasePayload =
            self.instance.get(endpoint, None::<&()>).await?;

        Ok(payload.into())
    }

    async fn update_release(&self, req: UpdateReleaseRequest) -> Result<()> {
        let endpoint = self.release_endpoint(&req.release_id.to_string());

        let body = serde_json::json!({
          "body": req.body,
        });

        let _: serde_json::Value =
            self.instance.patch(endpoint, Some(&body)).await?;

        info!("updated notes for release: {}", req.release_id);

        Ok(())
    }
}
