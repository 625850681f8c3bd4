//! Release notes update command implementation.
use log::*;

use crate::{
    cli,
    error::{Result, UpdaterError},
    forge::{
        github::Github,
        manager::ForgeManager,
        types::{Release, UpdateReleaseRequest},
    },
    notes, output,
};

/// Name of the workflow output carrying the final body text.
pub const UPDATED_BODY_OUTPUT: &str = "updated-body";

/// Parsed release selector and content fragments for a single run.
#[derive(Debug, Clone, Default)]
pub struct UpdateRequest {
    /// Numeric release identifier. Takes priority over `tag_name`.
    pub release_id: Option<u64>,
    /// Tag identifying the release when no id is given.
    pub tag_name: Option<String>,
    pub prepend: String,
    pub append: String,
    pub skip_if_contains: String,
}

/// Execute the update-notes command.
pub async fn execute(args: &cli::Args) -> Result<()> {
    if args.prepend.is_empty() && args.append.is_empty() {
        warn!("no content to add: both append and prepend are empty");
        return Ok(());
    }

    let req = args.update_request()?;
    let config = args.get_remote()?;
    let forge = Github::new(config)?;
    let manager = ForgeManager::new(Box::new(forge));

    let updated = update_release_notes(&manager, &req).await?;

    output::set_output(UPDATED_BODY_OUTPUT, &updated).await
}

/// Resolve the target release, evaluate the skip condition, and update the
/// notes. Returns the final body: the composed result, or the current body
/// unchanged when the skip pattern matches.
pub async fn update_release_notes(
    manager: &ForgeManager,
    req: &UpdateRequest,
) -> Result<String> {
    let release = resolve_release(manager, req).await?;

    info!(
        "current release body length: {} characters",
        release.body.len()
    );

    if !req.skip_if_contains.is_empty()
        && notes::should_skip(&release.body, &req.skip_if_contains)
    {
        info!(
            "skipping update: release notes already contain the configured pattern"
        );
        return Ok(release.body);
    }

    let body = notes::compose_body(&release.body, &req.prepend, &req.append);

    manager
        .update_release(UpdateReleaseRequest {
            release_id: release.id,
            body: body.clone(),
        })
        .await?;

    info!(
        "release notes updated successfully: new length: {} characters",
        body.len()
    );

    Ok(body)
}

/// Resolve the target release by id when given, falling back to tag lookup.
/// Only one lookup path is ever attempted.
async fn resolve_release(
    manager: &ForgeManager,
    req: &UpdateRequest,
) -> Result<Release> {
    if let Some(id) = req.release_id {
        return manager.get_release_by_id(id).await;
    }

    if let Some(tag) = req.tag_name.as_deref() {
        return manager.get_release_by_tag(tag).await;
    }

    Err(UpdaterError::invalid_config(
        "no release-id or tag-name provided",
    ))
}
