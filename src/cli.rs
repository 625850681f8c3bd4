//! CLI argument parsing and forge configuration.
use clap::Parser;
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::env;

use crate::{
    command::update_notes::UpdateRequest,
    error::{Result, UpdaterError},
    forge::config::RemoteConfig,
};

/// CLI arguments for updating release notes from a CI job.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "")]
    /// Content to prepend to the release notes.
    pub prepend: String,

    #[arg(long, default_value = "")]
    /// Content to append to the release notes.
    pub append: String,

    #[arg(long, default_value = "")]
    /// Skip the update when the current notes match this pattern. Compiled
    /// as a regex when possible, otherwise treated as literal text.
    pub skip_if_contains: String,

    #[arg(long, default_value = "")]
    /// Numeric id of the target release. Takes priority over --tag-name.
    pub release_id: String,

    #[arg(long, default_value = "")]
    /// Tag identifying the target release.
    pub tag_name: String,

    #[arg(long, default_value = "")]
    /// GitHub repository URL (https://github.com/owner/repo). Falls back to
    /// the GITHUB_SERVER_URL and GITHUB_REPOSITORY env vars set by CI.
    pub github_repo: String,

    #[arg(long, default_value = "")]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value_t = false)]
    /// Log the would-be update without mutating the release.
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Parse the release selector and content fragments into a request.
    pub fn update_request(&self) -> Result<UpdateRequest> {
        let release_id = if self.release_id.is_empty() {
            None
        } else {
            let id = self.release_id.parse::<u64>().map_err(|_| {
                UpdaterError::invalid_args(format!(
                    "release-id must be a numeric identifier: got: {}",
                    self.release_id
                ))
            })?;
            Some(id)
        };

        let tag_name = if self.tag_name.is_empty() {
            None
        } else {
            Some(self.tag_name.clone())
        };

        Ok(UpdateRequest {
            release_id,
            tag_name,
            prepend: self.prepend.clone(),
            append: self.append.clone(),
            skip_if_contains: self.skip_if_contains.clone(),
        })
    }

    /// Configure remote repository connection from CLI arguments, falling
    /// back to the execution context provided by CI env vars.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        let repo_url = if !self.github_repo.is_empty() {
            self.github_repo.clone()
        } else if let Ok(path) = env::var("GITHUB_REPOSITORY")
            && !path.is_empty()
        {
            let server = env::var("GITHUB_SERVER_URL")
                .unwrap_or_else(|_| "https://github.com".to_string());
            format!("{server}/{path}")
        } else {
            return Err(UpdaterError::invalid_config(
                "must configure a github repo",
            ));
        };

        get_github_remote(&repo_url, &self.github_token, self.dry_run)
    }
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(UpdaterError::InvalidRemoteUrl(
            "only http and https schemes are supported for repo urls".into(),
        )),
    }
}

/// Configure GitHub remote with URL parsing and token resolution.
fn get_github_remote(
    github_repo: &str,
    github_token: &str,
    dry_run: bool,
) -> Result<RemoteConfig> {
    let parsed = GitUrl::parse(github_repo)?;

    validate_scheme(parsed.scheme)?;

    let mut token = github_token.to_string();

    if token.is_empty()
        && let Some(parsed_token) = parsed.token
    {
        token = parsed_token;
    }

    if token.is_empty()
        && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
    {
        token = env_var_token;
    }

    if token.is_empty() {
        return Err(UpdaterError::invalid_config("must set github token"));
    }

    let host = parsed.host.ok_or(UpdaterError::InvalidRemoteUrl(
        "unable to parse host from github repo".into(),
    ))?;

    let owner = parsed.owner.ok_or(UpdaterError::InvalidRemoteUrl(
        "unable to parse owner from github repo".into(),
    ))?;

    let path = parsed
        .path
        .strip_prefix("/")
        .ok_or(UpdaterError::InvalidRemoteUrl(
            "failed to process project path".into(),
        ))?
        .to_string();

    Ok(RemoteConfig {
        host,
        scheme: parsed.scheme.to_string(),
        owner,
        repo: parsed.name,
        path,
        token: SecretString::from(token),
        dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn parses_numeric_release_id() {
        let args = Args {
            release_id: "12345".into(),
            tag_name: "v1.0.0".into(),
            ..Default::default()
        };

        let req = args.update_request().unwrap();

        assert_eq!(req.release_id, Some(12345));
        assert_eq!(req.tag_name.as_deref(), Some("v1.0.0"));
    }

    #[test]
    fn rejects_non_numeric_release_id() {
        let args = Args {
            release_id: "not-a-number".into(),
            ..Default::default()
        };

        let err = args.update_request().unwrap_err();

        assert!(matches!(err, UpdaterError::InvalidArgs(_)));
    }

    #[test]
    fn empty_selectors_map_to_none() {
        let args = Args::default();

        let req = args.update_request().unwrap();

        assert!(req.release_id.is_none());
        assert!(req.tag_name.is_none());
    }

    #[test]
    fn builds_remote_config_from_repo_url() {
        let args = Args {
            github_repo: "https://github.com/octo-org/octo-repo".into(),
            github_token: "token".into(),
            ..Default::default()
        };

        let config = args.get_remote().unwrap();

        assert_eq!(config.host, "github.com");
        assert_eq!(config.scheme, "https");
        assert_eq!(config.owner, "octo-org");
        assert_eq!(config.repo, "octo-repo");
        assert_eq!(config.path, "octo-org/octo-repo");
        assert_eq!(config.token.expose_secret(), "token");
    }

    #[test]
    fn falls_back_to_repository_env_vars() {
        temp_env::with_vars(
            [
                ("GITHUB_REPOSITORY", Some("octo-org/octo-repo")),
                ("GITHUB_SERVER_URL", None::<&str>),
            ],
            || {
                let args = Args {
                    github_token: "token".into(),
                    ..Default::default()
                };

                let config = args.get_remote().unwrap();

                assert_eq!(config.host, "github.com");
                assert_eq!(config.owner, "octo-org");
                assert_eq!(config.repo, "octo-repo");
            },
        );
    }

    #[test]
    fn falls_back_to_token_env_var() {
        temp_env::with_var("GITHUB_TOKEN", Some("env-token"), || {
            let args = Args {
                github_repo: "https://github.com/octo-org/octo-repo".into(),
                ..Default::default()
            };

            let config = args.get_remote().unwrap();

            assert_eq!(config.token.expose_secret(), "env-token");
        });
    }

    #[test]
    fn fails_without_repo() {
        temp_env::with_var("GITHUB_REPOSITORY", None::<&str>, || {
            let args = Args {
                github_token: "token".into(),
                ..Default::default()
            };

            let err = args.get_remote().unwrap_err();

            assert!(matches!(err, UpdaterError::InvalidConfig(_)));
        });
    }

    #[test]
    fn fails_without_token() {
        temp_env::with_var("GITHUB_TOKEN", None::<&str>, || {
            let args = Args {
                github_repo: "https://github.com/octo-org/octo-repo".into(),
                ..Default::default()
            };

            let err = args.get_remote().unwrap_err();

            assert!(matches!(err, UpdaterError::InvalidConfig(_)));
        });
    }

    #[test]
    fn rejects_unsupported_schemes() {
        let args = Args {
            github_repo: "git@github.com:octo-org/octo-repo.git".into(),
            github_token: "token".into(),
            ..Default::default()
        };

        let err = args.get_remote().unwrap_err();

        assert!(matches!(err, UpdaterError::InvalidRemoteUrl(_)));
    }
}
