//! Output publication for the surrounding CI workflow.
use log::*;
use std::env;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::error::Result;

/// Env var naming the file GitHub Actions reads workflow outputs from.
pub const GITHUB_OUTPUT_VAR: &str = "GITHUB_OUTPUT";

/// Publish a named output value for the surrounding workflow.
///
/// When `GITHUB_OUTPUT` names a file, the value is appended in the Actions
/// multiline heredoc format. Outside of a workflow the value is printed to
/// stdout instead.
pub async fn set_output(name: &str, value: &str) -> Result<()> {
    match env::var(GITHUB_OUTPUT_VAR) {
        Ok(path) if !path.is_empty() => {
            append_output(&path, name, value).await
        }
        _ => {
            println!("{value}");
            Ok(())
        }
    }
}

async fn append_output(path: &str, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;

    file.write_all(heredoc(name, value).as_bytes()).await?;

    debug!("wrote {name} output to {path}");

    Ok(())
}

/// Format a multiline output block, picking a delimiter that never occurs in
/// the value.
fn heredoc(name: &str, value: &str) -> String {
    let mut delimiter = "EOF".to_string();

    while value.contains(&delimiter) {
        delimiter.push('_');
    }

    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}
