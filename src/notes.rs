//! Release note body composition and skip-pattern evaluation.
use log::*;
use regex::Regex;

/// Check whether the current notes already match the skip pattern.
///
/// The pattern is compiled as a regular expression when possible; a pattern
/// that fails to compile degrades to a literal substring check. Any pattern
/// that happens to be valid regex syntax is treated as regex, so a plain
/// word made of metacharacters (e.g. ".") matches any non-empty body.
pub fn should_skip(content: &str, pattern: &str) -> bool {
    if pattern.is_empty() || content.is_empty() {
        return false;
    }

    match Regex::new(pattern) {
        Ok(re) => re.is_match(content),
        Err(_) => {
            debug!(
                "skip pattern is not valid regex: falling back to substring match"
            );
            content.contains(pattern)
        }
    }
}

/// Build the new release body from the current body plus prepend/append
/// fragments, joined with blank lines. Empty fragments are no-ops; when both
/// are empty the current body is returned unchanged.
pub fn compose_body(current: &str, prepend: &str, append: &str) -> String {
    let mut body = current.to_string();

    if !prepend.is_empty() {
        info!("prepending content to release notes");
        body = if current.is_empty() {
            prepend.to_string()
        } else {
            format!("{prepend}\n\n{current}")
        };
    }

    if !append.is_empty() {
        info!("appending content to release notes");
        body = if body.is_empty() {
            append.to_string()
        } else {
            format!("{body}\n\n{append}")
        };
    }

    body
}
