//! Unified interface for the remote git forge hosting the release.
//!
//! Provides token-based authentication, release lookups, and release note
//! updates behind a common trait so the command layer never talks to the
//! GitHub client directly.

/// Configuration and authentication for the forge connection.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Manager that wraps forge implementations with dry-run gating.
pub mod manager;

/// Common trait for forge platform abstraction.
pub mod traits;

/// Shared data types for release lookups and updates.
pub mod types;
