//! Shared data types for release lookups and updates.

/// A release record on the forge, reduced to what note updates need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Numeric identifier the forge assigned to the release.
    pub id: u64,
    /// Current release notes body. Empty when the release carries none.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReleaseRequest {
    pub release_id: u64,
    pub body: String,
}
