//! Command execution and orchestration.
//!
//! The single `update-notes` flow follows a consistent pattern:
//! 1. Parse and validate CLI arguments
//! 2. Initialize the forge client
//! 3. Resolve the target release and compute the new body
//! 4. Issue the update and publish the result for the surrounding workflow
//!
//! All commands use the unified error handling provided by the `error`
//! module; failures propagate to the top level and fail the run.

/// Release notes update flow.
pub mod update_notes;
