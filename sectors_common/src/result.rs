//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `SectorsError`, so functions can simply return
//! `Result<T>`.
use crate::error::SectorsError;

/// Workspace-wide `Result` alias with `SectorsError` as the default error.
pub type Result<T, E = SectorsError> = std::result::Result<T, E>;
