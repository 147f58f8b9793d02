//! The `error` module defines custom error types used within the `passivecheck` library.
//!
//! This module centralizes error handling, providing a consistent way to
//! represent and propagate errors throughout the system.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayloadError>;

/// Errors a payload operation can produce.
///
/// `InvalidArgument` means the caller supplied bad input and must correct it;
/// `HostResolution` means the local name service failed and the caller may
/// retry or fall back to setting the hostname explicitly.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("{0} cannot be an empty string")]
    InvalidArgument(&'static str),
    #[error("failed to resolve local hostname: {0}")]
    HostResolution(#[from] io::Error),
}
