//! Station service error types.

use crate::domain::DomainError;
use crate::upstream::UpstreamError;

/// Errors that can occur while answering a station query.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Fetching or decoding the upstream feed failed
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The lookup or schedule conversion failed
    #[error(transparent)]
    Domain(#[from] DomainError),
}
