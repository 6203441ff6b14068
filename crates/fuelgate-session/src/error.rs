//! Error types for the session layer.

use fuelgate_identity::IdentityError;

/// Errors an [`IdentityProvider`](crate::IdentityProvider) can report.
///
/// Callers of the reconciliation driver never see these — every one of
/// them is a *soft* failure that leaves the degraded session in place
/// and gets logged, never propagated. They exist so provider
/// implementations have a precise vocabulary.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The identity service could not be reached, timed out, or
    /// answered with a transport-level failure.
    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The service answered, but the payload was rejected during
    /// validation (stale token, missing user/organization).
    #[error(transparent)]
    RejectedIdentity(#[from] IdentityError),
}
