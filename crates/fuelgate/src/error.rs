//! Unified error type for the Fuelgate core.

use fuelgate_identity::IdentityError;
use fuelgate_session::SessionError;

/// Top-level error that wraps the crate-specific errors.
///
/// When using the `fuelgate` meta-crate — say, inside a custom
/// [`IdentityProvider`](fuelgate_session::IdentityProvider) that both
/// talks HTTP and validates payloads — you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attributes auto-generate `From` impls, so the `?` operator converts
/// sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum FuelgateError {
    /// A session-level error (provider unreachable, identity rejected).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// An identity-payload validation error.
    #[error(transparent)]
    Identity(#[from] IdentityError),
}
