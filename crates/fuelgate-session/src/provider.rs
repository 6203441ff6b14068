//! The identity-provider hook: how reconciliation reaches the service.
//!
//! This core performs no network I/O itself. The host application
//! implements [`IdentityProvider`] over its real HTTP client (calling
//! the service's "who am I" endpoint and validating the payload via
//! [`MeResponse::into_snapshot`](fuelgate_identity::MeResponse::into_snapshot)),
//! while tests and demos implement it over canned data.
//!
//! Retry policy, timeouts, token refresh — all of that belongs to the
//! implementation behind this trait. The session core calls it exactly
//! once per initialization.

use fuelgate_identity::IdentitySnapshot;

use crate::SessionError;

/// Fetches the authoritative identity for an access token.
///
/// # Trait bounds
///
/// - `Send + Sync` → the provider is called from the background
///   reconciliation task.
/// - `'static` → it doesn't borrow temporary data; it lives as long as
///   the auth context that owns it.
///
/// # Example
///
/// ```rust
/// use fuelgate_session::{IdentityProvider, SessionError};
/// use fuelgate_identity::IdentitySnapshot;
///
/// /// Serves one fixed identity to any token. Test/demo use only.
/// struct FixedProvider(IdentitySnapshot);
///
/// impl IdentityProvider for FixedProvider {
///     async fn fetch_identity(
///         &self,
///         _access_token: &str,
///     ) -> Result<IdentitySnapshot, SessionError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait IdentityProvider: Send + Sync + 'static {
    /// Resolves `access_token` into a validated identity snapshot.
    ///
    /// # Returns
    /// - `Ok(snapshot)` — the authoritative identity for that token
    /// - `Err(...)` — unreachable service, rejected token, or a
    ///   malformed payload; the caller treats every error as the same
    ///   soft failure
    fn fetch_identity(
        &self,
        access_token: &str,
    ) -> impl std::future::Future<Output = Result<IdentitySnapshot, SessionError>>
    + Send;
}
