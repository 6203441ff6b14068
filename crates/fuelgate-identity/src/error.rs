//! Error types for identity payload validation.

/// Errors that can occur while turning a raw identity-service response
/// into a usable [`IdentitySnapshot`](crate::IdentitySnapshot).
///
/// Both variants are "soft" from the session core's point of view: a
/// failed reconciliation leaves the degraded session in place, it never
/// logs the user out.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The service answered but reported `success: false`.
    /// Usually a stale or revoked access token.
    #[error("identity service rejected the request")]
    Rejected,

    /// The response was missing a field we can't default.
    /// Roles and permissions default to empty when omitted, but a
    /// missing user or organization makes the payload unusable.
    #[error("identity payload missing required field `{0}`")]
    MissingField(&'static str),
}
