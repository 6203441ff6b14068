//! Session types: the identity record the whole application reads.
//!
//! A "session" is the process's record of who is signed in. It tracks:
//! - WHO the user is ([`User`], present only after full reconciliation)
//! - WHICH organization they act for (possibly a cached placeholder)
//! - WHAT they may do (roles and permission codes)
//! - WHETHER they're authenticated at all (the access token)
//! - WHETHER the authoritative picture is still loading

use fuelgate_identity::{Organization, Role, User};
use fuelgate_policy::PermissionSet;

// ---------------------------------------------------------------------------
// SessionPhase
// ---------------------------------------------------------------------------

/// Where the session is in its lifecycle.
///
/// This is a state machine with four states:
///
/// ```text
/// Uninitialized ──(no token)──→ LoggedOut
/// Uninitialized ──(token found)──→ Degraded ──(reconcile ok)──→ Full
///                                  Degraded ──(reconcile failed)──→ Degraded
/// any ──login()──→ Full            any ──logout()──→ LoggedOut
/// ```
///
/// - **Uninitialized**: process started, persisted state not read yet.
/// - **LoggedOut**: the single canonical empty state.
/// - **Degraded**: a token was found; identity is synthesized from the
///   cached organization-category tag alone. Good enough for route
///   guards, not authoritative. A failed reconciliation leaves the
///   session here for the rest of the run.
/// - **Full**: the authoritative identity from the service (or from a
///   fresh login).
///
/// There is no `Full → Degraded` transition within one process
/// lifetime: once we have the authoritative picture we never regress it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    LoggedOut,
    Degraded,
    Full,
}

impl SessionPhase {
    /// Returns `true` once initialization has settled one way or the
    /// other (any state except `Uninitialized`).
    pub fn is_initialized(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    /// Returns `true` if the session carries an identity at all
    /// (degraded or full).
    pub fn is_resumed(&self) -> bool {
        matches!(self, Self::Degraded | Self::Full)
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Uninitialized"),
            Self::LoggedOut => write!(f, "LoggedOut"),
            Self::Degraded => write!(f, "Degraded"),
            Self::Full => write!(f, "Full"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The identity record itself.
///
/// Owned exclusively by the
/// [`SessionStore`](crate::SessionStore) — everything else gets
/// read-only projections.
///
/// Invariant: when `access_token` is `None`, every other field is in
/// its empty state. Logged-out is one canonical state, never a
/// partially-cleared one.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The authenticated user. Present only after full reconciliation
    /// or an explicit login.
    pub user: Option<User>,

    /// The user's organization. May be a placeholder synthesized from
    /// the cached category tag while the session is degraded.
    pub organization: Option<Organization>,

    /// Granted roles, in service order. Opaque beyond existence.
    pub roles: Vec<Role>,

    /// Granted permission codes.
    pub permissions: PermissionSet,

    /// The opaque access token. `Some` ⇔ authenticated.
    pub access_token: Option<String>,

    /// `true` from process start until reconciliation settles
    /// (success, failure, or "no token present").
    pub is_loading: bool,
}

impl Session {
    /// The state at process start: empty, still loading.
    pub fn uninitialized() -> Self {
        Self {
            user: None,
            organization: None,
            roles: Vec::new(),
            permissions: PermissionSet::new(),
            access_token: None,
            is_loading: true,
        }
    }

    /// The canonical logged-out state: empty, settled.
    pub fn logged_out() -> Self {
        Self {
            is_loading: false,
            ..Self::uninitialized()
        }
    }

    /// The sole authentication predicate.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_is_empty_and_loading() {
        let session = Session::uninitialized();

        assert!(session.user.is_none());
        assert!(session.organization.is_none());
        assert!(session.roles.is_empty());
        assert!(session.permissions.is_empty());
        assert!(!session.is_authenticated());
        assert!(session.is_loading);
    }

    #[test]
    fn test_logged_out_differs_only_in_loading_flag() {
        let logged_out = Session::logged_out();

        assert!(!logged_out.is_loading);
        assert!(!logged_out.is_authenticated());
    }

    #[test]
    fn test_phase_predicates() {
        assert!(!SessionPhase::Uninitialized.is_initialized());
        assert!(SessionPhase::LoggedOut.is_initialized());

        assert!(!SessionPhase::LoggedOut.is_resumed());
        assert!(SessionPhase::Degraded.is_resumed());
        assert!(SessionPhase::Full.is_resumed());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(SessionPhase::Degraded.to_string(), "Degraded");
        assert_eq!(SessionPhase::Full.to_string(), "Full");
    }
}
