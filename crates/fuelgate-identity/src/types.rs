//! Core identity types: who the current user is and which organization
//! they act for.
//!
//! These are the structures the identity service hands back after a
//! successful login or a "who am I" lookup. They are deliberately small:
//! the rest of the platform (session store, policy resolver, navigation
//! filter) only ever reads them.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a user account.
///
/// This is a "newtype wrapper" — wrapping the raw `i64` in a named struct
/// means you can't accidentally pass an `OrganizationId` where a `UserId`
/// is expected, even though both are `i64` underneath.
///
/// `#[serde(transparent)]` tells serde to serialize this as the bare
/// number, so `UserId(42)` becomes just `42` in JSON — matching what
/// the identity service sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U-{}", self.0)
    }
}

/// A unique identifier for an organization.
///
/// Same newtype pattern as [`UserId`]. An organization is the tenant the
/// user acts for: a fuel station chain, a fuel service provider, or the
/// supervising authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(pub i64);

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// OrganizationType
// ---------------------------------------------------------------------------

/// The category of an organization.
///
/// This is a closed set — access policies match on it exhaustively, so a
/// new category is a compile-time event, not a silently unmatched string.
///
/// `#[serde(rename_all = "SCREAMING_SNAKE_CASE")]` makes the wire tags
/// `"FUEL_STATION"`, `"SERVICE_PROVIDER"`, `"AUTHORITY"` — the exact
/// strings the identity service uses, and the exact strings persisted as
/// the cached organization-category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrganizationType {
    /// An operator of one or more fuel stations (the buying side).
    FuelStation,

    /// A company supplying fuel and related services (the selling side).
    ServiceProvider,

    /// The supervising authority: approves organizations, audits activity.
    Authority,
}

impl OrganizationType {
    /// The wire/persistence tag for this category.
    ///
    /// This is the string written to the persistent key-value store and
    /// must stay in sync with the serde representation above.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::FuelStation => "FUEL_STATION",
            Self::ServiceProvider => "SERVICE_PROVIDER",
            Self::Authority => "AUTHORITY",
        }
    }

    /// Parses a persisted tag back into a category.
    ///
    /// Returns `None` for anything that isn't one of the three valid
    /// tags — a garbled cached tag is ignored, never an error.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "FUEL_STATION" => Some(Self::FuelStation),
            "SERVICE_PROVIDER" => Some(Self::ServiceProvider),
            "AUTHORITY" => Some(Self::Authority),
            _ => None,
        }
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ---------------------------------------------------------------------------
// OrganizationStatus
// ---------------------------------------------------------------------------

/// The approval state of an organization.
///
/// New organizations start `Pending` until the authority reviews them.
/// Only the registration/review flows care about `Rejected`; the session
/// core just carries the value through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrganizationStatus {
    Pending,
    Approved,
    Rejected,
}

// ---------------------------------------------------------------------------
// User / Organization / Role
// ---------------------------------------------------------------------------

/// The authenticated user, as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's unique ID.
    pub id: UserId,

    /// Login email.
    pub email: String,

    /// Display name ("Amina Haddad"), used only for presentation.
    #[serde(rename = "fullName")]
    pub full_name: String,

    /// The organization this user belongs to.
    #[serde(rename = "organizationId")]
    pub organization_id: OrganizationId,
}

/// The organization the current user acts for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// The organization's unique ID. `0` marks a placeholder (see below).
    pub id: OrganizationId,

    /// Display name. Empty for a placeholder.
    pub name: String,

    /// The category, which access policies match on.
    #[serde(rename = "type")]
    pub org_type: OrganizationType,

    /// Approval state.
    pub status: OrganizationStatus,
}

impl Organization {
    /// Builds a placeholder organization from a cached category tag.
    ///
    /// On cold start, before the identity service has answered, the only
    /// thing we know about the organization is its cached category. A
    /// placeholder (`id = 0`, empty name, status `Approved`) carries that
    /// category so access policies can be evaluated immediately instead
    /// of blocking on the network. Reconciliation later replaces it with
    /// the real record.
    pub fn placeholder(org_type: OrganizationType) -> Self {
        Self {
            id: OrganizationId(0),
            name: String::new(),
            org_type,
            status: OrganizationStatus::Approved,
        }
    }

    /// Returns `true` if this is a placeholder synthesized from a cached
    /// tag rather than a record from the identity service.
    pub fn is_placeholder(&self) -> bool {
        self.id == OrganizationId(0)
    }
}

/// A role granted to the user.
///
/// Roles are opaque to the session core: authorization decisions are
/// made on permission codes, not role names. They are carried through
/// so the UI can display them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

// ---------------------------------------------------------------------------
// IdentitySnapshot / AuthPayload
// ---------------------------------------------------------------------------

/// A validated, complete picture of the current identity.
///
/// This is the output of a successful reconciliation against the
/// identity service: all fields are present (roles/permissions may be
/// empty, never missing). The session store merges one of these into
/// the live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySnapshot {
    pub user: User,
    pub organization: Organization,
    pub roles: Vec<Role>,
    pub permissions: Vec<String>,
}

/// The result of a successful login, handed to the session store.
///
/// The login form itself lives outside this core; it calls the identity
/// service, gets this payload back, and passes it to `login()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPayload {
    pub user: User,
    pub organization: Organization,
    pub roles: Vec<Role>,
    pub permissions: Vec<String>,
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Token lifetime in seconds. Informational only — refresh handling
    /// belongs to the identity-service client, not this core.
    pub expires_in: Option<u64>,
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Tests for identity types and their JSON representation.
    //!
    //! The identity service defines the exact JSON shapes; these tests
    //! pin our serde attributes to that contract, because a mismatch
    //! means reconciliation silently fails on every cold start.

    use super::*;

    // =====================================================================
    // Identity newtypes
    // =====================================================================

    #[test]
    fn test_user_id_serializes_as_plain_number() {
        // `#[serde(transparent)]` means UserId(42) → `42`, not `{"0":42}`.
        let json = serde_json::to_string(&UserId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId(7).to_string(), "U-7");
    }

    #[test]
    fn test_organization_id_display() {
        assert_eq!(OrganizationId(3).to_string(), "O-3");
    }

    // =====================================================================
    // OrganizationType
    // =====================================================================

    #[test]
    fn test_organization_type_serializes_as_screaming_snake() {
        let json =
            serde_json::to_string(&OrganizationType::FuelStation).unwrap();
        assert_eq!(json, "\"FUEL_STATION\"");

        let json =
            serde_json::to_string(&OrganizationType::ServiceProvider)
                .unwrap();
        assert_eq!(json, "\"SERVICE_PROVIDER\"");
    }

    #[test]
    fn test_organization_type_tag_round_trip() {
        // The persisted tag must parse back to the same variant for all
        // three categories.
        for org_type in [
            OrganizationType::FuelStation,
            OrganizationType::ServiceProvider,
            OrganizationType::Authority,
        ] {
            assert_eq!(
                OrganizationType::from_tag(org_type.as_tag()),
                Some(org_type)
            );
        }
    }

    #[test]
    fn test_organization_type_from_garbled_tag_returns_none() {
        // A corrupted cached tag must be ignored, not panic or guess.
        assert_eq!(OrganizationType::from_tag(""), None);
        assert_eq!(OrganizationType::from_tag("fuel_station"), None);
        assert_eq!(OrganizationType::from_tag("ADMIN"), None);
    }

    // =====================================================================
    // User / Organization wire shape
    // =====================================================================

    #[test]
    fn test_user_deserializes_from_service_shape() {
        // The service uses camelCase field names; `#[serde(rename)]`
        // maps them onto our snake_case fields.
        let json = r#"{
            "id": 12,
            "email": "amina@example.com",
            "fullName": "Amina Haddad",
            "organizationId": 4
        }"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, UserId(12));
        assert_eq!(user.full_name, "Amina Haddad");
        assert_eq!(user.organization_id, OrganizationId(4));
    }

    #[test]
    fn test_organization_deserializes_from_service_shape() {
        // "type" is a Rust keyword, hence the `org_type` field rename.
        let json = r#"{
            "id": 4,
            "name": "Coastal Fuels",
            "type": "SERVICE_PROVIDER",
            "status": "APPROVED"
        }"#;
        let org: Organization = serde_json::from_str(json).unwrap();

        assert_eq!(org.org_type, OrganizationType::ServiceProvider);
        assert_eq!(org.status, OrganizationStatus::Approved);
        assert!(!org.is_placeholder());
    }

    #[test]
    fn test_placeholder_has_zero_id_and_approved_status() {
        let org = Organization::placeholder(OrganizationType::Authority);

        assert_eq!(org.id, OrganizationId(0));
        assert!(org.name.is_empty());
        assert_eq!(org.org_type, OrganizationType::Authority);
        // A placeholder is assumed approved so route guards don't block
        // a legitimate user while reconciliation is still in flight.
        assert_eq!(org.status, OrganizationStatus::Approved);
        assert!(org.is_placeholder());
    }
}
