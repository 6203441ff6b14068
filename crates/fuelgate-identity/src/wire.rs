//! Wire shapes for the identity service's "who am I" endpoint.
//!
//! The raw response is lenient: the service may omit roles or
//! permissions, and an errored response carries no data at all. This
//! module models that leniency with `Option` and `#[serde(default)]`,
//! then funnels everything through [`MeResponse::into_snapshot`] so the
//! rest of the platform only ever sees a fully validated
//! [`IdentitySnapshot`].

use serde::{Deserialize, Serialize};

use crate::{IdentityError, IdentitySnapshot, Organization, Role, User};

/// The response envelope of `GET /me`.
///
/// ```text
/// { "success": true, "data": { "user": ..., "organization": ..., ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    /// Whether the service considers the request authenticated.
    pub success: bool,

    /// The identity payload. Absent when `success` is false, and
    /// occasionally absent even on "success" from older service builds —
    /// both cases are treated as a rejected payload.
    #[serde(default)]
    pub data: Option<MeData>,
}

/// The payload inside a successful `GET /me` response.
///
/// `user` and `organization` are modeled as `Option` because the
/// service has been observed to drop them on partially-provisioned
/// accounts; a payload without them is unusable and converts to an
/// error. Roles and permissions, by contrast, are legitimately empty
/// for fresh accounts, so an omitted list defaults to `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeData {
    pub user: Option<User>,
    pub organization: Option<Organization>,

    #[serde(default)]
    pub roles: Vec<Role>,

    #[serde(default)]
    pub permissions: Vec<String>,
}

impl MeResponse {
    /// Validates the response into an [`IdentitySnapshot`].
    ///
    /// # Errors
    /// - [`IdentityError::Rejected`] — `success` was false or `data`
    ///   was missing.
    /// - [`IdentityError::MissingField`] — `user` or `organization`
    ///   was absent from the payload.
    pub fn into_snapshot(self) -> Result<IdentitySnapshot, IdentityError> {
        if !self.success {
            return Err(IdentityError::Rejected);
        }
        let data = self.data.ok_or(IdentityError::Rejected)?;

        let user = data.user.ok_or(IdentityError::MissingField("user"))?;
        let organization = data
            .organization
            .ok_or(IdentityError::MissingField("organization"))?;

        Ok(IdentitySnapshot {
            user,
            organization,
            roles: data.roles,
            permissions: data.permissions,
        })
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Tests for the `/me` envelope, with emphasis on the lenient
    //! cases: omitted lists default, missing core fields reject.

    use super::*;
    use crate::{OrganizationStatus, OrganizationType};

    /// A complete, well-formed `/me` response as the service sends it.
    fn full_response_json() -> &'static str {
        r#"{
            "success": true,
            "data": {
                "user": {
                    "id": 12,
                    "email": "amina@example.com",
                    "fullName": "Amina Haddad",
                    "organizationId": 4
                },
                "organization": {
                    "id": 4,
                    "name": "Coastal Fuels",
                    "type": "SERVICE_PROVIDER",
                    "status": "APPROVED"
                },
                "roles": [{ "id": 1, "name": "Manager" }],
                "permissions": ["quotations:submit", "branches:read"]
            }
        }"#
    }

    #[test]
    fn test_into_snapshot_full_payload_succeeds() {
        let resp: MeResponse =
            serde_json::from_str(full_response_json()).unwrap();

        let snapshot = resp.into_snapshot().expect("payload is complete");

        assert_eq!(snapshot.user.email, "amina@example.com");
        assert_eq!(
            snapshot.organization.org_type,
            OrganizationType::ServiceProvider
        );
        assert_eq!(
            snapshot.organization.status,
            OrganizationStatus::Approved
        );
        assert_eq!(snapshot.roles.len(), 1);
        assert_eq!(
            snapshot.permissions,
            vec!["quotations:submit", "branches:read"]
        );
    }

    #[test]
    fn test_into_snapshot_omitted_lists_default_to_empty() {
        // A fresh account can legitimately have no roles or permissions,
        // and older service builds omit the fields entirely.
        let json = r#"{
            "success": true,
            "data": {
                "user": {
                    "id": 1,
                    "email": "new@example.com",
                    "fullName": "New User",
                    "organizationId": 9
                },
                "organization": {
                    "id": 9,
                    "name": "Fresh Org",
                    "type": "FUEL_STATION",
                    "status": "PENDING"
                }
            }
        }"#;
        let resp: MeResponse = serde_json::from_str(json).unwrap();

        let snapshot = resp.into_snapshot().unwrap();

        assert!(snapshot.roles.is_empty());
        assert!(snapshot.permissions.is_empty());
    }

    #[test]
    fn test_into_snapshot_success_false_is_rejected() {
        let json = r#"{ "success": false }"#;
        let resp: MeResponse = serde_json::from_str(json).unwrap();

        let result = resp.into_snapshot();

        assert!(matches!(result, Err(IdentityError::Rejected)));
    }

    #[test]
    fn test_into_snapshot_success_without_data_is_rejected() {
        // "success": true with no data is a malformed response; treated
        // the same as a rejection so reconciliation stays a soft failure.
        let json = r#"{ "success": true }"#;
        let resp: MeResponse = serde_json::from_str(json).unwrap();

        assert!(matches!(
            resp.into_snapshot(),
            Err(IdentityError::Rejected)
        ));
    }

    #[test]
    fn test_into_snapshot_missing_user_names_the_field() {
        let json = r#"{
            "success": true,
            "data": {
                "organization": {
                    "id": 4,
                    "name": "Coastal Fuels",
                    "type": "AUTHORITY",
                    "status": "APPROVED"
                }
            }
        }"#;
        let resp: MeResponse = serde_json::from_str(json).unwrap();

        assert!(matches!(
            resp.into_snapshot(),
            Err(IdentityError::MissingField("user"))
        ));
    }

    #[test]
    fn test_into_snapshot_missing_organization_names_the_field() {
        let json = r#"{
            "success": true,
            "data": {
                "user": {
                    "id": 12,
                    "email": "amina@example.com",
                    "fullName": "Amina Haddad",
                    "organizationId": 4
                }
            }
        }"#;
        let resp: MeResponse = serde_json::from_str(json).unwrap();

        assert!(matches!(
            resp.into_snapshot(),
            Err(IdentityError::MissingField("organization"))
        ));
    }

    #[test]
    fn test_decode_garbage_returns_error() {
        let result: Result<MeResponse, _> =
            serde_json::from_slice(b"not json at all");
        assert!(result.is_err());
    }
}
