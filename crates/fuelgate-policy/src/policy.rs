//! Access policies: "who may see resource X".
//!
//! A policy combines two independent checks:
//!
//! 1. An **organization rule** — which organization categories may see
//!    the resource (a closed inclusion set, or "any").
//! 2. A **permission rule** — which permission codes the user must hold
//!    (none, any-of a set, or all-of a set).
//!
//! Both must pass. Policies are plain data, built once at startup and
//! never mutated; evaluation is a pure function.

use fuelgate_identity::OrganizationType;
use serde::{Deserialize, Serialize};

use crate::PermissionSet;

// ---------------------------------------------------------------------------
// OrgRule
// ---------------------------------------------------------------------------

/// Which organization categories a policy admits.
///
/// Because [`OrganizationType`] is a closed enum, an `OneOf` list can
/// only ever name the three known categories — there is no way to
/// misspell a category string into a rule that silently never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrgRule {
    /// Every category is admitted.
    Any,

    /// Only the listed categories are admitted.
    OneOf(Vec<OrganizationType>),
}

impl OrgRule {
    /// Evaluates the rule against the session's current organization
    /// category (which is `None` before any organization is known).
    ///
    /// An unknown category passes `Any` but fails every `OneOf` rule —
    /// a category-restricted resource stays hidden until we know the
    /// category, from either the cached tag or reconciliation.
    pub fn admits(&self, org_type: Option<OrganizationType>) -> bool {
        match self {
            Self::Any => true,
            Self::OneOf(allowed) => {
                org_type.is_some_and(|t| allowed.contains(&t))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// PermissionRule
// ---------------------------------------------------------------------------

/// Which permission codes a policy demands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionRule {
    /// No permission requirement.
    None,

    /// The user must hold at least one of the listed codes.
    AnyOf(Vec<String>),

    /// The user must hold every listed code.
    AllOf(Vec<String>),
}

impl PermissionRule {
    /// Evaluates the rule against the session's permission set.
    ///
    /// The empty-list semantics come straight from [`PermissionSet`]:
    /// `AnyOf([])` is unsatisfiable, `AllOf([])` is trivially satisfied.
    pub fn admits(&self, permissions: &PermissionSet) -> bool {
        match self {
            Self::None => true,
            Self::AnyOf(codes) => permissions.has_any(codes),
            Self::AllOf(codes) => permissions.has_all(codes),
        }
    }
}

// ---------------------------------------------------------------------------
// AccessPolicy
// ---------------------------------------------------------------------------

/// The rule for one resource: organization rule AND permission rule.
///
/// Built with the fluent constructors:
///
/// ```rust
/// use fuelgate_policy::AccessPolicy;
/// use fuelgate_identity::OrganizationType;
///
/// // Authority-only, no permission requirement:
/// let audit = AccessPolicy::orgs([OrganizationType::Authority]);
///
/// // Service providers holding the submit permission:
/// let submit = AccessPolicy::orgs([OrganizationType::ServiceProvider])
///     .any_of(["quotations:submit"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    /// Which organization categories may see the resource.
    pub orgs: OrgRule,

    /// Which permission codes the user must hold.
    pub permissions: PermissionRule,
}

impl AccessPolicy {
    /// A policy open to every organization category, with no permission
    /// requirement. Combine with `any_of`/`all_of` to add one.
    pub fn any_org() -> Self {
        Self {
            orgs: OrgRule::Any,
            permissions: PermissionRule::None,
        }
    }

    /// A policy restricted to the given organization categories.
    pub fn orgs(allowed: impl IntoIterator<Item = OrganizationType>) -> Self {
        Self {
            orgs: OrgRule::OneOf(allowed.into_iter().collect()),
            permissions: PermissionRule::None,
        }
    }

    /// Requires at least one of the given permission codes.
    pub fn any_of<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions =
            PermissionRule::AnyOf(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Requires every one of the given permission codes.
    pub fn all_of<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions =
            PermissionRule::AllOf(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Evaluates the policy: both the organization rule and the
    /// permission rule must admit the current session.
    pub fn allows(
        &self,
        org_type: Option<OrganizationType>,
        permissions: &PermissionSet,
    ) -> bool {
        self.orgs.admits(org_type) && self.permissions.admits(permissions)
    }
}

// =========================================================================
// Tests
// =========================================================================
