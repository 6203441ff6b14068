//! The access-policy table: normalized resource keys → policies.
//!
//! The table is built once at startup and never mutated. Every route
//! guard and every navigation render resolves against it, so lookup is
//! a single `HashMap` probe after key normalization.

use std::collections::HashMap;

use fuelgate_identity::OrganizationType;

use crate::{AccessPolicy, PermissionSet};

// ---------------------------------------------------------------------------
// Key normalization
// ---------------------------------------------------------------------------

/// Normalizes a navigable path into the canonical policy-table key.
///
/// Two steps:
///
/// 1. Strip a trailing slash: `"/branches/"` → `"/branches"`.
/// 2. Truncate at the first *dynamic* segment — a segment that is
///    entirely ASCII digits, the shape of a route parameter — keeping
///    only the static prefix: `"/branches/42"` → `"/branches"`,
///    `"/quotations/7/items/3"` → `"/quotations"`.
///
/// Named child routes are static and keep their own keys:
/// `"/quotations/submit"` stays `"/quotations/submit"`. The root path
/// `"/"` is left as-is.
pub fn normalize_key(path: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if segment.bytes().all(|b| b.is_ascii_digit()) {
            break;
        }
        kept.push(segment);
    }

    if kept.is_empty() {
        return "/".to_string();
    }
    format!("/{}", kept.join("/"))
}

// ---------------------------------------------------------------------------
// UnmappedAccess
// ---------------------------------------------------------------------------

/// What `resolve` returns for a path with no table entry.
///
/// The platform's observed behavior is fail-open: an unmapped resource
/// is visible to everyone. That default is preserved here, but as a
/// table-level knob rather than a hard-coded constant, so a deployment
/// that wants a default-deny posture can opt into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmappedAccess {
    /// Unmapped paths are visible (the faithful default).
    #[default]
    Allow,

    /// Unmapped paths are hidden.
    Deny,
}

// ---------------------------------------------------------------------------
// PolicyTable
// ---------------------------------------------------------------------------

/// The static mapping from normalized resource keys to access policies.
///
/// Immutable after construction; safe to share across any number of
/// concurrent readers.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    entries: HashMap<String, AccessPolicy>,
    unmapped: UnmappedAccess,
}

impl PolicyTable {
    /// Starts building a table. Entries are added with
    /// [`PolicyTableBuilder::entry`].
    pub fn builder() -> PolicyTableBuilder {
        PolicyTableBuilder {
            entries: HashMap::new(),
            unmapped: UnmappedAccess::default(),
        }
    }

    /// Looks up the policy for a (raw, un-normalized) path.
    pub fn policy_for(&self, path: &str) -> Option<&AccessPolicy> {
        self.entries.get(&normalize_key(path))
    }

    /// Resolves whether the current session may see `path`.
    ///
    /// 1. Normalize the path and look it up.
    /// 2. No entry → the [`UnmappedAccess`] knob decides (fail-open by
    ///    default).
    /// 3. Entry found → [`AccessPolicy::allows`] over the organization
    ///    category and permission set.
    pub fn resolve(
        &self,
        path: &str,
        org_type: Option<OrganizationType>,
        permissions: &PermissionSet,
    ) -> bool {
        match self.policy_for(path) {
            Some(policy) => policy.allows(org_type, permissions),
            None => {
                tracing::trace!(%path, "no policy entry, using unmapped rule");
                self.unmapped == UnmappedAccess::Allow
            }
        }
    }

    /// Number of policy entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`PolicyTable`].
///
/// Keys are normalized on insert, so `entry("/branches/", ...)` and a
/// later lookup of `"/branches/42"` meet at the same key.
pub struct PolicyTableBuilder {
    entries: HashMap<String, AccessPolicy>,
    unmapped: UnmappedAccess,
}

impl PolicyTableBuilder {
    /// Adds (or replaces) the policy for a resource key.
    pub fn entry(mut self, key: &str, policy: AccessPolicy) -> Self {
        self.entries.insert(normalize_key(key), policy);
        self
    }

    /// Sets the behavior for paths with no entry.
    pub fn unmapped(mut self, unmapped: UnmappedAccess) -> Self {
        self.unmapped = unmapped;
        self
    }

    /// Finishes the table.
    pub fn build(self) -> PolicyTable {
        PolicyTable {
            entries: self.entries,
            unmapped: self.unmapped,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use OrganizationType::{Authority, FuelStation, ServiceProvider};

    fn perms(codes: &[&str]) -> PermissionSet {
        codes.iter().copied().collect()
    }

    // =====================================================================
    // normalize_key()
    // =====================================================================

    #[test]
    fn test_normalize_key_plain_path_unchanged() {
        assert_eq!(normalize_key("/branches"), "/branches");
        assert_eq!(normalize_key("/quotations/submit"), "/quotations/submit");
    }

    #[test]
    fn test_normalize_key_strips_trailing_slash() {
        assert_eq!(normalize_key("/branches/"), "/branches");
    }

    #[test]
    fn test_normalize_key_strips_dynamic_suffix() {
        // A numeric tail segment is a route parameter; "/branches/42"
        // and "/branches" must resolve to the same policy.
        assert_eq!(normalize_key("/branches/42"), "/branches");
        assert_eq!(normalize_key("/branches/42/"), "/branches");
    }

    #[test]
    fn test_normalize_key_strips_nested_dynamic_segments() {
        assert_eq!(normalize_key("/quotations/7/items/3"), "/quotations");
    }

    #[test]
    fn test_normalize_key_keeps_static_child_routes() {
        // "submit" is not numeric — it's a static child route with its
        // own policy entry.
        assert_eq!(
            normalize_key("/quotations/submit"),
            "/quotations/submit"
        );
    }

    #[test]
    fn test_normalize_key_root_stays_root() {
        assert_eq!(normalize_key("/"), "/");
    }

    #[test]
    fn test_normalize_key_fully_dynamic_path_reduces_to_root() {
        // No static prefix to keep; the key bottoms out at root.
        assert_eq!(normalize_key("/42"), "/");
    }

    // =====================================================================
    // resolve()
    // =====================================================================

    fn sample_table() -> PolicyTable {
        PolicyTable::builder()
            .entry("/audit-log", AccessPolicy::orgs([Authority]))
            .entry(
                "/quotations/submit",
                AccessPolicy::orgs([ServiceProvider])
                    .any_of(["quotations:submit"]),
            )
            .entry(
                "/branches",
                AccessPolicy::orgs([FuelStation]).any_of(["branches:read"]),
            )
            .build()
    }

    #[test]
    fn test_resolve_unmapped_key_defaults_to_visible() {
        // The faithful fail-open default: no entry means visible, for
        // any organization category and any permission set.
        let table = sample_table();

        assert!(table.resolve("/totally-unmapped", None, &perms(&[])));
        assert!(table.resolve(
            "/totally-unmapped",
            Some(FuelStation),
            &perms(&["anything"])
        ));
    }

    #[test]
    fn test_resolve_unmapped_key_deny_knob_hides() {
        let table = PolicyTable::builder()
            .unmapped(UnmappedAccess::Deny)
            .build();

        assert!(!table.resolve("/anything", Some(Authority), &perms(&[])));
    }

    #[test]
    fn test_resolve_org_and_permission_must_both_pass() {
        let table = sample_table();
        let granted = perms(&["quotations:submit"]);

        assert!(table.resolve(
            "/quotations/submit",
            Some(ServiceProvider),
            &granted
        ));
        // Same permissions, wrong organization category.
        assert!(!table.resolve(
            "/quotations/submit",
            Some(FuelStation),
            &granted
        ));
    }

    #[test]
    fn test_resolve_dynamic_path_uses_parent_entry() {
        let table = sample_table();

        // "/branches/42" resolves against the "/branches" entry.
        assert!(table.resolve(
            "/branches/42",
            Some(FuelStation),
            &perms(&["branches:read"])
        ));
        assert!(!table.resolve(
            "/branches/42",
            Some(ServiceProvider),
            &perms(&["branches:read"])
        ));
    }

    #[test]
    fn test_resolve_org_restricted_entry_without_known_org() {
        // No organization known yet (no cached tag): category-restricted
        // resources are hidden until reconciliation or a tag arrives.
        let table = sample_table();

        assert!(!table.resolve("/audit-log", None, &perms(&[])));
    }

    #[test]
    fn test_builder_normalizes_keys_on_insert() {
        let table = PolicyTable::builder()
            .entry("/users/", AccessPolicy::orgs([Authority]))
            .build();

        assert!(table.policy_for("/users").is_some());
        assert!(table.policy_for("/users/15").is_some());
    }
}
