//! The permission evaluator: pure set queries over permission codes.
//!
//! A permission code is an opaque string like `"quotations:submit"`.
//! The identity service grants a flat set of them per user — no
//! wildcards, no inheritance. Everything here is a plain set operation,
//! which is exactly why it lives in its own type: the asymmetric
//! empty-query rules below are easy to get wrong inline.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The set of permission codes granted to the current user.
///
/// Backed by a `HashSet`, so duplicates collapse and lookup is O(1).
/// Order is irrelevant — two sets with the same codes are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashSet<String>);

impl PermissionSet {
    /// Creates an empty permission set (the logged-out state).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the set grants `code`.
    pub fn has(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    /// Returns `true` if the set grants at least one of `codes`.
    ///
    /// An empty query returns `false`: a vacuous "any of nothing" never
    /// grants access. Note the deliberate asymmetry with [`has_all`]
    /// (`Self::has_all`) — a policy that requires *any* of an empty
    /// list is requiring something unsatisfiable, while a policy that
    /// requires *all* of an empty list is requiring nothing.
    pub fn has_any<I, S>(&self, codes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes.into_iter().any(|code| self.has(code.as_ref()))
    }

    /// Returns `true` if the set grants every one of `codes`.
    ///
    /// An empty query returns `true`: a requirement of nothing is
    /// trivially satisfied.
    pub fn has_all<I, S>(&self, codes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes.into_iter().all(|code| self.has(code.as_ref()))
    }

    /// Number of distinct codes in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no codes are granted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for `PermissionSet`.
    //!
    //! The empty-query asymmetry (`has_any([]) == false`,
    //! `has_all([]) == true`) is a contract the policy resolver depends
    //! on — it is tested explicitly against every set shape.

    use super::*;

    fn granted(codes: &[&str]) -> PermissionSet {
        codes.iter().copied().collect()
    }

    // =====================================================================
    // has()
    // =====================================================================

    #[test]
    fn test_has_granted_code_returns_true() {
        let perms = granted(&["branches:read", "branches:write"]);

        assert!(perms.has("branches:read"));
        assert!(perms.has("branches:write"));
    }

    #[test]
    fn test_has_missing_code_returns_false() {
        let perms = granted(&["branches:read"]);

        assert!(!perms.has("branches:write"));
        assert!(!perms.has(""));
    }

    #[test]
    fn test_has_on_empty_set_returns_false() {
        assert!(!PermissionSet::new().has("anything"));
    }

    // =====================================================================
    // has_any()
    // =====================================================================

    #[test]
    fn test_has_any_one_match_returns_true() {
        let perms = granted(&["branches:read"]);

        assert!(perms.has_any(["users:read", "branches:read"]));
    }

    #[test]
    fn test_has_any_no_match_returns_false() {
        let perms = granted(&["branches:read"]);

        assert!(!perms.has_any(["users:read", "roles:read"]));
    }

    #[test]
    fn test_has_any_empty_query_returns_false() {
        // A vacuous any-of query never grants access — even for a user
        // who holds permissions.
        let perms = granted(&["branches:read"]);

        assert!(!perms.has_any(std::iter::empty::<&str>()));
        assert!(!PermissionSet::new().has_any(std::iter::empty::<&str>()));
    }

    // =====================================================================
    // has_all()
    // =====================================================================

    #[test]
    fn test_has_all_subset_returns_true() {
        let perms =
            granted(&["branches:read", "branches:write", "users:read"]);

        assert!(perms.has_all(["branches:read", "users:read"]));
    }

    #[test]
    fn test_has_all_partial_subset_returns_false() {
        let perms = granted(&["branches:read"]);

        assert!(!perms.has_all(["branches:read", "branches:write"]));
    }

    #[test]
    fn test_has_all_empty_query_returns_true() {
        // Requiring nothing is trivially satisfied — even by the empty
        // set. This is the intentional asymmetry with has_any.
        let perms = granted(&["branches:read"]);

        assert!(perms.has_all(std::iter::empty::<&str>()));
        assert!(PermissionSet::new().has_all(std::iter::empty::<&str>()));
    }

    // =====================================================================
    // Construction
    // =====================================================================

    #[test]
    fn test_from_iterator_collapses_duplicates() {
        let perms = granted(&["a", "b", "a", "a"]);

        assert_eq!(perms.len(), 2);
    }

    #[test]
    fn test_order_is_irrelevant_for_equality() {
        let forward = granted(&["a", "b", "c"]);
        let backward = granted(&["c", "b", "a"]);

        assert_eq!(forward, backward);
    }
}
