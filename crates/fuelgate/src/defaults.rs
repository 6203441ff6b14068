//! The platform's default policy table and navigation tree.
//!
//! One entry per navigable resource of the admin application. The
//! table is the single place where "who sees what" is declared;
//! deployments with different menus override it through
//! [`AuthContextBuilder`](crate::AuthContextBuilder).

use fuelgate_identity::OrganizationType::{
    Authority, FuelStation, ServiceProvider,
};
use fuelgate_nav::NavEntry;
use fuelgate_policy::{AccessPolicy, PolicyTable};

/// The default access-policy table.
///
/// Unmapped paths stay fail-open (the table default): resources that
/// never got an entry — the dashboard, the profile page — are visible
/// to every authenticated session.
pub fn policy_table() -> PolicyTable {
    PolicyTable::builder()
        // Station operations: the buying side manages its branches and
        // reviews incoming quotations.
        .entry(
            "/branches",
            AccessPolicy::orgs([FuelStation]).any_of(["branches:read"]),
        )
        .entry(
            "/quotations",
            AccessPolicy::orgs([FuelStation, ServiceProvider])
                .any_of(["quotations:read"]),
        )
        .entry(
            "/quotations/submit",
            AccessPolicy::orgs([ServiceProvider])
                .any_of(["quotations:submit"]),
        )
        .entry(
            "/quotations/review",
            AccessPolicy::orgs([FuelStation]).any_of(["quotations:review"]),
        )
        // Catalog: what the selling side offers.
        .entry(
            "/services",
            AccessPolicy::orgs([ServiceProvider]).any_of(["services:manage"]),
        )
        // Administration within one's own organization.
        .entry("/users", AccessPolicy::any_org().any_of(["users:read"]))
        .entry("/roles", AccessPolicy::any_org().any_of(["roles:read"]))
        // Authority-only oversight.
        .entry("/organizations", AccessPolicy::orgs([Authority]))
        .entry("/audit-log", AccessPolicy::orgs([Authority]))
        .entry(
            "/reports",
            AccessPolicy::orgs([Authority]).all_of(["reports:read"]),
        )
        .build()
}

/// The default navigation tree. Sibling order is presentation order.
pub fn navigation() -> Vec<NavEntry> {
    vec![
        NavEntry::leaf("Dashboard", "/dashboard"),
        NavEntry::group(
            "Operations",
            vec![
                NavEntry::leaf("Branches", "/branches"),
                NavEntry::leaf("Services", "/services"),
            ],
        ),
        NavEntry::group(
            "Procurement",
            vec![
                NavEntry::leaf("Quotations", "/quotations"),
                NavEntry::leaf("Submit Quotation", "/quotations/submit"),
                NavEntry::leaf("Review Quotations", "/quotations/review"),
            ],
        ),
        NavEntry::group(
            "Administration",
            vec![
                NavEntry::leaf("Users", "/users"),
                NavEntry::leaf("Roles", "/roles"),
            ],
        ),
        NavEntry::group(
            "Oversight",
            vec![
                NavEntry::leaf("Organizations", "/organizations"),
                NavEntry::leaf("Audit Log", "/audit-log"),
                NavEntry::leaf("Reports", "/reports"),
            ],
        ),
    ]
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fuelgate_policy::PermissionSet;

    fn perms(codes: &[&str]) -> PermissionSet {
        codes.iter().copied().collect()
    }

    #[test]
    fn test_every_navigation_path_is_either_mapped_or_open() {
        // Guard against typos: a nav path that misses the table only
        // because of a misspelling would silently fail open. Every leaf
        // path here must either have an entry or be a deliberately
        // unmapped always-visible page.
        let open_by_design = ["/dashboard"];
        let table = policy_table();

        fn walk<'a>(entries: &'a [NavEntry], out: &mut Vec<&'a str>) {
            for entry in entries {
                match entry {
                    NavEntry::Leaf { path: Some(p), .. } => out.push(p),
                    NavEntry::Leaf { path: None, .. } => {}
                    NavEntry::Group { children, .. } => walk(children, out),
                }
            }
        }
        let entries = navigation();
        let mut paths = Vec::new();
        walk(&entries, &mut paths);

        for path in paths {
            assert!(
                table.policy_for(path).is_some()
                    || open_by_design.contains(&path),
                "nav path {path} has no policy entry and isn't listed as \
                 open by design"
            );
        }
    }

    #[test]
    fn test_audit_log_is_authority_only() {
        let table = policy_table();

        assert!(table.resolve("/audit-log", Some(Authority), &perms(&[])));
        assert!(!table.resolve("/audit-log", Some(FuelStation), &perms(&[])));
        assert!(!table.resolve(
            "/audit-log",
            Some(ServiceProvider),
            &perms(&[])
        ));
    }

    #[test]
    fn test_quotation_submission_needs_provider_and_permission() {
        let table = policy_table();
        let granted = perms(&["quotations:submit"]);

        assert!(table.resolve(
            "/quotations/submit",
            Some(ServiceProvider),
            &granted
        ));
        assert!(!table.resolve(
            "/quotations/submit",
            Some(FuelStation),
            &granted
        ));
        assert!(!table.resolve(
            "/quotations/submit",
            Some(ServiceProvider),
            &perms(&[])
        ));
    }

    #[test]
    fn test_branch_detail_inherits_branches_policy() {
        let table = policy_table();

        assert!(table.resolve(
            "/branches/42",
            Some(FuelStation),
            &perms(&["branches:read"])
        ));
    }
}
