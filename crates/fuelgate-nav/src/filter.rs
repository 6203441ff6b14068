//! The navigation visibility filter.
//!
//! Given the static navigation forest and the current session's
//! (organization category, permission set), produce the forest the user
//! is allowed to see:
//!
//! - A leaf survives iff the policy table resolves its path visible
//!   (a leaf with no path always survives — it's a pure header).
//! - A group survives iff at least one descendant leaf, at any depth,
//!   survives. It is emitted with only its surviving children, in the
//!   original sibling order. A group left with no children is dropped
//!   entirely — an empty section is never rendered.
//!
//! The filter is pure: same inputs, same output, no UI state (expanded
//! or collapsed sections are the presentation layer's business).

use fuelgate_identity::OrganizationType;
use fuelgate_policy::{PermissionSet, PolicyTable};

use crate::NavEntry;

/// Filters a navigation forest down to the entries the current session
/// may see. Structure and sibling order are preserved.
pub fn filter_navigation(
    forest: &[NavEntry],
    table: &PolicyTable,
    org_type: Option<OrganizationType>,
    permissions: &PermissionSet,
) -> Vec<NavEntry> {
    forest
        .iter()
        .filter_map(|entry| filter_entry(entry, table, org_type, permissions))
        .collect()
}

/// Filters one entry: `Some(pruned)` if it survives, `None` if not.
fn filter_entry(
    entry: &NavEntry,
    table: &PolicyTable,
    org_type: Option<OrganizationType>,
    permissions: &PermissionSet,
) -> Option<NavEntry> {
    match entry {
        NavEntry::Leaf { path, .. } => match path {
            // A pathless leaf is a pure header — always visible.
            None => Some(entry.clone()),
            Some(path) => table
                .resolve(path, org_type, permissions)
                .then(|| entry.clone()),
        },
        NavEntry::Group {
            label,
            icon,
            children,
        } => {
            let surviving =
                filter_navigation(children, table, org_type, permissions);
            // A group with nothing left under it disappears.
            if surviving.is_empty() {
                return None;
            }
            Some(NavEntry::Group {
                label: label.clone(),
                icon: icon.clone(),
                children: surviving,
            })
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
