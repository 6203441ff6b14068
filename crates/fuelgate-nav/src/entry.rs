//! Navigation tree types.
//!
//! The navigation sidebar is declared once, as static configuration: a
//! forest of entries, each either a leaf (a navigable path plus display
//! metadata) or a group (display metadata plus ordered children, nested
//! arbitrarily deep). Which entries a given user actually *sees* is a
//! derived property — see the [`filter`](crate::filter_navigation)
//! module — never stored on the tree itself.

use serde::{Deserialize, Serialize};

/// One node in the navigation tree.
///
/// `#[serde(tag = "kind")]` gives the config file an explicit
/// discriminator:
///
/// ```json
/// { "kind": "Leaf", "label": "Branches", "path": "/branches" }
/// { "kind": "Group", "label": "Procurement", "children": [ ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NavEntry {
    /// A navigable menu item.
    Leaf {
        /// Display label.
        label: String,

        /// The route this leaf navigates to. A leaf without a path is a
        /// pure header and is always visible.
        #[serde(default)]
        path: Option<String>,

        /// Icon name for the UI layer. Opaque here.
        #[serde(default)]
        icon: Option<String>,
    },

    /// A section containing further entries.
    ///
    /// Groups have no path of their own; their visibility is derived
    /// entirely from their descendants.
    Group {
        /// Display label.
        label: String,

        /// Icon name for the UI layer. Opaque here.
        #[serde(default)]
        icon: Option<String>,

        /// Ordered children — leaves or nested groups.
        children: Vec<NavEntry>,
    },
}

impl NavEntry {
    /// Shorthand for a leaf with a path and no icon.
    pub fn leaf(label: &str, path: &str) -> Self {
        Self::Leaf {
            label: label.to_string(),
            path: Some(path.to_string()),
            icon: None,
        }
    }

    /// Shorthand for a group with no icon.
    pub fn group(label: &str, children: Vec<NavEntry>) -> Self {
        Self::Group {
            label: label.to_string(),
            icon: None,
            children,
        }
    }

    /// The entry's display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. } | Self::Group { label, .. } => label,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
