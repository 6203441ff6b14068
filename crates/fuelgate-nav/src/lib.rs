//! Navigation tree and visibility filtering for Fuelgate.
//!
//! The admin shell's sidebar is declared as a static forest of
//! [`NavEntry`] nodes. [`filter_navigation`] derives the subset a given
//! session may see, by resolving every leaf path against the access
//! policy table and pruning groups that end up empty.
//!
//! Visibility is the only concern of this crate. Expand/collapse state,
//! highlighting, icons-as-pixels — all presentation, all elsewhere.

mod entry;
mod filter;

pub use entry::NavEntry;
pub use filter::filter_navigation;
