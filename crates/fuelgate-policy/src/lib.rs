//! Authorization rules for Fuelgate.
//!
//! This crate answers one question: *may the current identity see
//! resource X?* It is split into three pure, synchronous pieces:
//!
//! - **Permission evaluator** ([`PermissionSet`]) — set queries over
//!   granted permission codes (single / any-of / all-of).
//! - **Access policies** ([`AccessPolicy`], [`OrgRule`],
//!   [`PermissionRule`]) — the rule for one resource: organization
//!   category AND permission requirement.
//! - **Policy table** ([`PolicyTable`], [`normalize_key`]) — the static
//!   key → policy mapping with configurable behavior for unmapped keys.
//!
//! Nothing here holds state or performs I/O; everything is safely
//! callable from any number of concurrent readers.

mod permission;
mod policy;
mod table;

pub use permission::PermissionSet;
pub use policy::{AccessPolicy, OrgRule, PermissionRule};
pub use table::{normalize_key, PolicyTable, PolicyTableBuilder, UnmappedAccess};
