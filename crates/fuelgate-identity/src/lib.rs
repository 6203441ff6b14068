//! Identity types for Fuelgate.
//!
//! This crate defines the "vocabulary" the session and authorization
//! layers speak:
//!
//! - **Types** ([`User`], [`Organization`], [`OrganizationType`],
//!   [`Role`], [`IdentitySnapshot`], [`AuthPayload`]) — who the current
//!   user is and which organization they act for.
//! - **Wire shapes** ([`MeResponse`], [`MeData`]) — the lenient JSON
//!   envelope of the identity service's "who am I" endpoint, and its
//!   validation into a complete snapshot.
//! - **Errors** ([`IdentityError`]) — what can go wrong during that
//!   validation.
//!
//! # Architecture
//!
//! The identity layer sits at the bottom of the stack. It knows nothing
//! about sessions, persistence, or policies — it only defines data and
//! validates wire payloads.
//!
//! ```text
//! Identity (types) → Session (lifecycle) → Policy/Nav (authorization)
//! ```

mod error;
mod types;
mod wire;

pub use error::IdentityError;
pub use types::{
    AuthPayload, IdentitySnapshot, Organization, OrganizationId,
    OrganizationStatus, OrganizationType, Role, User, UserId,
};
pub use wire::{MeData, MeResponse};
