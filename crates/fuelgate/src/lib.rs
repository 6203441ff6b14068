//! # Fuelgate
//!
//! Session & authorization core for the Fuelgate admin platform.
//!
//! Fuelgate establishes an authenticated identity that survives
//! reloads, reconciles a locally-cached identity against the
//! authoritative identity service in the background, and answers — for
//! every navigable resource — whether the current identity may see it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fuelgate::prelude::*;
//!
//! // Implement KeyValueStore over your storage and IdentityProvider
//! // over your HTTP client, then:
//! // let auth = AuthContext::builder()
//! //     .build(my_storage, my_provider);
//! // auth.initialize().await;      // degraded → full in the background
//! // auth.can_access("/branches").await;
//! // auth.filter_navigation().await;
//! ```

mod context;
pub mod defaults;
mod error;

pub use context::{AuthContext, AuthContextBuilder};
pub use error::FuelgateError;

/// Everything a host application typically imports.
pub mod prelude {
    pub use crate::{AuthContext, AuthContextBuilder, FuelgateError};
    pub use fuelgate_identity::{
        AuthPayload, IdentitySnapshot, MeResponse, Organization,
        OrganizationId, OrganizationStatus, OrganizationType, Role, User,
        UserId,
    };
    pub use fuelgate_nav::{filter_navigation, NavEntry};
    pub use fuelgate_policy::{
        AccessPolicy, PermissionSet, PolicyTable, UnmappedAccess,
    };
    pub use fuelgate_session::{
        IdentityProvider, KeyValueStore, MemoryStore, SessionError,
        SessionPhase, StorageKey,
    };
}
