//! Session lifecycle for Fuelgate.
//!
//! This crate owns the answer to "who is signed in right now":
//!
//! 1. **Persistence contract** ([`KeyValueStore`], [`StorageKey`]) —
//!    the three values that survive a reload: access token, refresh
//!    token, cached organization-category tag.
//! 2. **Session record** ([`Session`], [`SessionPhase`]) — the
//!    identity everything else reads, and its state machine.
//! 3. **Session store** ([`SessionStore`]) — the lifecycle transitions:
//!    degraded resume, reconciliation merge (epoch-guarded against
//!    stale results), login, logout.
//! 4. **Reconciliation** ([`IdentityProvider`], [`initialize`]) — the
//!    one asynchronous routine: fetch the authoritative identity in the
//!    background while the degraded session keeps answering.
//!
//! # How it fits in the stack
//!
//! ```text
//! Policy/Nav (above)  ← read org category + permissions per render
//!     ↕
//! Session (this crate)  ← owns the identity record and its lifecycle
//!     ↕
//! Identity (below)  ← types and wire validation
//! ```

#![allow(async_fn_in_trait)]

mod error;
mod manager;
mod provider;
mod reconcile;
mod session;
mod store;

pub use error::SessionError;
pub use manager::{InitOutcome, ReconcileOutcome, SessionStore};
pub use provider::IdentityProvider;
pub use reconcile::{initialize, shared, SharedSessionStore};
pub use session::{Session, SessionPhase};
pub use store::{KeyValueStore, MemoryStore, StorageKey};
