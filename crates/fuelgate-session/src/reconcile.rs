//! The reconciliation driver: cold start, degraded resume, and the
//! background catch-up to the authoritative identity.
//!
//! The flow, and who holds the lock when:
//!
//! ```text
//! initialize()
//!   ├─ lock → begin_initialize() → unlock     (degraded state visible NOW)
//!   ├─ await provider.fetch_identity()        (lock NOT held)
//!   └─ lock → complete/fail(epoch, ...) → unlock
//! ```
//!
//! The fetch happens outside the lock so route guards and navigation
//! renders keep reading the degraded session while the network call is
//! in flight. The epoch captured in step one makes step three safe: if
//! a logout (or fresh login) happened in between, the result is
//! discarded by the store.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    IdentityProvider, InitOutcome, KeyValueStore, SessionStore,
};

/// The shared handle the rest of the application reads sessions
/// through. Cheap to clone; one store per process.
pub type SharedSessionStore<K> = Arc<Mutex<SessionStore<K>>>;

/// Wraps a [`SessionStore`] for shared use.
pub fn shared<K: KeyValueStore>(store: SessionStore<K>) -> SharedSessionStore<K> {
    Arc::new(Mutex::new(store))
}

/// Runs the cold-start sequence: resume from persisted state, then
/// reconcile against the identity service.
///
/// Returns as soon as the session has settled (`is_loading == false`),
/// whether that took a network round-trip or not. Runs the provider at
/// most once; never retries. Every provider failure is logged and
/// swallowed — the degraded session stays in place and no error reaches
/// the caller.
pub async fn initialize<K, P>(session: &SharedSessionStore<K>, provider: &P)
where
    K: KeyValueStore,
    P: IdentityProvider,
{
    // Step one inside a short lock: the degraded (or logged-out) state
    // must be visible to concurrent readers before any I/O starts.
    let outcome = session.lock().await.begin_initialize();

    let InitOutcome::Resume { epoch, access_token } = outcome else {
        // No token — nothing to reconcile, terminal for this path.
        return;
    };

    match provider.fetch_identity(&access_token).await {
        Ok(snapshot) => {
            session.lock().await.complete_reconciliation(epoch, snapshot);
        }
        Err(error) => {
            tracing::warn!(%error, "identity reconciliation failed");
            session.lock().await.fail_reconciliation(epoch);
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
