//! The persistent key-value contract: what survives a reload.
//!
//! Exactly three scalar values are persisted across process restarts:
//! the access token, the refresh token, and the cached
//! organization-category tag. The host application supplies the actual
//! storage (browser local storage behind a WASM shim, a keychain, a
//! file) by implementing [`KeyValueStore`]; this crate ships
//! [`MemoryStore`] for tests and demos.
//!
//! Only the session store reads or writes these keys. Everything else
//! goes through the session's accessors.

use std::collections::HashMap;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// StorageKey
// ---------------------------------------------------------------------------

/// The three persisted keys.
///
/// A closed enum instead of raw strings, so a typo'd key is a compile
/// error and the full persisted surface is visible in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The opaque access token. Its presence is the sole
    /// authentication predicate.
    AccessToken,

    /// The opaque refresh token. Optional; consumed by the identity
    /// service client, not by this core.
    RefreshToken,

    /// The cached organization-category tag (one of the three
    /// `OrganizationType` tags). Lets a cold start synthesize a
    /// degraded session without waiting for the network.
    OrganizationType,
}

impl StorageKey {
    /// The stable storage name. Changing one of these strands every
    /// existing installation's cached value, so don't.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AccessToken => "fuelgate.access_token",
            Self::RefreshToken => "fuelgate.refresh_token",
            Self::OrganizationType => "fuelgate.organization_type",
        }
    }
}

// ---------------------------------------------------------------------------
// KeyValueStore
// ---------------------------------------------------------------------------

/// A durable string store surviving process restarts.
///
/// The contract is deliberately minimal and infallible: `get` returns
/// `None` for an absent key, `set`/`remove` cannot fail. A backend with
/// fallible writes (disk full, quota exceeded) should log and swallow —
/// losing a cached value degrades the next cold start, it never breaks
/// the current session.
///
/// # Trait bounds
///
/// - `Send + Sync` → the store is shared with the background
///   reconciliation task.
/// - `'static` → it doesn't borrow temporary data; it lives as long as
///   the session store that owns it.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Reads a key. Absent keys return `None`, never an error.
    fn get(&self, key: StorageKey) -> Option<String>;

    /// Writes a key, replacing any previous value.
    fn set(&self, key: StorageKey, value: &str);

    /// Deletes a key. Removing an absent key is a no-op.
    fn remove(&self, key: StorageKey);
}

/// Sharing a backend between the session store and the host (or a
/// test) is common enough that `Arc<K>` is a store too.
impl<K: KeyValueStore> KeyValueStore for std::sync::Arc<K> {
    fn get(&self, key: StorageKey) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: StorageKey, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: StorageKey) {
        (**self).remove(key)
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// An in-memory [`KeyValueStore`] for tests and demos.
///
/// Interior mutability via a std `Mutex` — the contract is synchronous,
/// so there's nothing to await while holding the lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<StorageKey, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with values, for simulating a warm
    /// cold start in tests.
    pub fn seeded<'a>(
        entries: impl IntoIterator<Item = (StorageKey, &'a str)>,
    ) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values.lock().expect("store lock poisoned").get(&key).cloned()
    }

    fn set(&self, key: StorageKey, value: &str) {
        self.values
            .lock()
            .expect("store lock poisoned")
            .insert(key, value.to_string());
    }

    fn remove(&self, key: StorageKey) {
        self.values.lock().expect("store lock poisoned").remove(&key);
    }
}

// =========================================================================
// Tests
// =========================================================================
