//! The session store: owns the session record and its lifecycle.
//!
//! This is the central piece of the session layer. It's responsible
//! for:
//! - Reading persisted state on cold start and synthesizing a degraded
//!   session from the cached organization-category tag
//! - Merging reconciliation results — and discarding stale ones
//! - Handling login and logout, including what gets persisted
//! - Answering "is anyone signed in" and permission queries
//!
//! # Concurrency note
//!
//! `SessionStore` is NOT thread-safe by itself — it's plain mutable
//! state. It is owned behind a `tokio::sync::Mutex` at a higher level
//! (see [`SharedSessionStore`](crate::SharedSessionStore)); keeping the
//! store itself synchronous makes every transition atomic by
//! construction and keeps the state machine testable without a runtime.
//!
//! # Staleness and the epoch counter
//!
//! Reconciliation runs in the background while the user can log out (or
//! log in again) underneath it. The store bumps an epoch counter on
//! every `begin_initialize` / `login` / `logout`; a reconciliation
//! ticket carries the epoch it started under, and a result whose epoch
//! no longer matches is discarded. A logged-out session is never
//! revived by a slow network response.

use fuelgate_identity::{
    AuthPayload, IdentitySnapshot, Organization, OrganizationType,
};
use fuelgate_policy::PermissionSet;

use crate::{KeyValueStore, Session, SessionPhase, StorageKey};

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// What `begin_initialize` found in the persistent store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// No persisted token — the session is logged out and settled.
    /// No reconciliation will run.
    LoggedOut,

    /// A token was found; the session is degraded and reconciliation
    /// should be driven with this ticket.
    Resume {
        /// The epoch the degraded session was established under. Must
        /// be handed back with the reconciliation result.
        epoch: u64,

        /// The persisted access token, for the identity provider.
        access_token: String,
    },
}

/// Whether a reconciliation result was accepted or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The result was merged into (or acknowledged by) the session.
    Applied,

    /// The session moved on (logout or a fresh login) while the
    /// reconciliation was in flight; the result was thrown away.
    Stale,
}

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

/// Owns the [`Session`] and drives its state machine.
///
/// Explicitly constructed and injectable — build one per process, or
/// one per test, with whatever [`KeyValueStore`] backend fits.
pub struct SessionStore<K: KeyValueStore> {
    session: Session,
    phase: SessionPhase,
    epoch: u64,
    store: K,
}

impl<K: KeyValueStore> SessionStore<K> {
    /// Creates an uninitialized store over the given persistence
    /// backend. Call [`begin_initialize`](Self::begin_initialize) (or
    /// the async driver in this crate) before reading the session.
    pub fn new(store: K) -> Self {
        Self {
            session: Session::uninitialized(),
            phase: SessionPhase::Uninitialized,
            epoch: 0,
            store,
        }
    }

    // -- Lifecycle --------------------------------------------------------

    /// Cold-start step one: read persisted state and settle or degrade.
    ///
    /// No token → the session becomes the canonical logged-out state
    /// and the path is terminal ([`InitOutcome::LoggedOut`]).
    ///
    /// Token present → the token is adopted, and if the cached
    /// organization-category tag parses, a placeholder organization
    /// with that category (status APPROVED) is synthesized so route
    /// guards can answer immediately instead of blocking on the
    /// network. A missing or garbled tag is ignored — the organization
    /// simply stays `None` until reconciliation. `is_loading` remains
    /// true; the caller drives reconciliation with the returned ticket.
    pub fn begin_initialize(&mut self) -> InitOutcome {
        self.epoch += 1;

        let Some(token) = self.store.get(StorageKey::AccessToken) else {
            self.session = Session::logged_out();
            self.phase = SessionPhase::LoggedOut;
            tracing::info!("no persisted token, starting logged out");
            return InitOutcome::LoggedOut;
        };

        let cached_org = self
            .store
            .get(StorageKey::OrganizationType)
            .as_deref()
            .and_then(OrganizationType::from_tag);

        self.session = Session {
            access_token: Some(token.clone()),
            organization: cached_org.map(Organization::placeholder),
            is_loading: true,
            ..Session::logged_out()
        };
        self.phase = SessionPhase::Degraded;

        tracing::info!(
            org_type = cached_org.map(|t| t.as_tag()),
            "degraded session resumed from persisted token"
        );

        InitOutcome::Resume {
            epoch: self.epoch,
            access_token: token,
        }
    }

    /// Merges a successful reconciliation result.
    ///
    /// If `epoch` is stale the snapshot is discarded untouched — the
    /// session has been logged out or re-logged-in meanwhile, and that
    /// state wins. Otherwise the authoritative identity replaces the
    /// degraded one, the organization-category tag is re-persisted (it
    /// may have changed server-side since it was cached), and
    /// `is_loading` settles.
    pub fn complete_reconciliation(
        &mut self,
        epoch: u64,
        snapshot: IdentitySnapshot,
    ) -> ReconcileOutcome {
        if epoch != self.epoch {
            tracing::debug!(
                stale = epoch,
                current = self.epoch,
                "discarding stale reconciliation result"
            );
            return ReconcileOutcome::Stale;
        }

        self.store.set(
            StorageKey::OrganizationType,
            snapshot.organization.org_type.as_tag(),
        );

        self.session.user = Some(snapshot.user);
        self.session.organization = Some(snapshot.organization);
        self.session.roles = snapshot.roles;
        self.session.permissions = snapshot.permissions.into_iter().collect();
        self.session.is_loading = false;
        self.phase = SessionPhase::Full;

        tracing::info!("session reconciled to full identity");
        ReconcileOutcome::Applied
    }

    /// Records a failed reconciliation.
    ///
    /// A soft failure: the degraded session stays exactly as it is — no
    /// logout, no error surfaced — and only `is_loading` settles. A
    /// genuinely invalid token will fail later authenticated calls
    /// outside this core, and *that* path triggers the logout.
    /// Epoch-guarded like the success path, so a stale failure can't
    /// clear a fresh session's loading flag.
    pub fn fail_reconciliation(&mut self, epoch: u64) -> ReconcileOutcome {
        if epoch != self.epoch {
            return ReconcileOutcome::Stale;
        }

        self.session.is_loading = false;
        tracing::warn!("reconciliation failed, keeping degraded session");
        ReconcileOutcome::Applied
    }

    /// Replaces the session with a freshly authenticated identity.
    ///
    /// The whole record is overwritten at once — readers never see a
    /// half-populated session. Persists the access token, the refresh
    /// token when present, and the organization-category tag for the
    /// next cold start. Transitions any state directly to `Full` and
    /// invalidates any in-flight reconciliation.
    pub fn login(&mut self, payload: AuthPayload) {
        self.epoch += 1;

        self.store.set(StorageKey::AccessToken, &payload.access_token);
        if let Some(refresh) = &payload.refresh_token {
            self.store.set(StorageKey::RefreshToken, refresh);
        }
        self.store.set(
            StorageKey::OrganizationType,
            payload.organization.org_type.as_tag(),
        );

        self.session = Session {
            user: Some(payload.user),
            organization: Some(payload.organization),
            roles: payload.roles,
            permissions: payload.permissions.into_iter().collect(),
            access_token: Some(payload.access_token),
            is_loading: false,
        };
        self.phase = SessionPhase::Full;

        tracing::info!("logged in");
    }

    /// Resets to the canonical logged-out state and clears all three
    /// persisted keys. Idempotent, and invalidates any in-flight
    /// reconciliation.
    pub fn logout(&mut self) {
        self.epoch += 1;

        self.store.remove(StorageKey::AccessToken);
        self.store.remove(StorageKey::RefreshToken);
        self.store.remove(StorageKey::OrganizationType);

        self.session = Session::logged_out();
        self.phase = SessionPhase::LoggedOut;

        tracing::info!("logged out");
    }

    // -- Read accessors ---------------------------------------------------

    /// The current session record.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The current epoch. Mostly useful for tests and diagnostics.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// `true` iff an access token is held.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The current organization category, from placeholder or full
    /// organization alike.
    pub fn org_type(&self) -> Option<OrganizationType> {
        self.session.organization.as_ref().map(|o| o.org_type)
    }

    /// The current permission set.
    pub fn permissions(&self) -> &PermissionSet {
        &self.session.permissions
    }

    /// Delegates to [`PermissionSet::has`].
    pub fn has_permission(&self, code: &str) -> bool {
        self.session.permissions.has(code)
    }

    /// Delegates to [`PermissionSet::has_any`].
    pub fn has_any_permission<I, S>(&self, codes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.session.permissions.has_any(codes)
    }

    /// Delegates to [`PermissionSet::has_all`].
    pub fn has_all_permissions<I, S>(&self, codes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.session.permissions.has_all(codes)
    }
}

// =========================================================================
// Tests
// =========================================================================
