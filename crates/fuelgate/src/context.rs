//! `AuthContext`: the one object the rest of the application talks to.
//!
//! It wires the three layers together — session store, policy table,
//! navigation tree — and exposes the read surface the UI needs: "am I
//! signed in", "may I open this path", "what does my sidebar look
//! like". Everything async here is only lock acquisition; the single
//! genuinely suspending operation is [`AuthContext::initialize`].

use fuelgate_identity::{AuthPayload, Organization, Role, User};
use fuelgate_nav::{filter_navigation, NavEntry};
use fuelgate_policy::{PermissionSet, PolicyTable};
use fuelgate_session::{
    initialize, shared, IdentityProvider, KeyValueStore, SessionPhase,
    SessionStore, SharedSessionStore,
};

use crate::defaults;

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for configuring an [`AuthContext`].
///
/// # Example
///
/// ```rust,ignore
/// use fuelgate::prelude::*;
///
/// let auth = AuthContext::builder()
///     .build(LocalStorage::new(), HttpIdentityProvider::new(api));
/// auth.initialize().await;
/// ```
pub struct AuthContextBuilder {
    table: PolicyTable,
    navigation: Vec<NavEntry>,
}

impl AuthContextBuilder {
    /// Creates a builder with the platform's default policy table and
    /// navigation tree.
    pub fn new() -> Self {
        Self {
            table: defaults::policy_table(),
            navigation: defaults::navigation(),
        }
    }

    /// Replaces the access-policy table.
    pub fn table(mut self, table: PolicyTable) -> Self {
        self.table = table;
        self
    }

    /// Replaces the navigation tree.
    pub fn navigation(mut self, navigation: Vec<NavEntry>) -> Self {
        self.navigation = navigation;
        self
    }

    /// Finishes the context over the given persistence backend and
    /// identity provider.
    pub fn build<K, P>(self, store: K, provider: P) -> AuthContext<K, P>
    where
        K: KeyValueStore,
        P: IdentityProvider,
    {
        AuthContext {
            session: shared(SessionStore::new(store)),
            provider,
            table: self.table,
            navigation: self.navigation,
        }
    }
}

impl Default for AuthContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// AuthContext
// ---------------------------------------------------------------------------

/// The session & authorization facade.
///
/// One per process, explicitly owned and passed where needed — tests
/// construct isolated instances with their own stores and providers.
pub struct AuthContext<K: KeyValueStore, P: IdentityProvider> {
    session: SharedSessionStore<K>,
    provider: P,
    table: PolicyTable,
    navigation: Vec<NavEntry>,
}

impl<K: KeyValueStore, P: IdentityProvider> AuthContext<K, P> {
    /// Starts building a context.
    pub fn builder() -> AuthContextBuilder {
        AuthContextBuilder::new()
    }

    // -- Lifecycle --------------------------------------------------------

    /// Cold start: resume from persisted state, then reconcile against
    /// the identity service. Degraded state is readable the moment the
    /// persisted token has been read; this future resolves once
    /// reconciliation has settled (success, soft failure, or "no
    /// token").
    pub async fn initialize(&self) {
        initialize(&self.session, &self.provider).await;
    }

    /// Adopts a freshly authenticated identity (the login form's
    /// responsibility ends by handing its payload here).
    pub async fn login(&self, payload: AuthPayload) {
        self.session.lock().await.login(payload);
    }

    /// Drops the session and all persisted state. Idempotent; any
    /// in-flight reconciliation result is discarded when it lands.
    pub async fn logout(&self) {
        self.session.lock().await.logout();
    }

    // -- Session projections ----------------------------------------------

    /// `true` iff an access token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.session.lock().await.is_authenticated()
    }

    /// `true` until reconciliation has settled.
    pub async fn is_loading(&self) -> bool {
        self.session.lock().await.session().is_loading
    }

    /// The current lifecycle phase.
    pub async fn phase(&self) -> SessionPhase {
        self.session.lock().await.phase()
    }

    /// The authenticated user, if fully reconciled.
    pub async fn user(&self) -> Option<User> {
        self.session.lock().await.session().user.clone()
    }

    /// The current organization (placeholder or full).
    pub async fn organization(&self) -> Option<Organization> {
        self.session.lock().await.session().organization.clone()
    }

    /// The granted roles.
    pub async fn roles(&self) -> Vec<Role> {
        self.session.lock().await.session().roles.clone()
    }

    /// The granted permission codes.
    pub async fn permissions(&self) -> PermissionSet {
        self.session.lock().await.session().permissions.clone()
    }

    /// The raw access token, for the API client's Authorization header.
    pub async fn access_token(&self) -> Option<String> {
        self.session.lock().await.session().access_token.clone()
    }

    // -- Authorization ----------------------------------------------------

    /// Single-code permission query.
    pub async fn has_permission(&self, code: &str) -> bool {
        self.session.lock().await.has_permission(code)
    }

    /// Any-of permission query (`has_any_permission([])` is `false`).
    pub async fn has_any_permission<I, S>(&self, codes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.session.lock().await.has_any_permission(codes)
    }

    /// All-of permission query (`has_all_permissions([])` is `true`).
    pub async fn has_all_permissions<I, S>(&self, codes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.session.lock().await.has_all_permissions(codes)
    }

    /// The route-guard question: may the current session open `path`?
    ///
    /// Resolves the policy table over the session's organization
    /// category and permission set — which means it answers correctly
    /// from degraded state, without waiting for reconciliation.
    pub async fn can_access(&self, path: &str) -> bool {
        let store = self.session.lock().await;
        self.table.resolve(path, store.org_type(), store.permissions())
    }

    /// The navigation tree pruned to what the current session may see.
    pub async fn filter_navigation(&self) -> Vec<NavEntry> {
        let store = self.session.lock().await;
        filter_navigation(
            &self.navigation,
            &self.table,
            store.org_type(),
            store.permissions(),
        )
    }

    /// The access-policy table this context resolves against.
    pub fn table(&self) -> &PolicyTable {
        &self.table
    }
}
