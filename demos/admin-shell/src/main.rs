//! Demo: a cold start of the admin shell, from persisted token to
//! reconciled session.
//!
//! Run with `cargo run -p admin-shell`. The "identity service" here is
//! a canned JSON response behind an artificial delay, so you can watch
//! the degraded session answer route guards before the authoritative
//! identity arrives.

use std::sync::Arc;
use std::time::Duration;

use fuelgate::prelude::*;

// ---------------------------------------------------------------------------
// Demo identity provider
// ---------------------------------------------------------------------------

/// What the real `/me` endpoint would return for our demo user.
const ME_RESPONSE: &str = r#"{
    "success": true,
    "data": {
        "user": {
            "id": 12,
            "email": "amina@example.com",
            "fullName": "Amina Haddad",
            "organizationId": 4
        },
        "organization": {
            "id": 4,
            "name": "Coastal Fuels",
            "type": "SERVICE_PROVIDER",
            "status": "APPROVED"
        },
        "roles": [{ "id": 1, "name": "Manager" }],
        "permissions": ["quotations:read", "quotations:submit", "services:manage"]
    }
}"#;

/// Parses the canned response after a simulated network round-trip.
struct DemoProvider;

impl IdentityProvider for DemoProvider {
    async fn fetch_identity(
        &self,
        _access_token: &str,
    ) -> Result<IdentitySnapshot, SessionError> {
        // Pretend the service is 300ms away.
        tokio::time::sleep(Duration::from_millis(300)).await;

        let response: MeResponse = serde_json::from_str(ME_RESPONSE)
            .map_err(|e| SessionError::ProviderUnavailable(e.to_string()))?;
        Ok(response.into_snapshot()?)
    }
}

/// Builds the payload a login form would hand to `AuthContext::login`,
/// from the same canned response plus tokens.
fn build_login_payload() -> Result<AuthPayload, FuelgateError> {
    let response: MeResponse = serde_json::from_str(ME_RESPONSE)
        .map_err(|e| SessionError::ProviderUnavailable(e.to_string()))?;
    let snapshot = response.into_snapshot()?;
    Ok(AuthPayload {
        user: snapshot.user,
        organization: snapshot.organization,
        roles: snapshot.roles,
        permissions: snapshot.permissions,
        access_token: "tok-from-login".into(),
        refresh_token: Some("refresh-from-login".into()),
        expires_in: Some(3600),
    })
}

// ---------------------------------------------------------------------------
// Demo
// ---------------------------------------------------------------------------

fn print_navigation(label: &str, forest: &[NavEntry]) {
    println!("\n== navigation ({label}) ==");
    fn walk(entries: &[NavEntry], depth: usize) {
        for entry in entries {
            println!("{}- {}", "  ".repeat(depth), entry.label());
            if let NavEntry::Group { children, .. } = entry {
                walk(children, depth + 1);
            }
        }
    }
    walk(forest, 0);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Storage as a previous run left it: a token and a cached category.
    let storage = Arc::new(MemoryStore::seeded([
        (StorageKey::AccessToken, "tok-from-last-run"),
        (StorageKey::OrganizationType, "SERVICE_PROVIDER"),
    ]));

    let auth = Arc::new(AuthContext::<Arc<MemoryStore>, DemoProvider>::builder().build(storage, DemoProvider));

    // Kick off the cold start in the background, the way an app shell
    // would, and read the degraded session while the "network" is slow.
    let init = {
        let auth = auth.clone();
        tokio::spawn(async move { auth.initialize().await })
    };
    while auth.phase().await == SessionPhase::Uninitialized {
        tokio::task::yield_now().await;
    }

    // The cached category already answers category-gated guards; the
    // permission-gated entries stay hidden until reconciliation.
    println!("degraded session, still loading: {}", auth.is_loading().await);
    println!(
        "can open /dashboard already? {}",
        auth.can_access("/dashboard").await
    );
    println!(
        "audit log already denied (authority-only)? {}",
        !auth.can_access("/audit-log").await
    );
    print_navigation("degraded", &auth.filter_navigation().await);

    // Let reconciliation finish.
    init.await.expect("initialize task panicked");

    let user = auth.user().await.expect("reconciled session has a user");
    println!("\nreconciled as {} <{}>", user.full_name, user.email);
    println!(
        "can submit quotations? {}",
        auth.can_access("/quotations/submit").await
    );
    println!(
        "can open the audit log? {}",
        auth.can_access("/audit-log").await
    );
    print_navigation("full", &auth.filter_navigation().await);

    auth.logout().await;
    println!("\nafter logout, authenticated: {}", auth.is_authenticated().await);

    // And straight back in, the way the login form would do it.
    let payload = build_login_payload().expect("canned response is valid");
    auth.login(payload).await;
    println!(
        "after login, authenticated again: {}",
        auth.is_authenticated().await
    );
}
