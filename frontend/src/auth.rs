//! Principal state, decoupled from routing.
//!
//! The router receives the role as an injected signal; this module only
//! owns the state. The session itself is an HttpOnly cookie managed by the
//! backend, so the client keeps nothing secret - just a role hint in
//! LocalStorage so the guard stays coherent across reloads.

use crate::web::LocalStorage;
use leptos::prelude::*;
use portal_shared::{Profile, Role};

const STORAGE_ROLE_KEY: &str = "portal_role";

/// Client-side view of the principal.
#[derive(Clone, Default, PartialEq)]
pub struct AuthState {
    /// Role of the logged-in principal; `None` for anonymous visitors.
    pub role: Option<Role>,
    /// Display name, for the authenticated pages.
    pub name: Option<String>,
}

/// Auth context: read and write signals shared through Context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// Principal signal for injection into the router guard.
    pub fn role_signal(&self) -> Signal<Option<Role>> {
        let state = self.state;
        Signal::derive(move || state.get().role)
    }
}

/// Fetches the auth context from Context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Restores the role hint left by a previous session. The cookie may have
/// expired server-side; the first authenticated request would then fail
/// and the user lands back on login.
pub fn init_auth(ctx: &AuthContext) {
    if let Some(stored) = LocalStorage::get(STORAGE_ROLE_KEY) {
        if let Some(role) = Role::from_str(&stored) {
            if role.is_authenticated() {
                ctx.set_state.update(|state| state.role = Some(role));
            }
        }
    }
}

/// Seats the principal after a successful login. The cookie is already set
/// by the backend; only the role hint is persisted, never a credential.
pub fn establish(ctx: &AuthContext, profile: &Profile) {
    LocalStorage::set(STORAGE_ROLE_KEY, profile.role.as_str());

    ctx.set_state.update(|state| {
        state.role = Some(profile.role);
        state.name = Some(profile.name.clone());
    });
}

/// Clears the principal. Navigation is handled by the router's principal
/// watcher, not here.
pub fn logout(ctx: &AuthContext) {
    LocalStorage::delete(STORAGE_ROLE_KEY);

    ctx.set_state.update(|state| {
        state.role = None;
        state.name = None;
    });
}
