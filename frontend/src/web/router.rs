//! Router service - core engine.
//!
//! Wraps the web_sys History API with high cohesion: every touch of
//! window.history happens in this module. Each navigation runs the
//! "request -> guard -> resolve -> load" flow against the route table in
//! [`super::route`].

use leptos::prelude::*;
use portal_shared::Role;
use wasm_bindgen::prelude::*;

use super::route::{Access, RouteKey, check_access};

/// Current browser path.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Like push, but replaces the current entry. Used for guard redirects so
/// the denied URL does not linger in history.
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service.
///
/// Drives the UI through a route signal. The principal signal is injected
/// by the caller, keeping the router decoupled from the auth module.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<RouteKey>,
    set_route: WriteSignal<RouteKey>,
    /// Injected principal; `None` means an anonymous visitor.
    principal: Signal<Option<Role>>,
}

impl RouterService {
    fn new(principal: Signal<Option<Role>>) -> Self {
        // Deep links are guarded like any other navigation attempt.
        let path = current_path();
        let mut initial_route = RouteKey::from_path(&path);
        let role = principal.get_untracked();
        if let Access::Denied = check_access(initial_route, role) {
            initial_route = Self::denial_redirect(initial_route, role);
            replace_history_state(initial_route.to_path());
        }
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            principal,
        }
    }

    pub fn current_route(&self) -> ReadSignal<RouteKey> {
        self.current_route
    }

    /// Navigate to a path, running the role guard first.
    pub fn navigate(&self, path: &str) {
        let target_route = RouteKey::from_path(path);
        self.navigate_to_route(target_route, true);
    }

    fn navigate_to_route(&self, target_route: RouteKey, use_push: bool) {
        let role = self.principal.get_untracked();

        if let Access::Denied = check_access(target_route, role) {
            let redirect = Self::denial_redirect(target_route, role);
            web_sys::console::log_1(
                &format!(
                    "[Router] Access denied for {target_route}. Redirecting to {redirect}."
                )
                .into(),
            );
            if use_push {
                push_history_state(redirect.to_path());
            } else {
                replace_history_state(redirect.to_path());
            }
            self.set_route.set(redirect);
            return;
        }

        // Guard passed: commit to history and update the UI.
        if use_push {
            push_history_state(target_route.to_path());
        } else {
            replace_history_state(target_route.to_path());
        }
        self.set_route.set(target_route);
    }

    /// Where a denied navigation lands. An authenticated principal bounced
    /// off a guest-only page (login/signup) goes to the dashboard; everyone
    /// else goes to the login page.
    fn denial_redirect(target: RouteKey, role: Option<Role>) -> RouteKey {
        let authenticated = role.is_some_and(|r| r.is_authenticated());
        if authenticated && !target.descriptor().auth_required {
            RouteKey::auth_success_redirect()
        } else {
            RouteKey::auth_failure_redirect()
        }
    }

    /// Browser back/forward support.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let principal = self.principal;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            let target_route = RouteKey::from_path(&path);
            let role = principal.get_untracked();

            // The guard applies to history traversal too.
            if let Access::Denied = check_access(target_route, role) {
                let redirect = Self::denial_redirect(target_route, role);
                replace_history_state(redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target_route);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive.
        closure.forget();
    }

    /// Redirects automatically when the principal changes: login pushes the
    /// user off guest pages, logout pushes them off protected ones.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let principal = self.principal;

        Effect::new(move |_| {
            let role = principal.get();
            let route = current_route.get_untracked();

            if let Access::Denied = check_access(route, role) {
                let redirect = Self::denial_redirect(route, role);
                web_sys::console::log_1(
                    &format!("[Router] Principal changed, redirecting to {redirect}.").into(),
                );
                push_history_state(redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

/// Provides the router service to Context and wires its listeners.
fn provide_router(principal: Signal<Option<Role>>) -> RouterService {
    let router = RouterService::new(principal);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// Fetches the router service from Context.
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Router root component. Provides the routing context; use at the top of
/// the App.
#[component]
pub fn Router(
    /// Principal signal, `None` for anonymous visitors
    principal: Signal<Option<Role>>,
    /// Child components
    children: Children,
) -> impl IntoView {
    provide_router(principal);

    children()
}

/// Router outlet. Renders whatever the matcher returns for the current
/// route.
#[component]
pub fn RouterOutlet(
    /// Route match function: current route in, view out
    matcher: fn(RouteKey) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
