//! CampusGate portal front end.
//!
//! Context-driven architecture with a strict split between pure rules and
//! browser plumbing:
//! - `web::route`: route table and access rules (domain model)
//! - `web::router`: History-API router with role guards (core engine)
//! - `validate`: pure signup validators (password strength, email domain)
//! - `auth`: principal state
//! - `submit`: async submission controller shared by the forms
//! - `notify`: toast notifications
//! - `components`: UI layer

mod api;
mod auth;
mod notify;
mod submit;

mod validate {
    pub mod email;
    pub mod password;
}

mod components {
    pub mod admin;
    pub mod dashboard;
    mod icons;
    pub mod login;
    pub mod signup;
}

// Native Web API wrappers.
// Everything that touches window/history/storage lives here so the rest of
// the crate stays host-testable.
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::admin::AdminPage;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::signup::SignupPage;
use crate::notify::{Notifier, Toaster};
use crate::web::route::RouteKey;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;

/// Maps the current route to its page component.
fn route_matcher(route: RouteKey) -> AnyView {
    match route {
        RouteKey::Login => view! { <LoginPage /> }.into_any(),
        RouteKey::Signup => view! { <SignupPage /> }.into_any(),
        RouteKey::Dashboard => view! { <DashboardPage /> }.into_any(),
        RouteKey::Admin => view! { <AdminPage /> }.into_any(),
        RouteKey::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Principal context
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. Restore the role hint from LocalStorage (session cookie survives
    //    reloads; the client-side guard should agree with it)
    init_auth(&auth_ctx);

    // 3. Notification context
    let notifier = Notifier::new();
    provide_context(notifier);

    // 4. Inject the principal signal into the router so the guard stays
    //    decoupled from the auth module
    let principal = auth_ctx.role_signal();

    view! {
        <Router principal=principal>
            <Toaster />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
