use crate::auth::{logout, use_auth};
use crate::web::router::use_router;
use leptos::prelude::*;
use portal_shared::Role;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let state = auth.state;

    let display_name = move || {
        state
            .get()
            .name
            .unwrap_or_else(|| "there".to_string())
    };
    let role_label = move || {
        state
            .get()
            .role
            .unwrap_or_default()
            .to_string()
    };
    let is_admin = move || state.get().role == Some(Role::Admin);

    // Logout clears the principal; the router's principal watcher handles
    // the redirect back to login.
    let on_logout = move |_| logout(&auth);

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow">
                    <div class="flex-1">
                        <span class="text-xl font-bold px-4">"College Portal"</span>
                    </div>
                    <div class="flex-none gap-2 px-2">
                        <Show when=is_admin>
                            <button
                                class="btn btn-ghost"
                                on:click=move |_| router.navigate("/admin")
                            >
                                "Admin"
                            </button>
                        </Show>
                        <button class="btn btn-outline btn-sm" on:click=on_logout>
                            "Log out"
                        </button>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{move || format!("Hello, {}", display_name())}</h2>
                        <p class="text-base-content/70">
                            {move || format!("You are signed in as {}.", role_label())}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
