use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow">
                    <div class="flex-1">
                        <span class="text-xl font-bold px-4">"Admin Console"</span>
                    </div>
                    <div class="flex-none px-2">
                        <button
                            class="btn btn-ghost"
                            on:click=move |_| router.navigate("/dashboard")
                        >
                            "Back to dashboard"
                        </button>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"Portal administration"</h2>
                        <p class="text-base-content/70">
                            "Only the admin role can reach this page."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
