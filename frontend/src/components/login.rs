use crate::api::PortalApi;
use crate::auth::{establish, use_auth};
use crate::components::icons::GraduationCap;
use crate::notify::use_notifier;
use crate::submit::{Outcome, SubmissionController};
use crate::web::router::use_router;
use leptos::prelude::*;
use portal_shared::LoginRequest;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    // One controller per form; its busy flag backs the button guard.
    let controller = SubmissionController::new("Invalid credentials");
    let busy = controller.busy();

    // Login imposes no strength or domain rule, only non-empty fields.
    let can_submit = Signal::derive(move || {
        !email.with(|e| e.is_empty()) && !password.with(|p| p.is_empty())
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if !can_submit.get_untracked() {
            return;
        }

        let api = PortalApi::new();
        let req = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        controller.submit(
            // Success sets the session cookie; the profile fetch then tells
            // us who we are. A failing profile fetch fails the login.
            async move {
                api.login(&req).await?;
                api.get_profile().await
            },
            move |outcome| match outcome {
                Outcome::Succeeded(profile) => {
                    notifier.success("Login successful");
                    establish(&auth, &profile);
                    router.navigate("/dashboard");
                }
                // Fields stay as typed so the user can correct and retry.
                Outcome::Failed(message) => notifier.error(message),
            },
        );
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <GraduationCap attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Welcome back"</h1>
                        <p class="text-base-content/70">"Login to your college portal"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"College email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@college.edu"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                            class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button
                                class="btn btn-primary"
                                disabled=move || busy.get() || !can_submit.get()
                            >
                                {move || if busy.get() {
                                    view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                                } else {
                                    "Log in".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "No account yet? "
                            <a
                                class="link link-primary"
                                href="/signup"
                                on:click=move |ev: leptos::web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    router.navigate("/signup");
                                }
                            >
                                "Sign up"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
