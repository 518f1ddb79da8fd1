use crate::api::PortalApi;
use crate::components::icons::ShieldCheck;
use crate::notify::use_notifier;
use crate::submit::{Outcome, SubmissionController};
use crate::validate::email::college_email_matches;
use crate::validate::password::{Strength, strength};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portal_shared::{College, SignupRequest};

/// Fail-fast rule chain for the signup form. Returns the first failing
/// rule's message; later rules are not evaluated. `None` means the payload
/// may be built and submitted.
fn first_signup_error(
    college: Option<&College>,
    email: &str,
    password: &str,
) -> Option<&'static str> {
    let Some(college) = college else {
        return Some("Please select college");
    };
    if !college_email_matches(email, &college.domain) {
        return Some("Invalid college email");
    }
    if strength(password).blocks_signup() {
        return Some("Password too weak");
    }
    None
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let notifier = use_notifier();
    let router = use_router();

    let (colleges, set_colleges) = signal(Vec::<College>::new());
    let (college_id, set_college_id) = signal(Option::<u32>::None);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let controller = SubmissionController::new("Signup failed");
    let busy = controller.busy();

    // Load the college directory once on mount.
    Effect::new(move |_| {
        let api = PortalApi::new();
        spawn_local(async move {
            match api.get_colleges().await {
                Ok(list) => set_colleges.set(list),
                Err(e) => notifier.error(e.user_message("Failed to load colleges")),
            }
        });
    });

    let password_strength = Signal::derive(move || password.with(|p| strength(p)));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let selected = college_id.get_untracked().and_then(|id| {
            colleges.with_untracked(|list| list.iter().find(|c| c.id == id).cloned())
        });

        // First failing rule wins; nothing is submitted on failure.
        if let Some(message) = first_signup_error(
            selected.as_ref(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            notifier.error(message);
            return;
        }

        let api = PortalApi::new();
        let req = SignupRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            college_id: selected.map(|c| c.id).unwrap_or_default(),
        };

        controller.submit(
            async move { api.signup(&req).await },
            move |outcome| match outcome {
                Outcome::Succeeded(()) => {
                    notifier.success("Signup successful. Please login.");
                    router.navigate("/login");
                }
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
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Sign Up"</h1>
                        <p class="text-base-content/70">"Create your college account"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="college">
                                <span class="label-text">"College"</span>
                            </label>
                            <select
                                id="college"
                                class="select select-bordered"
                                on:change=move |ev| {
                                    set_college_id.set(event_target_value(&ev).parse::<u32>().ok())
                                }
                            >
                                <option value="" selected disabled>
                                    "Select your college"
                                </option>
                                <For
                                    each=move || colleges.get()
                                    key=|college| college.id
                                    children=move |college| {
                                        view! {
                                            <option value=college.id.to_string()>{college.name}</option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"Full name"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                placeholder="Full name"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"College email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="Enter college email"
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
                                placeholder="Create password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                            <Show when=move || password_strength.get() != Strength::Empty>
                                <progress
                                    class=move || {
                                        format!("progress {} mt-2", password_strength.get().meter_class())
                                    }
                                    value=move || password_strength.get().percent().to_string()
                                    max="100"
                                ></progress>
                            </Show>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || busy.get()>
                                {move || if busy.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                } else {
                                    "Create account".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "Already registered? "
                            <a
                                class="link link-primary"
                                href="/login"
                                on:click=move |ev: leptos::web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    router.navigate("/login");
                                }
                            >
                                "Log in"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college() -> College {
        College {
            id: 1,
            name: "Test College".to_string(),
            domain: "college.edu".to_string(),
        }
    }

    #[test]
    fn missing_college_is_reported_first() {
        // Email and password are also bad, but only the first rule fires.
        assert_eq!(
            first_signup_error(None, "wrong@other.edu", "weak"),
            Some("Please select college")
        );
    }

    #[test]
    fn domain_mismatch_is_reported_before_weak_password() {
        let c = college();
        assert_eq!(
            first_signup_error(Some(&c), "student@other.edu", "weak"),
            Some("Invalid college email")
        );
    }

    #[test]
    fn weak_password_is_reported_last() {
        let c = college();
        assert_eq!(
            first_signup_error(Some(&c), "student@college.edu", "weak"),
            Some("Password too weak")
        );
    }

    #[test]
    fn empty_password_blocks_like_weak() {
        let c = college();
        assert_eq!(
            first_signup_error(Some(&c), "student@college.edu", ""),
            Some("Password too weak")
        );
    }

    #[test]
    fn good_tier_passes_the_chain() {
        let c = college();
        // Good (three criteria), not Strong - good must not block.
        assert_eq!(
            first_signup_error(Some(&c), "student@college.edu", "Abcdefg1"),
            None
        );
    }

    #[test]
    fn case_mismatched_domain_still_passes() {
        let c = college();
        assert_eq!(
            first_signup_error(Some(&c), "student@COLLEGE.EDU", "Abcdefg1!"),
            None
        );
    }
}
