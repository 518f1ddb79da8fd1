//! Toast notification layer.
//!
//! Fire-and-forget: pages push a message and move on; the `Toaster`
//! component renders the queue top-right and entries dismiss themselves
//! after a few seconds.

use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Notification sink, shared through Context.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|list| list.push(Toast { id, level, message }));

        // Timers only exist in the browser; host tests dismiss explicitly.
        #[cfg(target_arch = "wasm32")]
        {
            let toasts = self.toasts;
            set_timeout(
                move || toasts.update(|list| list.retain(|t| t.id != id)),
                DISMISS_AFTER,
            );
        }
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches the notifier from Context.
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier should be provided")
}

/// Renders the active toasts. Mount once, near the App root.
#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();
    let toasts = notifier.toasts();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.level {
                        ToastLevel::Success => "alert alert-success shadow-lg",
                        ToastLevel::Error => "alert alert-error shadow-lg",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| notifier.dismiss(id)>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_and_error_are_recorded_in_order() {
        let notifier = Notifier::new();
        notifier.success("Signup successful. Please login.");
        notifier.error("Invalid college email");

        let toasts = notifier.toasts().get_untracked();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].level, ToastLevel::Success);
        assert_eq!(toasts[0].message, "Signup successful. Please login.");
        assert_eq!(toasts[1].level, ToastLevel::Error);
    }

    #[test]
    fn dismiss_removes_only_the_target_toast() {
        let notifier = Notifier::new();
        notifier.error("first");
        notifier.error("second");

        let first_id = notifier.toasts().get_untracked()[0].id;
        notifier.dismiss(first_id);

        let toasts = notifier.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "second");
    }

    #[test]
    fn ids_are_unique_across_pushes() {
        let notifier = Notifier::new();
        notifier.success("a");
        notifier.success("b");
        notifier.success("c");

        let toasts = notifier.toasts().get_untracked();
        assert_ne!(toasts[0].id, toasts[1].id);
        assert_ne!(toasts[1].id, toasts[2].id);
    }
}
