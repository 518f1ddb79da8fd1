//! Async submission controller shared by the login and signup forms.
//!
//! One controller per form instance. It owns the busy flag, runs exactly
//! one remote call per accepted submission and hands back exactly one
//! terminal outcome. No retry, no queueing, no cancellation: a submission
//! accepted while idle always settles as succeeded or failed, and a
//! submission attempted while busy is silently dropped.

use crate::api::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Terminal result of one accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Succeeded(T),
    /// Human-readable message, ready for the notification sink.
    Failed(String),
}

/// Busy-flag guarded submission boundary.
///
/// `Copy` via its signal, so it moves freely into event handlers.
#[derive(Clone, Copy)]
pub struct SubmissionController {
    busy: RwSignal<bool>,
    /// Message used when the remote side failed without a usable error body.
    fallback: &'static str,
}

impl SubmissionController {
    pub fn new(fallback: &'static str) -> Self {
        Self {
            busy: RwSignal::new(false),
            fallback,
        }
    }

    /// Busy signal for the submit button.
    pub fn busy(&self) -> Signal<bool> {
        self.busy.into()
    }

    /// Claims the in-flight slot. False means a call is already running
    /// and the attempt must be dropped.
    fn try_begin(&self) -> bool {
        if self.busy.get_untracked() {
            return false;
        }
        self.busy.set(true);
        true
    }

    fn finish(&self) {
        self.busy.set(false);
    }

    /// Awaits the remote call and folds its result into an [`Outcome`].
    async fn settle<T, Fut>(fut: Fut, fallback: &str) -> Outcome<T>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        match fut.await {
            Ok(value) => Outcome::Succeeded(value),
            Err(e) => Outcome::Failed(e.user_message(fallback)),
        }
    }

    /// Runs one submission. The busy flag is claimed synchronously, before
    /// the task is spawned, so a second call in the same tick is already
    /// excluded. `on_outcome` fires exactly once per accepted submission,
    /// after the flag is back to idle, so the caller may resubmit from
    /// inside the handler.
    pub fn submit<T, Fut>(&self, fut: Fut, on_outcome: impl FnOnce(Outcome<T>) + 'static)
    where
        T: 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        if !self.try_begin() {
            return;
        }

        let this = *self;
        spawn_local(async move {
            let outcome = Self::settle(fut, this.fallback).await;
            this.finish();
            on_outcome(outcome);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn second_begin_while_busy_is_refused() {
        let ctl = SubmissionController::new("failed");
        assert!(ctl.try_begin());
        assert!(ctl.busy().get_untracked());

        // In-flight: a repeated attempt must not claim the slot.
        assert!(!ctl.try_begin());

        ctl.finish();
        assert!(!ctl.busy().get_untracked());
        assert!(ctl.try_begin());
    }

    #[test]
    fn settle_maps_success() {
        let outcome = block_on(SubmissionController::settle(
            async { Ok::<_, ApiError>(42u32) },
            "failed",
        ));
        assert_eq!(outcome, Outcome::Succeeded(42));
    }

    #[test]
    fn settle_surfaces_the_structured_error_message() {
        let outcome = block_on(SubmissionController::settle(
            async { Err::<(), _>(ApiError::Rejected("Invalid credentials".to_string())) },
            "Something went wrong",
        ));
        assert_eq!(outcome, Outcome::Failed("Invalid credentials".to_string()));
    }

    #[test]
    fn settle_falls_back_on_transport_failures() {
        let outcome = block_on(SubmissionController::settle(
            async { Err::<(), _>(ApiError::Transport("status 502".to_string())) },
            "Invalid credentials",
        ));
        assert_eq!(outcome, Outcome::Failed("Invalid credentials".to_string()));
    }
}
