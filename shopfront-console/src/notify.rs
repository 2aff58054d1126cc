//! User notification seam
//!
//! One-shot user-visible messages: submission confirmations and request
//! failures. Hosts install their own implementation; the default logs
//! through tracing.

/// Prompt shown whenever the session is forcibly ended.
pub const SIGN_IN_AGAIN: &str = "Please sign in again";

/// Sink for one-shot user-visible messages.
pub trait Notify {
    fn notify(&self, message: &str);
}

/// Default notifier: routes messages to the tracing pipeline.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notify for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "shopfront_console::notify", "{message}");
    }
}
