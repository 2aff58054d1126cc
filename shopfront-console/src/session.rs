//! Session gate
//!
//! Owns the process-wide authentication flag. The flag lives in a watch
//! channel so any component can subscribe to invalidation instead of keeping
//! its own ad hoc boolean; the gate is the single source of truth.

use tokio::sync::watch;

/// Holder of the authenticated/unauthenticated verdict.
#[derive(Debug)]
pub struct SessionGate {
    authenticated: watch::Sender<bool>,
}

impl SessionGate {
    pub fn new() -> Self {
        let (authenticated, _) = watch::channel(false);
        Self { authenticated }
    }

    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.borrow()
    }

    /// Record a confirmed session verdict.
    pub fn set_authenticated(&self, value: bool) {
        self.authenticated.send_replace(value);
    }

    /// Force the session unauthenticated, waking every subscriber.
    pub fn invalidate(&self) {
        if self.authenticated.send_replace(false) {
            tracing::info!("session invalidated");
        }
    }

    /// Subscribe to authentication changes.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.authenticated.subscribe()
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}
