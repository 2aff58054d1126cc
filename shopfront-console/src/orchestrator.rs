//! Submission orchestrator
//!
//! Sequences one submission attempt: validate, build the wire payload,
//! dispatch the request implied by the dialog mode, then handle the outcome
//! (notify, reload the catalog, close the dialog). Exactly one submission
//! may be in flight per dialog instance.

use shopfront_client::AdminApi;
use shared::models::ProductPayload;

use crate::dialog::{DialogMode, DialogSurface};
use crate::draft::ProductDraft;
use crate::editor::ProductEditor;
use crate::guard::{ApiOutcome, GuardedApi};
use crate::catalog::CatalogStore;
use crate::notify::{Notify, SIGN_IN_AGAIN};
use crate::validator::validate;

/// Result of one `submit()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; field errors were populated, nothing dispatched.
    Rejected,
    /// Request confirmed; catalog reloaded and dialog closed.
    Succeeded,
    /// Request failed; the user was notified and the dialog stays open.
    Failed,
    /// The server rejected the session mid-submission; the dialog was torn
    /// down and the draft discarded.
    SessionExpired,
    /// A submission was already in flight; this one was ignored.
    AlreadyInFlight,
    /// No dialog open (or nothing addressable); nothing to submit.
    NothingOpen,
    /// The dialog was torn down while the request was in flight; the
    /// response was dropped.
    Stale,
}

/// The request a submission resolves to.
#[derive(Debug)]
enum Dispatch {
    Create(ProductPayload),
    Update { id: String, payload: ProductPayload },
    Delete { id: String },
}

/// Per-dialog submission latch and sequencing.
#[derive(Debug, Default)]
pub struct SubmissionOrchestrator {
    in_flight: bool,
}

impl SubmissionOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Run one submission attempt for whatever the dialog currently holds.
    pub async fn submit<A, S, N>(
        &mut self,
        editor: &mut ProductEditor<S>,
        api: &GuardedApi<A>,
        catalog: &mut CatalogStore,
        notifier: &N,
    ) -> SubmitOutcome
    where
        A: AdminApi + Sync,
        S: DialogSurface,
        N: Notify,
    {
        if !editor.is_open() {
            return SubmitOutcome::NothingOpen;
        }
        if self.in_flight {
            tracing::warn!("submission already in flight, ignoring");
            return SubmitOutcome::AlreadyInFlight;
        }

        let dispatch = match plan_submission(editor.dialog_mode(), editor.draft()) {
            Plan::Dispatch(dispatch) => dispatch,
            Plan::Rejected(errors) => {
                editor.set_errors(errors);
                return SubmitOutcome::Rejected;
            }
            Plan::Nothing => return SubmitOutcome::NothingOpen,
        };
        let title = editor.draft().title.clone();

        self.in_flight = true;
        let result = match &dispatch {
            Dispatch::Create(payload) => api.create_product(payload).await,
            Dispatch::Update { id, payload } => api.update_product(id, payload).await,
            Dispatch::Delete { id } => api.delete_product(id).await,
        };
        self.in_flight = false;

        // The session may have been invalidated by a concurrent request
        // while this one was in flight; a torn-down dialog means the
        // response has nowhere to land.
        if !editor.is_open() {
            tracing::debug!("dialog closed mid-flight, dropping submission response");
            return SubmitOutcome::Stale;
        }

        match result {
            ApiOutcome::Ok(confirmation) => {
                notifier.notify(&format!("{}, {}", confirmation.message, title));
                editor.close();
                self.reload_catalog(api, catalog, notifier).await;
                SubmitOutcome::Succeeded
            }
            ApiOutcome::SessionExpired => {
                editor.close();
                notifier.notify(SIGN_IN_AGAIN);
                SubmitOutcome::SessionExpired
            }
            ApiOutcome::Failed(error) => {
                let action = match &dispatch {
                    Dispatch::Delete { .. } => "Delete",
                    _ => "Save",
                };
                notifier.notify(&format!("{} failed: {}", action, error.message()));
                SubmitOutcome::Failed
            }
        }
    }

    async fn reload_catalog<A, N>(
        &self,
        api: &GuardedApi<A>,
        catalog: &mut CatalogStore,
        notifier: &N,
    ) where
        A: AdminApi + Sync,
        N: Notify,
    {
        let page = catalog.current_page();
        match api.list_products(page).await {
            ApiOutcome::Ok(response) => catalog.apply(response),
            ApiOutcome::SessionExpired => notifier.notify(SIGN_IN_AGAIN),
            ApiOutcome::Failed(error) => {
                tracing::warn!(error = %error, page, "catalog reload failed");
            }
        }
    }
}

/// What one submission attempt should do.
enum Plan {
    Dispatch(Dispatch),
    Rejected(crate::validator::FieldErrors),
    Nothing,
}

/// Resolve the dialog mode and draft into a request.
///
/// Create/edit validate first and never dispatch with errors present.
/// Create-semantics apply when the draft has no identity; otherwise the
/// request is addressed by the existing identity. Delete needs only the
/// identity.
fn plan_submission(mode: DialogMode, draft: &ProductDraft) -> Plan {
    match mode {
        DialogMode::Closed => Plan::Nothing,
        DialogMode::Delete => match draft.id.clone() {
            Some(id) => Plan::Dispatch(Dispatch::Delete { id }),
            None => {
                tracing::warn!("delete requested for a draft without identity");
                Plan::Nothing
            }
        },
        DialogMode::Create | DialogMode::Edit => {
            let errors = validate(draft);
            if !errors.is_empty() {
                return Plan::Rejected(errors);
            }
            let payload = match draft.to_payload() {
                Ok(payload) => payload,
                Err(errors) => return Plan::Rejected(errors),
            };
            match draft.id.clone() {
                Some(id) => Plan::Dispatch(Dispatch::Update { id, payload }),
                None => Plan::Dispatch(Dispatch::Create(payload)),
            }
        }
    }
}
