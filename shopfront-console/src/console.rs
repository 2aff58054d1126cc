//! Admin console
//!
//! Top-level controller owning the session gate, the guarded transport, the
//! catalog store, and the product editor. Host UIs call into it for every
//! user-facing operation and subscribe to the gate for auth transitions.

use std::sync::Arc;

use shopfront_client::AdminApi;
use shared::client::LoginRequest;
use shared::models::Product;
use shared::util::now_millis;
use tokio::sync::watch;

use crate::catalog::CatalogStore;
use crate::dialog::{DialogMode, DialogSurface};
use crate::draft::FieldEdit;
use crate::editor::ProductEditor;
use crate::guard::{ApiOutcome, GuardedApi};
use crate::notify::{Notify, SIGN_IN_AGAIN};
use crate::orchestrator::{SubmissionOrchestrator, SubmitOutcome};
use crate::session::SessionGate;

/// The admin console core: one instance per signed-in operator.
#[derive(Debug)]
pub struct AdminConsole<A, S, N> {
    gate: Arc<SessionGate>,
    api: GuardedApi<A>,
    catalog: CatalogStore,
    editor: ProductEditor<S>,
    orchestrator: SubmissionOrchestrator,
    notifier: N,
    /// Token expiry reported at login, epoch milliseconds.
    token_expires_at: Option<i64>,
}

impl<A, S, N> AdminConsole<A, S, N>
where
    A: AdminApi + Sync,
    S: DialogSurface,
    N: Notify,
{
    pub fn new(api: A, notifier: N) -> Self {
        let gate = Arc::new(SessionGate::new());
        Self {
            api: GuardedApi::new(api, gate.clone()),
            gate,
            catalog: CatalogStore::new(),
            editor: ProductEditor::new(),
            orchestrator: SubmissionOrchestrator::new(),
            notifier,
            token_expires_at: None,
        }
    }

    /// Install the host UI's dialog handle.
    pub fn install_surface(&mut self, surface: S) {
        self.editor.install_surface(surface);
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated()
    }

    /// Subscribe to authentication changes (route guards, login screens).
    pub fn session_changes(&self) -> watch::Receiver<bool> {
        self.gate.subscribe()
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn editor(&self) -> &ProductEditor<S> {
        &self.editor
    }

    /// Whether the login-time expiry has passed. Diagnostic only; the
    /// server's verdict through the guard is authoritative.
    pub fn is_token_expired(&self) -> bool {
        self.token_expires_at
            .is_some_and(|expires_at| expires_at <= now_millis())
    }

    // ========== Session ==========

    /// Exchange credentials for a session.
    ///
    /// The login response alone is not trusted: the token is installed
    /// provisionally and confirmed with a session check before the gate
    /// opens. On confirmation the first catalog page is loaded.
    pub async fn sign_in(&mut self, username: &str, password: &str) -> bool {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        match self.api.login(&request).await {
            ApiOutcome::Ok(login) => {
                self.api.set_token(Some(login.token));
                self.token_expires_at = Some(login.expired);

                if self.api.check_session().await {
                    tracing::info!(username = %username, "signed in");
                    self.load_products(1).await;
                    true
                } else {
                    self.notifier
                        .notify("Login could not be verified, please try again");
                    self.sign_out();
                    false
                }
            }
            ApiOutcome::SessionExpired => {
                self.teardown_editing();
                false
            }
            ApiOutcome::Failed(error) => {
                self.notifier
                    .notify(&format!("Login failed: {}", error.message()));
                false
            }
        }
    }

    /// Drop the session: clear the token, close the gate, and discard any
    /// open dialog together with its draft.
    pub fn sign_out(&mut self) {
        self.api.set_token(None);
        self.token_expires_at = None;
        self.gate.invalidate();
        self.editor.close();
        tracing::debug!("signed out");
    }

    /// Confirm a restored token on startup; loads the catalog when valid.
    pub async fn ensure_session(&mut self) -> bool {
        if self.api.check_session().await {
            self.load_products(1).await;
            true
        } else {
            false
        }
    }

    /// Tear down editing state after the guard invalidated the session.
    fn teardown_editing(&mut self) {
        self.token_expires_at = None;
        self.editor.close();
        self.notifier.notify(SIGN_IN_AGAIN);
    }

    // ========== Catalog ==========

    /// Fetch one catalog page into the store.
    pub async fn load_products(&mut self, page: u32) -> bool {
        match self.api.list_products(page).await {
            ApiOutcome::Ok(response) => {
                self.catalog.apply(response);
                true
            }
            ApiOutcome::SessionExpired => {
                self.teardown_editing();
                false
            }
            ApiOutcome::Failed(error) => {
                tracing::warn!(error = %error, page, "failed to load products");
                false
            }
        }
    }

    /// Navigate to the previous page, if the server reports one.
    pub async fn prev_page(&mut self) -> bool {
        match self.catalog.prev_page() {
            Some(page) => self.load_products(page).await,
            None => false,
        }
    }

    /// Navigate to the next page, if the server reports one.
    pub async fn next_page(&mut self) -> bool {
        match self.catalog.next_page() {
            Some(page) => self.load_products(page).await,
            None => false,
        }
    }

    // ========== Dialog ==========

    /// Open the dialog on an empty draft for a new product.
    pub fn open_create(&mut self) {
        self.editor.open(DialogMode::Create, None);
    }

    /// Open the dialog on a copy of `product` for editing.
    pub fn open_edit(&mut self, product: &Product) {
        self.editor.open(DialogMode::Edit, Some(product));
    }

    /// Open the delete confirmation for `product`.
    pub fn open_delete(&mut self, product: &Product) {
        self.editor.open(DialogMode::Delete, Some(product));
    }

    /// Close the dialog, discarding the draft.
    pub fn close_dialog(&mut self) {
        self.editor.close();
    }

    // ========== Draft edits ==========

    /// Apply a scalar field edit; clears that field's error immediately.
    pub fn edit_field(&mut self, edit: FieldEdit) {
        self.editor.apply_edit(edit);
    }

    /// Edit the gallery URL at `index`.
    pub fn edit_image_at(&mut self, index: usize, value: impl Into<String>) {
        self.editor.edit_image_at(index, value);
    }

    /// Append an empty gallery slot.
    pub fn add_image_slot(&mut self) {
        self.editor.add_image_slot();
    }

    /// Drop the last gallery slot.
    pub fn remove_image_slot(&mut self) {
        self.editor.remove_image_slot();
    }

    /// Upload a primary-image file and point the draft at the hosted URL.
    pub async fn upload_primary_image(&mut self, filename: &str, bytes: Vec<u8>) -> bool {
        if !self.editor.is_open() {
            return false;
        }

        match self.api.upload_image(filename, bytes).await {
            ApiOutcome::Ok(upload) => {
                // The dialog may have been torn down while the upload was in
                // flight; the URL has nowhere to land then.
                if self.editor.is_open() {
                    self.editor.apply_edit(FieldEdit::ImageUrl(upload.image_url));
                    true
                } else {
                    tracing::debug!("dialog closed mid-upload, dropping image URL");
                    false
                }
            }
            ApiOutcome::SessionExpired => {
                self.teardown_editing();
                false
            }
            ApiOutcome::Failed(error) => {
                self.notifier
                    .notify(&format!("Image upload failed: {}", error.message()));
                false
            }
        }
    }

    // ========== Submission ==========

    /// Submit whatever the dialog currently holds.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let outcome = self
            .orchestrator
            .submit(&mut self.editor, &self.api, &mut self.catalog, &self.notifier)
            .await;

        if outcome == SubmitOutcome::SessionExpired {
            self.token_expires_at = None;
        }
        outcome
    }
}
