//! Shopfront Console - product catalog admin core
//!
//! The editing core behind the admin UI: a value-semantic product draft with
//! a bounded image gallery, required-field validation, a submission
//! orchestrator for create/update/delete, dialog lifecycle, and a session
//! gate with centralized 401 handling.
//!
//! Host UIs construct an [`AdminConsole`] over any [`shopfront_client::AdminApi`]
//! implementation, install a [`DialogSurface`] and a [`Notify`] sink, and
//! drive every user-facing operation through the console's methods.

pub mod catalog;
pub mod console;
pub mod dialog;
pub mod draft;
pub mod editor;
pub mod guard;
pub mod notify;
pub mod orchestrator;
pub mod session;
pub mod validator;

pub use catalog::CatalogStore;
pub use console::AdminConsole;
pub use dialog::{DialogMode, DialogSurface};
pub use draft::{Field, FieldEdit, ImageList, ProductDraft, MAX_GALLERY_IMAGES};
pub use editor::ProductEditor;
pub use guard::{ApiOutcome, GuardedApi};
pub use notify::{Notify, TracingNotifier, SIGN_IN_AGAIN};
pub use orchestrator::{SubmissionOrchestrator, SubmitOutcome};
pub use session::SessionGate;
pub use validator::{validate, FieldErrors, REQUIRED_FIELDS};
