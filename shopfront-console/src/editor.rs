//! Product editor
//!
//! Bundles the draft, its field errors, and the dialog controller. The draft
//! exists only while a dialog is open; closing the dialog, in any way,
//! discards it.

use shared::models::Product;

use crate::dialog::{DialogController, DialogMode, DialogSurface};
use crate::draft::{FieldEdit, ProductDraft};
use crate::validator::FieldErrors;

/// Editing state behind the shared product dialog.
#[derive(Debug, Default)]
pub struct ProductEditor<S> {
    draft: ProductDraft,
    errors: FieldErrors,
    dialog: DialogController<S>,
}

impl<S: DialogSurface> ProductEditor<S> {
    pub fn new() -> Self {
        Self {
            draft: ProductDraft::empty(),
            errors: FieldErrors::new(),
            dialog: DialogController::new(),
        }
    }

    pub fn install_surface(&mut self, surface: S) {
        self.dialog.install_surface(surface);
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn dialog_mode(&self) -> DialogMode {
        self.dialog.mode()
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    /// Seed the draft and enter `mode`. No seed means the empty template.
    pub fn open(&mut self, mode: DialogMode, seed: Option<&Product>) {
        self.draft = match seed {
            Some(product) => ProductDraft::from_seed(product),
            None => ProductDraft::empty(),
        };
        self.errors.clear();
        self.dialog.open(mode);
        tracing::debug!(mode = ?mode, "product dialog opened");
    }

    /// Close the dialog and discard the draft and its errors.
    pub fn close(&mut self) {
        self.dialog.close();
        self.draft = ProductDraft::empty();
        self.errors.clear();
    }

    /// Apply a scalar edit; the edited field's error is cleared immediately,
    /// regardless of the new value.
    pub fn apply_edit(&mut self, edit: FieldEdit) {
        let field = edit.field();
        self.draft = self.draft.apply(edit);
        self.errors.remove(&field);
    }

    /// Replace the gallery URL at `index`, re-normalizing the list.
    pub fn edit_image_at(&mut self, index: usize, value: impl Into<String>) {
        self.draft = self.draft.with_image_at(index, value);
    }

    /// Append an empty gallery slot.
    pub fn add_image_slot(&mut self) {
        self.draft = self.draft.with_image_slot_appended();
    }

    /// Drop the last gallery slot.
    pub fn remove_image_slot(&mut self) {
        self.draft = self.draft.with_last_image_slot_removed();
    }

    /// Replace the visible error state wholesale (submission rejection).
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }
}
