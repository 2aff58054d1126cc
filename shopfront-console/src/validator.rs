//! Required-field validation
//!
//! A pure mapping from a draft to field-level errors. The orchestrator runs
//! it on submission; the editor clears a field's entry the moment that field
//! is edited. Nothing here performs I/O or touches shared state.

use std::collections::BTreeMap;

use crate::draft::{Field, ProductDraft};

/// Field-level validation errors, ordered for deterministic display.
pub type FieldErrors = BTreeMap<Field, String>;

/// Fields that must be non-empty before a draft may be submitted.
pub const REQUIRED_FIELDS: [Field; 6] = [
    Field::Title,
    Field::Category,
    Field::Unit,
    Field::OriginPrice,
    Field::Price,
    Field::ImageUrl,
];

/// Check every required field for emptiness.
///
/// The check is emptiness, not falsiness: a price of `"0"` passes.
pub fn validate(draft: &ProductDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in REQUIRED_FIELDS {
        let empty = draft.text(field).is_none_or(|value| value.is_empty());
        if empty {
            errors.insert(field, format!("{} is required", field.label()));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ProductDraft {
        ProductDraft {
            title: "Oolong".into(),
            category: "tea".into(),
            unit: "box".into(),
            origin_price: "120".into(),
            price: "100".into(),
            image_url: "main.png".into(),
            ..ProductDraft::empty()
        }
    }

    #[test]
    fn test_empty_draft_fails_every_required_field() {
        let errors = validate(&ProductDraft::empty());
        assert_eq!(errors.len(), REQUIRED_FIELDS.len());
        for field in REQUIRED_FIELDS {
            assert_eq!(errors[&field], format!("{} is required", field.label()));
        }
    }

    #[test]
    fn test_filled_draft_passes() {
        assert!(validate(&filled_draft()).is_empty());
    }

    #[test]
    fn test_zero_price_is_valid() {
        let mut draft = filled_draft();
        draft.origin_price = "0".into();
        draft.price = "0".into();
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_optional_fields_are_not_checked() {
        let draft = filled_draft();
        assert!(draft.description.is_empty());
        assert!(draft.content.is_empty());
        assert!(validate(&draft).is_empty());
    }
}
