//! Product draft state
//!
//! The single in-flight editable copy of a product. Every mutation returns a
//! new value; references to a previous draft never observe partial updates.
//! Prices stay in text form until submission, where [`ProductDraft::to_payload`]
//! coerces them for the wire.

use rust_decimal::Decimal;
use shared::models::{Product, ProductPayload};

use crate::validator::FieldErrors;

/// Upper bound on the secondary-image gallery.
pub const MAX_GALLERY_IMAGES: usize = 5;

/// Editable product attributes, keyed for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Title,
    Category,
    Unit,
    OriginPrice,
    Price,
    Description,
    Content,
    IsEnabled,
    ImageUrl,
}

impl Field {
    /// Wire/form name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::Unit => "unit",
            Self::OriginPrice => "origin_price",
            Self::Price => "price",
            Self::Description => "description",
            Self::Content => "content",
            Self::IsEnabled => "is_enabled",
            Self::ImageUrl => "imageUrl",
        }
    }

    /// Human-readable label used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Category => "Category",
            Self::Unit => "Unit",
            Self::OriginPrice => "Original price",
            Self::Price => "Selling price",
            Self::Description => "Description",
            Self::Content => "Content",
            Self::IsEnabled => "Enabled",
            Self::ImageUrl => "Main image",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scalar edit applied to the draft.
///
/// Text-backed fields carry their raw input; the enabled flag carries a bool.
#[derive(Debug, Clone)]
pub enum FieldEdit {
    Title(String),
    Category(String),
    Unit(String),
    OriginPrice(String),
    Price(String),
    Description(String),
    Content(String),
    IsEnabled(bool),
    ImageUrl(String),
}

impl FieldEdit {
    /// The field this edit targets; used to clear its validation error.
    pub fn field(&self) -> Field {
        match self {
            Self::Title(_) => Field::Title,
            Self::Category(_) => Field::Category,
            Self::Unit(_) => Field::Unit,
            Self::OriginPrice(_) => Field::OriginPrice,
            Self::Price(_) => Field::Price,
            Self::Description(_) => Field::Description,
            Self::Content(_) => Field::Content,
            Self::IsEnabled(_) => Field::IsEnabled,
            Self::ImageUrl(_) => Field::ImageUrl,
        }
    }
}

/// Secondary-image list with the bounded placeholder shape:
/// at most one trailing empty slot, never more than
/// [`MAX_GALLERY_IMAGES`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageList(Vec<String>);

impl ImageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from persisted URLs; anything past the gallery bound is dropped.
    pub fn from_urls(mut urls: Vec<String>) -> Self {
        urls.truncate(MAX_GALLERY_IMAGES);
        Self(urls)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace the URL at `index`, then re-normalize the tail:
    /// filling the last slot grows the list by one placeholder (up to the
    /// bound), emptying a slot collapses a doubled trailing placeholder.
    /// Interior slots emptied by the user are left in place.
    pub fn with_slot_set(&self, index: usize, value: impl Into<String>) -> Self {
        let value: String = value.into();
        let mut urls = self.0.clone();
        let Some(slot) = urls.get_mut(index) else {
            return self.clone();
        };
        *slot = value.clone();

        let edited_last = index == urls.len() - 1;
        if !value.is_empty() && edited_last && urls.len() < MAX_GALLERY_IMAGES {
            urls.push(String::new());
        }

        if value.is_empty()
            && urls.len() > 1
            && urls.last().is_some_and(|url| url.is_empty())
        {
            urls.pop();
        }

        Self(urls)
    }

    /// User-invoked resize: append one empty slot, bounded.
    pub fn with_slot_appended(&self) -> Self {
        if self.0.len() >= MAX_GALLERY_IMAGES {
            return self.clone();
        }
        let mut urls = self.0.clone();
        urls.push(String::new());
        Self(urls)
    }

    /// User-invoked resize: drop the last slot; no-op on an empty list.
    pub fn with_last_removed(&self) -> Self {
        let mut urls = self.0.clone();
        urls.pop();
        Self(urls)
    }

    /// URLs that actually get transmitted: every empty slot is dropped.
    pub fn non_empty_urls(&self) -> Vec<String> {
        self.0.iter().filter(|url| !url.is_empty()).cloned().collect()
    }

    /// Shape rule: bounded length and no doubled trailing placeholder.
    pub fn invariant_holds(&self) -> bool {
        if self.0.len() > MAX_GALLERY_IMAGES {
            return false;
        }
        match self.0.as_slice() {
            [.., prev, last] => !(prev.is_empty() && last.is_empty()),
            _ => true,
        }
    }
}

/// The in-memory editable representation of one product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    /// Server identity; `None` until the product is created.
    pub id: Option<String>,
    pub title: String,
    pub category: String,
    /// Kept as entered; coerced to a number at submission time.
    pub origin_price: String,
    pub price: String,
    pub unit: String,
    pub description: String,
    pub content: String,
    pub is_enabled: bool,
    pub image_url: String,
    pub images: ImageList,
}

impl ProductDraft {
    /// The all-empty template.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fresh working copy of `seed`, merged over the empty template.
    ///
    /// Serde defaults on [`Product`] guarantee every known field is present
    /// even when the seed is a partial legacy record.
    pub fn from_seed(seed: &Product) -> Self {
        Self {
            id: seed.id.clone().filter(|id| !id.is_empty()),
            title: seed.title.clone(),
            category: seed.category.clone(),
            origin_price: seed.origin_price.to_string(),
            price: seed.price.to_string(),
            unit: seed.unit.clone(),
            description: seed.description.clone(),
            content: seed.content.clone(),
            is_enabled: seed.is_enabled != 0,
            image_url: seed.image_url.clone(),
            images: ImageList::from_urls(seed.images_url.clone()),
        }
    }

    /// Apply one scalar edit, returning the new draft.
    pub fn apply(&self, edit: FieldEdit) -> Self {
        let mut draft = self.clone();
        match edit {
            FieldEdit::Title(v) => draft.title = v,
            FieldEdit::Category(v) => draft.category = v,
            FieldEdit::Unit(v) => draft.unit = v,
            FieldEdit::OriginPrice(v) => draft.origin_price = v,
            FieldEdit::Price(v) => draft.price = v,
            FieldEdit::Description(v) => draft.description = v,
            FieldEdit::Content(v) => draft.content = v,
            FieldEdit::IsEnabled(v) => draft.is_enabled = v,
            FieldEdit::ImageUrl(v) => draft.image_url = v,
        }
        draft
    }

    /// Text form of a field, for emptiness checks. `None` for the flag field.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => Some(&self.title),
            Field::Category => Some(&self.category),
            Field::Unit => Some(&self.unit),
            Field::OriginPrice => Some(&self.origin_price),
            Field::Price => Some(&self.price),
            Field::Description => Some(&self.description),
            Field::Content => Some(&self.content),
            Field::ImageUrl => Some(&self.image_url),
            Field::IsEnabled => None,
        }
    }

    /// Replace the gallery URL at `index` and re-normalize the list.
    pub fn with_image_at(&self, index: usize, value: impl Into<String>) -> Self {
        let mut draft = self.clone();
        draft.images = self.images.with_slot_set(index, value);
        draft
    }

    /// Append an empty gallery slot (explicit user resize).
    pub fn with_image_slot_appended(&self) -> Self {
        let mut draft = self.clone();
        draft.images = self.images.with_slot_appended();
        draft
    }

    /// Drop the last gallery slot (explicit user resize).
    pub fn with_last_image_slot_removed(&self) -> Self {
        let mut draft = self.clone();
        draft.images = self.images.with_last_removed();
        draft
    }

    /// Build the wire payload: prices coerced to numbers, the enabled flag
    /// to 0/1, and empty gallery slots dropped.
    ///
    /// A price that does not parse is reported as a field error; nothing is
    /// ever silently coerced to zero.
    pub fn to_payload(&self) -> Result<ProductPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let origin_price = parse_price(&self.origin_price, Field::OriginPrice, &mut errors);
        let price = parse_price(&self.price, Field::Price, &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductPayload {
            title: self.title.clone(),
            category: self.category.clone(),
            origin_price,
            price,
            unit: self.unit.clone(),
            description: self.description.clone(),
            content: self.content.clone(),
            is_enabled: if self.is_enabled { 1 } else { 0 },
            image_url: self.image_url.clone(),
            images_url: self.images.non_empty_urls(),
        })
    }
}

fn parse_price(text: &str, field: Field, errors: &mut FieldErrors) -> Decimal {
    match text.trim().parse::<Decimal>() {
        Ok(value) => value,
        Err(_) => {
            errors.insert(field, format!("{} must be a number", field.label()));
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(urls: &[&str]) -> ImageList {
        ImageList::from_urls(urls.iter().map(|u| u.to_string()).collect())
    }

    #[test]
    fn test_filling_last_slot_grows_list() {
        let images = list(&["a.png", ""]).with_slot_set(1, "b.png");
        assert_eq!(images.as_slice(), ["a.png", "b.png", ""]);
    }

    #[test]
    fn test_emptying_slot_collapses_trailing_placeholder() {
        let images = list(&["a.png", "b.png", ""]).with_slot_set(1, "");
        assert_eq!(images.as_slice(), ["a.png", ""]);
    }

    #[test]
    fn test_no_growth_at_capacity() {
        let images = list(&["a", "b", "c", "d", ""]).with_slot_set(4, "e");
        assert_eq!(images.as_slice(), ["a", "b", "c", "d", "e"]);
        assert!(images.invariant_holds());
    }

    #[test]
    fn test_interior_empty_is_left_for_the_user() {
        let images = list(&["a.png", "b.png", "c.png", ""]).with_slot_set(0, "");
        // The trailing placeholder collapses once, the interior hole stays.
        assert_eq!(images.as_slice(), ["", "b.png", "c.png"]);
    }

    #[test]
    fn test_emptying_sole_slot_keeps_it() {
        let images = list(&[""]).with_slot_set(0, "");
        assert_eq!(images.as_slice(), [""]);
    }

    #[test]
    fn test_out_of_range_edit_is_ignored() {
        let images = list(&["a.png"]);
        assert_eq!(images.with_slot_set(5, "x").as_slice(), ["a.png"]);
    }

    #[test]
    fn test_invariant_holds_across_edit_sequences() {
        let mut images = ImageList::new().with_slot_appended();
        let edits: [(usize, &str); 9] = [
            (0, "a"),
            (1, "b"),
            (2, "c"),
            (3, "d"),
            (4, "e"),
            (4, ""),
            (3, ""),
            (0, "f"),
            (2, "g"),
        ];
        for (index, value) in edits {
            images = images.with_slot_set(index, value);
            assert!(images.invariant_holds(), "violated at {:?}", images);
        }
    }

    #[test]
    fn test_explicit_resize() {
        let images = list(&["a.png"]).with_slot_appended();
        assert_eq!(images.as_slice(), ["a.png", ""]);

        let full = list(&["a", "b", "c", "d", "e"]);
        assert_eq!(full.with_slot_appended().len(), 5);

        assert!(ImageList::new().with_last_removed().is_empty());
        assert_eq!(images.with_last_removed().as_slice(), ["a.png"]);
    }

    #[test]
    fn test_seed_roundtrip() {
        let seed = Product {
            id: Some("-N1".into()),
            title: "Oolong".into(),
            category: "tea".into(),
            origin_price: Decimal::new(120, 0),
            price: Decimal::new(100, 0),
            unit: "box".into(),
            description: "roasted".into(),
            content: String::new(),
            is_enabled: 1,
            image_url: "main.png".into(),
            images_url: vec!["a.png".into()],
        };

        let draft = ProductDraft::from_seed(&seed);
        assert_eq!(draft.id.as_deref(), Some("-N1"));
        assert_eq!(draft.title, "Oolong");
        assert_eq!(draft.origin_price, "120");
        assert_eq!(draft.price, "100");
        assert!(draft.is_enabled);
        assert_eq!(draft.images.as_slice(), ["a.png"]);
        // Fields absent from a partial legacy record fall back to template
        // defaults via serde; `content` stays the template's empty string.
        assert_eq!(draft.content, "");
    }

    #[test]
    fn test_apply_is_value_semantic() {
        let before = ProductDraft::empty();
        let after = before.apply(FieldEdit::Title("New".into()));
        assert_eq!(before.title, "");
        assert_eq!(after.title, "New");
    }

    #[test]
    fn test_payload_coercion() {
        let draft = ProductDraft {
            title: "Oolong".into(),
            category: "tea".into(),
            origin_price: "120".into(),
            price: "0".into(),
            unit: "box".into(),
            is_enabled: true,
            image_url: "main.png".into(),
            images: list(&["a.png", "", "b.png", ""]),
            ..ProductDraft::empty()
        };

        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.origin_price, Decimal::new(120, 0));
        assert_eq!(payload.price, Decimal::ZERO);
        assert_eq!(payload.is_enabled, 1);
        assert_eq!(payload.images_url, vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_unparseable_price_is_a_field_error() {
        let draft = ProductDraft {
            origin_price: "abc".into(),
            price: "100".into(),
            ..ProductDraft::empty()
        };

        let errors = draft.to_payload().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&Field::OriginPrice));
    }
}
