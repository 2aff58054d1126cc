//! API Response types
//!
//! Pagination metadata as the catalog endpoint reports it.

use serde::{Deserialize, Serialize};

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of pages
    pub total_pages: u32,
    /// Current page number (1-based)
    pub current_page: u32,
    /// Whether a previous page exists
    pub has_pre: bool,
    /// Whether a next page exists
    pub has_next: bool,
    /// Category filter the page was queried with, if any
    #[serde(default)]
    pub category: Option<String>,
}

impl Pagination {
    /// A single empty page; used before the first catalog load.
    pub fn empty() -> Self {
        Self {
            total_pages: 0,
            current_page: 1,
            has_pre: false,
            has_next: false,
            category: None,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_deserializes_wire_shape() {
        let json = r#"{
            "total_pages": 3,
            "current_page": 2,
            "has_pre": true,
            "has_next": true,
            "category": ""
        }"#;

        let p: Pagination = serde_json::from_str(json).unwrap();
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.current_page, 2);
        assert!(p.has_pre);
        assert!(p.has_next);
    }

    #[test]
    fn test_empty_page() {
        let p = Pagination::empty();
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_pre);
        assert!(!p.has_next);
    }
}
