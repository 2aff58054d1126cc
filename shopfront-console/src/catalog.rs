//! Catalog store
//!
//! Holds the page of products currently on screen and its pagination
//! metadata. The console reloads it after every successful submission.

use shared::client::ProductListResponse;
use shared::models::Product;
use shared::response::Pagination;

/// Current page of the product catalog.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    pagination: Pagination,
    current_page: u32,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            pagination: Pagination::empty(),
            current_page: 1,
        }
    }

    /// Replace the store with a freshly fetched page.
    pub fn apply(&mut self, response: ProductListResponse) {
        self.current_page = response.pagination.current_page.max(1);
        self.products = response.products;
        self.pagination = response.pagination;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// The page currently viewed; reloads target this page.
    pub fn current_page(&self) -> u32 {
        self.current_page.max(1)
    }

    /// Previous page number, when the server reports one exists.
    pub fn prev_page(&self) -> Option<u32> {
        self.pagination
            .has_pre
            .then(|| self.current_page().saturating_sub(1).max(1))
    }

    /// Next page number, when the server reports one exists.
    pub fn next_page(&self) -> Option<u32> {
        self.pagination.has_next.then(|| self.current_page() + 1)
    }
}
