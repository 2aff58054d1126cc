//! Client-related types shared between the transport and the console
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::response::Pagination;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token expiry, epoch milliseconds
    pub expired: i64,
}

// =============================================================================
// Catalog API DTOs
// =============================================================================

/// One page of the product catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

/// Confirmation body returned by create/update/delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Upload response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
