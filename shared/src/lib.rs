//! Shared types for the Shopfront admin console
//!
//! Common types used across multiple crates: wire-level data models,
//! client request/response DTOs, pagination metadata, and utility types.

pub mod client;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Product, ProductData, ProductPayload};
pub use response::Pagination;
