//! Shopfront Client - HTTP transport for the catalog admin API
//!
//! Provides the [`AdminApi`] contract consumed by the console core and its
//! network implementation, [`HttpClient`].

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::AdminApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{
    LoginRequest, LoginResponse, MessageResponse, ProductListResponse, UploadResponse,
};
