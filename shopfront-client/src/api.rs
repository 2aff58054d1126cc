//! Admin API contract
//!
//! The console core drives every network operation through this trait, so
//! tests can substitute a scripted implementation for the real [`HttpClient`].

use async_trait::async_trait;

use crate::error::ClientResult;
use shared::client::{
    LoginRequest, LoginResponse, MessageResponse, ProductListResponse, UploadResponse,
};
use shared::models::ProductPayload;

/// Operations the admin console performs against the catalog backend.
///
/// Every call may fail with a transport error or an authentication error
/// (`ClientError::Unauthorized`); callers decide how each is surfaced.
#[async_trait]
pub trait AdminApi {
    /// Exchange credentials for a token.
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;

    /// Verify that the current token is still accepted.
    ///
    /// Failure means "not authenticated", not a fatal error; callers map it
    /// to a boolean verdict.
    async fn check_session(&self) -> ClientResult<()>;

    /// Fetch one page of the product catalog.
    async fn list_products(&self, page: u32) -> ClientResult<ProductListResponse>;

    /// Create a product; identity is assigned by the server.
    async fn create_product(&self, payload: &ProductPayload) -> ClientResult<MessageResponse>;

    /// Update an existing product, addressed by identity.
    async fn update_product(
        &self,
        id: &str,
        payload: &ProductPayload,
    ) -> ClientResult<MessageResponse>;

    /// Delete a product, addressed by identity.
    async fn delete_product(&self, id: &str) -> ClientResult<MessageResponse>;

    /// Upload an image file; returns the hosted URL.
    async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> ClientResult<UploadResponse>;

    /// Install or clear the authentication token used by subsequent calls.
    fn set_token(&mut self, token: Option<String>);
}
