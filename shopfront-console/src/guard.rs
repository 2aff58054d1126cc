//! Session-guarded transport
//!
//! Decorator around the [`AdminApi`] that tags every outcome and owns 401
//! detection: an unauthorized response invalidates the session gate before
//! the outcome reaches the component that issued the request. No component
//! duplicates its own 401 handling.

use std::sync::Arc;

use shopfront_client::{AdminApi, ClientError, ClientResult};
use shared::client::{
    LoginRequest, LoginResponse, MessageResponse, ProductListResponse, UploadResponse,
};
use shared::models::ProductPayload;

use crate::session::SessionGate;

/// Tagged result of a guarded request.
#[derive(Debug)]
pub enum ApiOutcome<T> {
    Ok(T),
    /// The server rejected the session; the gate has already been
    /// invalidated by the guard.
    SessionExpired,
    /// Any other transport or server failure.
    Failed(ClientError),
}

impl<T> ApiOutcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}

/// [`AdminApi`] wrapper performing centralized session invalidation.
#[derive(Debug)]
pub struct GuardedApi<A> {
    inner: A,
    gate: Arc<SessionGate>,
}

impl<A: AdminApi> GuardedApi<A> {
    pub fn new(inner: A, gate: Arc<SessionGate>) -> Self {
        Self { inner, gate }
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    fn intercept<T>(&self, result: ClientResult<T>) -> ApiOutcome<T> {
        match result {
            Ok(value) => ApiOutcome::Ok(value),
            Err(error) if error.is_unauthorized() => {
                tracing::warn!("request rejected with 401, invalidating session");
                self.gate.invalidate();
                ApiOutcome::SessionExpired
            }
            Err(error) => ApiOutcome::Failed(error),
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> ApiOutcome<LoginResponse> {
        self.intercept(self.inner.login(request).await)
    }

    /// Ask the server whether the current token is still accepted and sync
    /// the gate with the verdict.
    ///
    /// This call IS the session verdict, so a failure resolves to `false`
    /// rather than going through the forced-teardown path.
    pub async fn check_session(&self) -> bool {
        let ok = self.inner.check_session().await.is_ok();
        self.gate.set_authenticated(ok);
        ok
    }

    pub async fn list_products(&self, page: u32) -> ApiOutcome<ProductListResponse> {
        self.intercept(self.inner.list_products(page).await)
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> ApiOutcome<MessageResponse> {
        self.intercept(self.inner.create_product(payload).await)
    }

    pub async fn update_product(
        &self,
        id: &str,
        payload: &ProductPayload,
    ) -> ApiOutcome<MessageResponse> {
        self.intercept(self.inner.update_product(id, payload).await)
    }

    pub async fn delete_product(&self, id: &str) -> ApiOutcome<MessageResponse> {
        self.intercept(self.inner.delete_product(id).await)
    }

    pub async fn upload_image(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> ApiOutcome<UploadResponse> {
        self.intercept(self.inner.upload_image(filename, bytes).await)
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.inner.set_token(token);
    }
}
