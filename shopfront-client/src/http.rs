//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::AdminApi;
use crate::config::ClientConfig;
use crate::error::{handle_response, ClientResult};
use shared::client::{
    LoginRequest, LoginResponse, MessageResponse, ProductListResponse, UploadResponse,
};
use shared::models::ProductPayload;

/// HTTP client for making network requests to the catalog API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_path: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            api_path: config.api_path.clone(),
            token: None,
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Route under the per-store admin prefix
    fn admin_url(&self, suffix: &str) -> String {
        format!("{}/api/{}/admin/{}", self.base_url, self.api_path, suffix)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, token),
            None => request,
        }
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, url: String) -> ClientResult<T> {
        let response = self.with_auth(self.client.get(&url)).send().await?;
        handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: String,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .with_auth(self.client.post(&url).json(body))
            .send()
            .await?;
        handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: String,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .with_auth(self.client.put(&url).json(body))
            .send()
            .await?;
        handle_response(response).await
    }

    /// Make a DELETE request
    async fn delete<T: DeserializeOwned>(&self, url: String) -> ClientResult<T> {
        let response = self.with_auth(self.client.delete(&url)).send().await?;
        handle_response(response).await
    }
}

#[async_trait]
impl AdminApi for HttpClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let url = format!("{}/admin/signin", self.base_url);
        tracing::debug!(username = %request.username, "Signing in");
        self.post(url, request).await
    }

    async fn check_session(&self) -> ClientResult<()> {
        let url = format!("{}/api/user/check", self.base_url);
        let response = self.with_auth(self.client.post(&url)).send().await?;
        // The check endpoint returns no payload of interest; only the
        // status verdict matters.
        handle_response::<serde_json::Value>(response).await.map(|_| ())
    }

    async fn list_products(&self, page: u32) -> ClientResult<ProductListResponse> {
        let url = format!("{}?page={}", self.admin_url("products"), page);
        self.get(url).await
    }

    async fn create_product(&self, payload: &ProductPayload) -> ClientResult<MessageResponse> {
        let url = self.admin_url("product");
        self.post(url, &payload.clone().into_envelope()).await
    }

    async fn update_product(
        &self,
        id: &str,
        payload: &ProductPayload,
    ) -> ClientResult<MessageResponse> {
        let url = format!("{}/{}", self.admin_url("product"), id);
        self.put(url, &payload.clone().into_envelope()).await
    }

    async fn delete_product(&self, id: &str) -> ClientResult<MessageResponse> {
        let url = format!("{}/{}", self.admin_url("product"), id);
        self.delete(url).await
    }

    async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> ClientResult<UploadResponse> {
        let url = self.admin_url("upload");
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file-to-upload", part);

        let response = self
            .with_auth(self.client.post(&url).multipart(form))
            .send()
            .await?;
        handle_response(response).await
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}
