//! HTTP client for the catalog server API

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use shared::{ApiEnvelope, CatalogItem, ItemCreate, ItemUpdate, Provider, ProviderCreate};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for catalog and provider calls
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Decode the `{success, message, data}` envelope, mapping failures
    /// to the client error taxonomy by status code.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        if envelope.success {
            return envelope.data.ok_or_else(|| {
                ClientError::InvalidResponse("Missing data in successful response".to_string())
            });
        }

        tracing::warn!(status = %status, message = %envelope.message, "Request failed");
        Err(match status {
            StatusCode::BAD_REQUEST => ClientError::Validation(envelope.message),
            StatusCode::NOT_FOUND => ClientError::NotFound(envelope.message),
            _ => ClientError::Server(envelope.message),
        })
    }

    /// Build a multipart form with a `data` JSON field and `images` files.
    fn multipart_form(
        payload_json: String,
        images: Vec<(String, Vec<u8>)>,
    ) -> reqwest::multipart::Form {
        let mut form =
            reqwest::multipart::Form::new().text("data", payload_json);
        for (filename, bytes) in images {
            let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
            form = form.part("images", part);
        }
        form
    }

    // ── Items ───────────────────────────────────────────────────────

    /// Create an item, uploading image files alongside the payload.
    pub async fn create_item(
        &self,
        payload: &ItemCreate,
        images: Vec<(String, Vec<u8>)>,
    ) -> ClientResult<CatalogItem> {
        let response = if images.is_empty() {
            self.client
                .post(self.url("api/items"))
                .json(payload)
                .send()
                .await?
        } else {
            let form = Self::multipart_form(serde_json::to_string(payload)?, images);
            self.client
                .post(self.url("api/items"))
                .multipart(form)
                .send()
                .await?
        };
        Self::handle_response(response).await
    }

    /// List the union of both storage locations for one provider.
    pub async fn list_items(&self, provider_id: &str) -> ClientResult<Vec<CatalogItem>> {
        let response = self
            .client
            .get(self.url("api/items"))
            .query(&[("provider_id", provider_id)])
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn get_item(&self, id: &str) -> ClientResult<CatalogItem> {
        let response = self
            .client
            .get(self.url(&format!("api/items/{id}")))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Partially update an item; new image files are appended server-side.
    pub async fn update_item(
        &self,
        id: &str,
        payload: &ItemUpdate,
        images: Vec<(String, Vec<u8>)>,
    ) -> ClientResult<CatalogItem> {
        let url = self.url(&format!("api/items/{id}"));
        let response = if images.is_empty() {
            self.client.put(url).json(payload).send().await?
        } else {
            let form = Self::multipart_form(serde_json::to_string(payload)?, images);
            self.client.put(url).multipart(form).send().await?
        };
        Self::handle_response(response).await
    }

    pub async fn delete_item(&self, id: &str) -> ClientResult<bool> {
        let response = self
            .client
            .delete(self.url(&format!("api/items/{id}")))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    // ── Providers ───────────────────────────────────────────────────

    pub async fn create_provider(&self, payload: &ProviderCreate) -> ClientResult<Provider> {
        let response = self
            .client
            .post(self.url("api/providers"))
            .json(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn get_provider(&self, id: &str) -> ClientResult<Provider> {
        let response = self
            .client
            .get(self.url(&format!("api/providers/{id}")))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn list_providers(&self) -> ClientResult<Vec<Provider>> {
        let response = self
            .client
            .get(self.url("api/providers"))
            .send()
            .await?;
        Self::handle_response(response).await
    }
}
