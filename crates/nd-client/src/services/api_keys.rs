//! API key management endpoints.

use nd_protocol::{ApiKey, CreatedApiKey, NewApiKey};

use crate::error::Error;
use crate::http::ApiClient;

pub struct ApiKeysService {
    api: ApiClient,
}

impl ApiKeysService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<ApiKey>, Error> {
        self.api.get("api-keys").await
    }

    /// Issue a new key. The secret is only present in this response.
    pub async fn create(&self, label: impl Into<String>) -> Result<CreatedApiKey, Error> {
        let payload = NewApiKey {
            label: label.into(),
        };
        self.api.post("api-keys", &payload).await
    }

    pub async fn revoke(&self, id: &str) -> Result<(), Error> {
        self.api.delete(&format!("api-keys/{id}")).await
    }
}
