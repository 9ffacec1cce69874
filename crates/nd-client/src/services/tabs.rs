//! Workspace tab endpoints.

use nd_protocol::{Tab, TabPayload};

use crate::error::Error;
use crate::http::ApiClient;

pub struct TabsService {
    api: ApiClient,
}

impl TabsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Tab>, Error> {
        self.api.get("tabs").await
    }

    pub async fn create(&self, payload: &TabPayload) -> Result<Tab, Error> {
        self.api.post("tabs", payload).await
    }

    pub async fn update(&self, id: &str, payload: &TabPayload) -> Result<Tab, Error> {
        self.api.put(&format!("tabs/{id}"), payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.api.delete(&format!("tabs/{id}")).await
    }
}
