//! Signal (saved monitoring query) endpoints.

use nd_protocol::{Signal, SignalPayload};

use crate::error::Error;
use crate::http::ApiClient;

pub struct SignalsService {
    api: ApiClient,
}

impl SignalsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Signal>, Error> {
        self.api.get("signals").await
    }

    pub async fn get(&self, id: &str) -> Result<Signal, Error> {
        self.api.get(&format!("signals/{id}")).await
    }

    pub async fn create(&self, payload: &SignalPayload) -> Result<Signal, Error> {
        self.api.post("signals", payload).await
    }

    pub async fn update(&self, id: &str, payload: &SignalPayload) -> Result<Signal, Error> {
        self.api.put(&format!("signals/{id}"), payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.api.delete(&format!("signals/{id}")).await
    }
}
