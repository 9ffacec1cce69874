//! Contact point (notification destination) endpoints.

use nd_protocol::{ContactPoint, ContactPointPayload};

use crate::error::Error;
use crate::http::ApiClient;

pub struct ContactPointsService {
    api: ApiClient,
}

impl ContactPointsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<ContactPoint>, Error> {
        self.api.get("contact-points").await
    }

    pub async fn create(&self, payload: &ContactPointPayload) -> Result<ContactPoint, Error> {
        self.api.post("contact-points", payload).await
    }

    pub async fn update(
        &self,
        id: &str,
        payload: &ContactPointPayload,
    ) -> Result<ContactPoint, Error> {
        self.api.put(&format!("contact-points/{id}"), payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.api.delete(&format!("contact-points/{id}")).await
    }
}
