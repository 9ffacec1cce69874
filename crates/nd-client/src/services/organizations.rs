//! Organization endpoints.

use nd_protocol::{Organization, OrganizationUpdate};

use crate::error::Error;
use crate::http::ApiClient;

pub struct OrganizationsService {
    api: ApiClient,
}

impl OrganizationsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The organization the authenticated user belongs to.
    pub async fn current(&self) -> Result<Organization, Error> {
        self.api.get("organization").await
    }

    pub async fn update(&self, payload: &OrganizationUpdate) -> Result<Organization, Error> {
        self.api.put("organization", payload).await
    }
}
