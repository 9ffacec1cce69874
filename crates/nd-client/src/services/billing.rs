//! Billing endpoints.

use nd_protocol::{Subscription, UsageReport};

use crate::error::Error;
use crate::http::ApiClient;

pub struct BillingService {
    api: ApiClient,
}

impl BillingService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn subscription(&self) -> Result<Subscription, Error> {
        self.api.get("billing/subscription").await
    }

    pub async fn usage(&self) -> Result<UsageReport, Error> {
        self.api.get("billing/usage").await
    }
}
