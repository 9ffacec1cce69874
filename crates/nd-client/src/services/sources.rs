//! Content source endpoints.

use nd_protocol::SourceInfo;

use crate::error::Error;
use crate::http::ApiClient;

pub struct SourcesService {
    api: ApiClient,
}

impl SourcesService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<SourceInfo>, Error> {
        self.api.get("sources").await
    }

    pub async fn get(&self, key: &str) -> Result<SourceInfo, Error> {
        self.api.get(&format!("sources/{key}")).await
    }
}
