//! Company lookup endpoints.

use nd_protocol::Company;

use crate::error::Error;
use crate::http::ApiClient;

pub struct CompaniesService {
    api: ApiClient,
}

impl CompaniesService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Company>, Error> {
        self.api
            .get_with_query("companies", &[("query", query)])
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Company, Error> {
        self.api.get(&format!("companies/{id}")).await
    }
}
