//! Article lookup and search endpoints.

use nd_protocol::Article;

use crate::error::Error;
use crate::http::ApiClient;

pub struct ArticlesService {
    api: ApiClient,
}

impl ArticlesService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get(&self, id: &str) -> Result<Article, Error> {
        self.api.get(&format!("articles/{id}")).await
    }

    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<Article>, Error> {
        self.api
            .get_with_query(
                "articles",
                &[("query", query.to_string()), ("limit", limit.to_string())],
            )
            .await
    }
}
