//! Story (clustered coverage) endpoints.

use nd_protocol::Story;

use crate::error::Error;
use crate::http::ApiClient;

pub struct StoriesService {
    api: ApiClient,
}

impl StoriesService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List stories, optionally restricted to one signal.
    pub async fn list(&self, signal_id: Option<&str>) -> Result<Vec<Story>, Error> {
        match signal_id {
            Some(signal_id) => {
                self.api
                    .get_with_query("stories", &[("signalId", signal_id)])
                    .await
            }
            None => self.api.get("stories").await,
        }
    }

    pub async fn get(&self, id: &str) -> Result<Story, Error> {
        self.api.get(&format!("stories/{id}")).await
    }
}
