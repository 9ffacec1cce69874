//! Thread management endpoints.

use nd_protocol::{Thread, ThreadRename};

use crate::error::Error;
use crate::http::ApiClient;

/// Conversation threads. Threads are created implicitly by the answers
/// service; this service lists and maintains them.
pub struct ThreadsService {
    api: ApiClient,
}

impl ThreadsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Thread>, Error> {
        self.api.get("threads").await
    }

    pub async fn get(&self, uuid: &str) -> Result<Thread, Error> {
        self.api.get(&format!("threads/{uuid}")).await
    }

    pub async fn rename(&self, uuid: &str, title: impl Into<String>) -> Result<Thread, Error> {
        let payload = ThreadRename {
            title: title.into(),
        };
        self.api.put(&format!("threads/{uuid}"), &payload).await
    }

    pub async fn delete(&self, uuid: &str) -> Result<(), Error> {
        self.api.delete(&format!("threads/{uuid}")).await
    }
}
