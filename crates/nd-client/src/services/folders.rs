//! Folder endpoints.

use nd_protocol::{Folder, FolderPayload};

use crate::error::Error;
use crate::http::ApiClient;

pub struct FoldersService {
    api: ApiClient,
}

impl FoldersService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Folder>, Error> {
        self.api.get("folders").await
    }

    pub async fn create(&self, payload: &FolderPayload) -> Result<Folder, Error> {
        self.api.post("folders", payload).await
    }

    pub async fn update(&self, id: &str, payload: &FolderPayload) -> Result<Folder, Error> {
        self.api.put(&format!("folders/{id}"), payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.api.delete(&format!("folders/{id}")).await
    }
}
