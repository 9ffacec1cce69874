//! Session token endpoints.

use nd_protocol::{RefreshRequest, TokenPair};

use crate::error::Error;
use crate::http::ApiClient;

pub struct TokensService {
    api: ApiClient,
}

impl TokensService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange a refresh token for a fresh pair.
    pub async fn refresh(&self, refresh_token: impl Into<String>) -> Result<TokenPair, Error> {
        let payload = RefreshRequest {
            refresh_token: refresh_token.into(),
        };
        self.api.post("tokens/refresh", &payload).await
    }

    /// Invalidate a refresh token.
    pub async fn revoke(&self, refresh_token: impl Into<String>) -> Result<(), Error> {
        let payload = RefreshRequest {
            refresh_token: refresh_token.into(),
        };
        self.api.post_no_content("tokens/revoke", &payload).await
    }
}
