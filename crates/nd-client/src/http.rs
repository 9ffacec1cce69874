//! Shared HTTP wrapper for the Newsdesk REST API.
//!
//! Owns the reqwest client, base URL, and credential. Every service goes
//! through these helpers; none of them retries, caches, or interprets a
//! payload beyond JSON decoding. Non-success statuses surface as
//! [`Error::Api`] with the response body attached.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::Error;

/// Production endpoint. The trailing slash matters for path joining.
pub const DEFAULT_BASE_URL: &str = "https://api.newsdesk.io/v1/";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build an HTTP client with appropriate connection limits.
/// No overall request timeout: streaming chat responses can outlive any
/// fixed deadline.
fn build_http_client(connect_timeout: Duration) -> Client {
    Client::builder()
        .connect_timeout(connect_timeout)
        .pool_max_idle_per_host(2)
        .build()
        .expect("failed to build HTTP client")
}

/// Cheaply cloneable handle to the API; all services share one.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl ApiClient {
    /// Client for the production endpoint with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        Self {
            http: build_http_client(DEFAULT_CONNECT_TIMEOUT),
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Client for a custom endpoint (staging, self-hosted, tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url).map_err(|e| Error::Url(e.to_string()))?;
        Ok(Self {
            http: build_http_client(DEFAULT_CONNECT_TIMEOUT),
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Client from loaded configuration, resolving the API key.
    pub fn from_config(config: &ApiConfig) -> Result<Self, Error> {
        let api_key = config.resolve_api_key()?;
        let base_url = Url::parse(&config.base_url).map_err(|e| Error::Url(e.to_string()))?;
        Ok(Self {
            http: build_http_client(Duration::from_secs(config.connect_timeout_secs)),
            base_url,
            api_key,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Url(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// POST where the server responds with no meaningful body.
    pub async fn post_no_content<B>(&self, path: &str, body: &B) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "PUT");
        let response = self
            .http
            .put(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "DELETE");
        let response = self
            .http
            .delete(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// POST and hand back the raw response for streaming consumption.
    /// The status check has already happened when this returns Ok.
    pub async fn post_streaming<B>(&self, path: &str, body: &B) -> Result<Response, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "POST (streaming)");
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;
        check_status(response).await
    }
}

/// Map a non-success response to [`Error::Api`] carrying status and body.
async fn check_status(response: Response) -> Result<Response, Error> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn endpoint_joins_relative_paths() {
        let client = ApiClient::new("test-key");
        let url = client.endpoint("threads").unwrap();
        assert_eq!(url.as_str(), "https://api.newsdesk.io/v1/threads");

        let url = client.endpoint("threads/abc-123").unwrap();
        assert_eq!(url.as_str(), "https://api.newsdesk.io/v1/threads/abc-123");
    }

    #[test]
    fn custom_base_url_keeps_its_prefix() {
        let client = ApiClient::with_base_url("k", "https://staging.newsdesk.io/v2/").unwrap();
        let url = client.endpoint("billing/usage").unwrap();
        assert_eq!(url.as_str(), "https://staging.newsdesk.io/v2/billing/usage");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            ApiClient::with_base_url("k", "not a url"),
            Err(Error::Url(_))
        ));
    }

    #[tokio::test]
    async fn check_status_passes_success_through() {
        let response = http::Response::builder()
            .status(200)
            .body("ok")
            .unwrap();
        assert!(check_status(reqwest::Response::from(response)).await.is_ok());
    }

    #[tokio::test]
    async fn check_status_surfaces_status_and_body() {
        let response = http::Response::builder()
            .status(404)
            .body("thread not found")
            .unwrap();
        let err = check_status(reqwest::Response::from(response))
            .await
            .unwrap_err();
        match err {
            Error::Api { status, body } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, "thread not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn new_client_does_not_panic() {
        let _client = ApiClient::new("test-key");
    }
}
