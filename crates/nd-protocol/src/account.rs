//! Account, organization, and billing data shapes.

use serde::{Deserialize, Serialize};

/// The organization the authenticated user belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub plan: String,
    #[serde(default)]
    pub seats: Option<u32>,
}

/// Update payload for the current organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganizationUpdate {
    pub name: String,
}

/// Where notifications for a signal get delivered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactPointKind {
    Email,
    Webhook,
}

/// A registered notification destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    pub id: String,
    pub kind: ContactPointKind,
    pub address: String,
    pub verified: bool,
}

/// Create/update payload for a contact point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactPointPayload {
    pub kind: ContactPointKind,
    pub address: String,
}

/// An issued API key. The secret itself is only present at creation time,
/// in [`CreatedApiKey`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    pub label: String,
    pub prefix: String,
    pub created_at: String,
    #[serde(default)]
    pub last_used_at: Option<String>,
}

/// Creation payload for an API key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewApiKey {
    pub label: String,
}

/// Creation response: the key metadata plus the one-time secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedApiKey {
    #[serde(flatten)]
    pub key: ApiKey,
    pub secret: String,
}

/// An access/refresh token pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
}

/// Refresh/revoke request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// The organization's current subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub plan: String,
    pub status: String,
    #[serde(default)]
    pub renews_at: Option<String>,
    pub seats: u32,
}

/// Metered usage for the current billing period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    pub period: String,
    pub queries_used: u64,
    pub queries_limit: u64,
}
