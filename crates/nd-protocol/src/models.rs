//! Domain data shapes returned by the content services.
//!
//! These are plain serde DTOs with no behavior attached; orchestration and
//! caching belong to the callers. Wire form is camelCase throughout.

use serde::{Deserialize, Serialize};

/// A research conversation thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub uuid: String,
    pub title: String,
    pub created_at: String,
    #[serde(default)]
    pub last_activity_at: Option<String>,
}

/// Rename payload for a thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadRename {
    pub title: String,
}

/// A news article surfaced as supporting evidence for an answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub headline: String,
    pub url: String,
    pub source_key: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub sentiment: Option<f64>,
}

/// A saved monitoring query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: String,
    pub name: String,
    pub query: String,
    pub enabled: bool,
    pub created_at: String,
}

/// Create/update payload for a signal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignalPayload {
    pub name: String,
    pub query: String,
    pub enabled: bool,
}

/// A clustered set of articles covering one development.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub headline: String,
    pub summary: String,
    #[serde(default)]
    pub signal_id: Option<String>,
    #[serde(default)]
    pub article_ids: Vec<String>,
    pub updated_at: String,
}

/// A tracked company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
}

/// A content source (publisher feed) available to the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub country: Option<String>,
}

/// A folder grouping saved tabs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Create/update payload for a folder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FolderPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// A saved workspace tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub position: u32,
    #[serde(default)]
    pub folder_id: Option<String>,
}

/// Create/update payload for a tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TabPayload {
    pub title: String,
    pub position: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}
