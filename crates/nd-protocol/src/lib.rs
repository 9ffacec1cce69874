//! nd-protocol: Wire types for the Newsdesk API client.
//!
//! This crate defines the request/response data shapes shared by the
//! service modules and the streaming answers decoder.

pub mod account;
pub mod chat;
pub mod models;

pub use account::{
    ApiKey, ContactPoint, ContactPointKind, ContactPointPayload, CreatedApiKey, NewApiKey,
    Organization, OrganizationUpdate, RefreshRequest, Subscription, TokenPair, UsageReport,
};
pub use chat::{ChatPrompt, ChatResponseElement};
pub use models::{
    Article, Company, Folder, FolderPayload, Signal, SignalPayload, SourceInfo, Story, Tab,
    TabPayload, Thread, ThreadRename,
};
