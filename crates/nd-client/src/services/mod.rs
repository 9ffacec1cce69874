//! Thin, focused service modules: typed parameters in, decoded JSON out.
//!
//! Each service is an explicit constructor over a shared
//! [`ApiClient`](crate::http::ApiClient) and does request plumbing only.
//! Error handling, caching, and orchestration belong to the callers.

pub mod api_keys;
pub mod articles;
pub mod billing;
pub mod companies;
pub mod contact_points;
pub mod folders;
pub mod organizations;
pub mod signals;
pub mod sources;
pub mod stories;
pub mod tabs;
pub mod threads;
pub mod tokens;

pub use api_keys::ApiKeysService;
pub use articles::ArticlesService;
pub use billing::BillingService;
pub use companies::CompaniesService;
pub use contact_points::ContactPointsService;
pub use folders::FoldersService;
pub use organizations::OrganizationsService;
pub use signals::SignalsService;
pub use sources::SourcesService;
pub use stories::StoriesService;
pub use tabs::TabsService;
pub use threads::ThreadsService;
pub use tokens::TokensService;
