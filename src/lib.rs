//! Recsys Cache - A demo video recommendation service
//!
//! Serves templated recommendation lists, caching each user's list in a
//! bounded store with TTL expiration and LRU eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod recommendation;

pub use api::AppState;
pub use cache::{Clock, SharedCache};
pub use config::{CacheConfig, Config};
pub use recommendation::{RecommendationCache, RecommendationService};

/// Version reported by the API
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
