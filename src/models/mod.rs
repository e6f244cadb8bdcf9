//! Request and Response models for the recommendation API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod recommendation;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use recommendation::{RecommendationMetadata, VideoRecommendation};
pub use requests::{MoodQuery, PreferencesQuery, RecommendationQuery, MAX_LIMIT};
pub use responses::{
    HealthResponse, MoodsResponse, PlatformsResponse, ServiceInfoResponse, StatsResponse,
    SystemInfoResponse, UserPreferencesResponse,
};
