//! Response DTOs for the recommendation API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cache::CacheStats;
use crate::recommendation::{all_moods, MoodCategory, Platform, UserProfile};
use crate::API_VERSION;

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Response body for the root endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub version: String,
    pub status: String,
    pub timestamp: String,
    /// Endpoint name to path
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl ServiceInfoResponse {
    pub fn new() -> Self {
        let endpoints = BTreeMap::from([
            ("recommendations", "/recommendations/"),
            ("mood_based", "/recommendations/mood/"),
            ("moods", "/moods"),
            ("platform_info", "/platforms"),
            ("system_info", "/system/info"),
            ("cache_stats", "/cache/stats"),
            ("user_preferences", "/user/preferences"),
            ("health", "/health"),
        ]);
        Self {
            message: "Welcome to the Video Recommendation Engine API".to_string(),
            version: API_VERSION.to_string(),
            status: "running".to_string(),
            timestamp: now_rfc3339(),
            endpoints,
        }
    }
}

impl Default for ServiceInfoResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the system info endpoint (GET /system/info)
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfoResponse {
    pub api_version: String,
    pub system_status: String,
    pub recommendation_service: String,
    pub current_time: String,
    pub supported_mood_categories: Vec<MoodCategory>,
    pub supported_platforms: Vec<&'static str>,
}

impl SystemInfoResponse {
    pub fn new(platform: &Platform) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            system_status: "operational".to_string(),
            recommendation_service: "active".to_string(),
            current_time: now_rfc3339(),
            supported_mood_categories: MoodCategory::ALL.to_vec(),
            supported_platforms: vec![platform.name],
        }
    }
}

/// Response body for the moods endpoint (GET /moods)
#[derive(Debug, Clone, Serialize)]
pub struct MoodsResponse {
    pub timestamp: String,
    pub supported_mood_categories: Vec<MoodCategory>,
    pub all_supported_moods: Vec<&'static str>,
    /// Category name to its mood words
    pub mood_categories: BTreeMap<&'static str, &'static [&'static str]>,
    pub total_moods: usize,
}

impl MoodsResponse {
    pub fn new() -> Self {
        let all_supported_moods = all_moods();
        Self {
            timestamp: now_rfc3339(),
            supported_mood_categories: MoodCategory::ALL.to_vec(),
            total_moods: all_supported_moods.len(),
            all_supported_moods,
            mood_categories: MoodCategory::ALL
                .into_iter()
                .map(|category| (category.as_str(), category.words()))
                .collect(),
        }
    }
}

impl Default for MoodsResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the platforms endpoint (GET /platforms)
#[derive(Debug, Clone, Serialize)]
pub struct PlatformsResponse {
    pub timestamp: String,
    pub platforms: Vec<Platform>,
}

impl PlatformsResponse {
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self {
            timestamp: now_rfc3339(),
            platforms,
        }
    }
}

/// Response body for the user preferences endpoint (GET /user/preferences)
#[derive(Debug, Clone, Serialize)]
pub struct UserPreferencesResponse {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub timestamp: String,
}

impl UserPreferencesResponse {
    pub fn new(profile: &UserProfile) -> Self {
        Self {
            profile: profile.clone(),
            timestamp: now_rfc3339(),
        }
    }
}

/// Response body for the cache stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses, expired reads included
    pub misses: u64,
    /// Number of reads that found a stale entry
    pub expirations: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured capacity
    pub max_size: usize,
    /// Configured TTL in seconds
    pub ttl_seconds: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, max_size: usize, ttl_seconds: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            max_size,
            ttl_seconds,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: now_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            expirations: 5,
            evictions: 3,
            total_entries: 100,
        };
        let resp = StatsResponse::new(&stats, 1000, 3600);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.expirations, 5);
        assert_eq!(resp.max_size, 1000);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::new(&CacheStats::default(), 10, 60);
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_moods_response_shape() {
        let resp = MoodsResponse::new();
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["total_moods"], 38);
        assert_eq!(json["supported_mood_categories"][0], "positive");
        assert_eq!(json["mood_categories"]["mental"][0], "confused");
    }

    #[test]
    fn test_service_info_lists_endpoints() {
        let resp = ServiceInfoResponse::new();
        assert_eq!(resp.version, API_VERSION);
        assert_eq!(resp.endpoints["health"], "/health");
        assert_eq!(resp.endpoints["user_preferences"], "/user/preferences");
        assert_eq!(resp.endpoints.len(), 8);
    }

    #[test]
    fn test_platforms_response_serialize() {
        let resp = PlatformsResponse::new(vec![Platform::YOUTUBE]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["platforms"][0]["name"], "youtube");
    }

    #[test]
    fn test_user_preferences_response_is_flat() {
        let profile = crate::recommendation::find_profile(crate::recommendation::DEMO_USERNAME)
            .unwrap();
        let json = serde_json::to_value(UserPreferencesResponse::new(profile)).unwrap();

        assert_eq!(json["username"], "demo_user");
        assert_eq!(json["preferences"]["preferred_moods"][0], "motivated");
        assert_eq!(json["engagement_metrics"]["completion_rate"], 0.87);
        assert!(json.get("profile").is_none());
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
