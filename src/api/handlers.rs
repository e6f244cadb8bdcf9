//! API Handlers
//!
//! HTTP request handlers for each recommendation service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::config::Config;
use crate::error::{ApiError, ConfigError, Result};
use crate::models::{
    HealthResponse, MoodQuery, MoodsResponse, PlatformsResponse, PreferencesQuery,
    RecommendationQuery, ServiceInfoResponse, StatsResponse, SystemInfoResponse,
    UserPreferencesResponse, VideoRecommendation,
};
use crate::recommendation::{Platform, RecommendationService};

/// Application state shared across all handlers.
///
/// The service owns the cache, which serializes its own access, so the
/// state needs no outer lock.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecommendationService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: RecommendationService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the cache capacity is zero or the default limit is out of range.
    pub fn from_config(config: &Config) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let service =
            RecommendationService::from_cache_config(config.cache_config()?, config.default_limit);
        Ok(Self::new(service))
    }
}

/// Handler for GET /
pub async fn root_handler() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse::new())
}

/// Handler for GET /recommendations/
///
/// Serves per-user recommendations through the cache.
pub async fn recommendations_handler(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<Vec<VideoRecommendation>>> {
    if let Some(error_msg) = query.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    // Both are positive after validation
    let user_id = query.user_id as u64;
    let limit = query.limit.map(|limit| limit as usize);

    let recommendations =
        state
            .service
            .recommend_for_user(user_id, limit, query.mood.as_deref());

    Ok(Json(recommendations))
}

/// Handler for GET /recommendations/mood/
pub async fn mood_recommendations_handler(
    State(state): State<AppState>,
    Query(query): Query<MoodQuery>,
) -> Result<Json<Vec<VideoRecommendation>>> {
    if let Some(error_msg) = query.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let limit = query
        .limit
        .map_or(state.service.default_limit(), |limit| limit as usize);

    Ok(Json(state.service.recommend_for_mood(&query.mood, limit)))
}

/// Handler for GET /moods
pub async fn moods_handler(State(state): State<AppState>) -> Json<MoodsResponse> {
    Json(state.service.supported_moods())
}

/// Handler for GET /platforms
pub async fn platforms_handler(State(state): State<AppState>) -> Json<PlatformsResponse> {
    Json(state.service.platform_info())
}

/// Handler for GET /user/preferences
///
/// Returns 404 for a username with no profile.
pub async fn user_preferences_handler(
    State(state): State<AppState>,
    Query(query): Query<PreferencesQuery>,
) -> Result<Json<UserPreferencesResponse>> {
    state
        .service
        .user_preferences(&query.username)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("User not found: {}", query.username)))
}

/// Handler for GET /system/info
pub async fn system_info_handler() -> Json<SystemInfoResponse> {
    Json(SystemInfoResponse::new(&Platform::YOUTUBE))
}

/// Handler for GET /cache/stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.service.cache();
    let stats = cache.stats();

    Json(StatsResponse::new(
        &stats,
        cache.max_size(),
        cache.ttl().as_secs(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
