//! Recommendation Service
//!
//! Consults the per-user cache before generating, and stores what it
//! generates.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{Clock, SystemClock};
use crate::config::{CacheConfig, DEFAULT_LIMIT};
use crate::models::{
    MoodsResponse, PlatformsResponse, UserPreferencesResponse, VideoRecommendation,
};
use crate::recommendation::{
    find_profile, RecommendationCache, RecommendationGenerator, RecommendationList, UserId,
};

// == Recommendation Service ==
/// Serves recommendation lists, caching the per-user ones.
#[derive(Debug)]
pub struct RecommendationService<C = SystemClock> {
    cache: Arc<RecommendationCache<C>>,
    generator: RecommendationGenerator,
    default_limit: usize,
}

impl RecommendationService<SystemClock> {
    /// Creates a service with its own cache driven by the system clock.
    pub fn from_cache_config(config: CacheConfig, default_limit: usize) -> Self {
        Self::new(Arc::new(RecommendationCache::new(config)), default_limit)
    }
}

impl Default for RecommendationService<SystemClock> {
    fn default() -> Self {
        Self::from_cache_config(CacheConfig::default(), DEFAULT_LIMIT)
    }
}

impl<C: Clock> RecommendationService<C> {
    pub fn new(cache: Arc<RecommendationCache<C>>, default_limit: usize) -> Self {
        Self {
            cache,
            generator: RecommendationGenerator::default(),
            default_limit,
        }
    }

    /// The cache this service reads and writes.
    pub fn cache(&self) -> &Arc<RecommendationCache<C>> {
        &self.cache
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    // == Per-User Recommendations ==
    /// Recommendations for a user.
    ///
    /// With a mood the list is generated fresh and not cached. Without one
    /// the cached list is served when it is fresh and long enough;
    /// otherwise a new list of `limit` entries is generated and cached.
    pub fn recommend_for_user(
        &self,
        user_id: UserId,
        limit: Option<usize>,
        mood: Option<&str>,
    ) -> Vec<VideoRecommendation> {
        let limit = limit.unwrap_or(self.default_limit);

        if let Some(mood) = mood {
            debug!(user_id, mood, "Mood given, bypassing user cache");
            return self.recommend_for_mood(mood, limit);
        }

        if let Some(cached) = self.cache.get_recommendations(user_id) {
            if cached.len() >= limit {
                debug!(user_id, limit, "Serving cached recommendations");
                return cached.iter().take(limit).cloned().collect();
            }
            debug!(
                user_id,
                cached = cached.len(),
                limit,
                "Cached list too short, regenerating"
            );
        }

        let generated: RecommendationList = Arc::new(self.generator.generate_for_user(
            &mut rand::thread_rng(),
            user_id,
            limit,
            chrono::Utc::now(),
        ));
        self.cache
            .store_recommendations(user_id, Arc::clone(&generated));
        info!(user_id, limit, "Generated and cached recommendations");

        generated.as_ref().clone()
    }

    // == Mood Recommendations ==
    /// Recommendations for a mood word, always freshly generated.
    pub fn recommend_for_mood(&self, mood: &str, limit: usize) -> Vec<VideoRecommendation> {
        self.generator
            .generate(&mut rand::thread_rng(), mood, limit, chrono::Utc::now())
    }

    /// Supported mood categories and words.
    pub fn supported_moods(&self) -> MoodsResponse {
        MoodsResponse::new()
    }

    /// Platforms the generator links to.
    pub fn platform_info(&self) -> PlatformsResponse {
        PlatformsResponse::new(vec![*self.generator.platform()])
    }

    /// Stored preferences for `username`, if the user is known.
    pub fn user_preferences(&self, username: &str) -> Option<UserPreferencesResponse> {
        find_profile(username).map(UserPreferencesResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    fn service_with_clock(
        max_size: usize,
        ttl: u64,
    ) -> (RecommendationService<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let cache = RecommendationCache::with_clock(
            CacheConfig::new(max_size, ttl).unwrap(),
            clock.clone(),
        );
        (RecommendationService::new(Arc::new(cache), 10), clock)
    }

    #[test]
    fn test_miss_generates_and_caches() {
        let (service, _clock) = service_with_clock(10, 3600);

        let recs = service.recommend_for_user(1, Some(5), None);

        assert_eq!(recs.len(), 5);
        assert!(service.cache().contains(&1));
        assert_eq!(service.cache().stats().misses, 1);
    }

    #[test]
    fn test_hit_returns_cached_list() {
        let (service, _clock) = service_with_clock(10, 3600);

        let first = service.recommend_for_user(1, Some(5), None);
        let second = service.recommend_for_user(1, Some(5), None);

        assert_eq!(first, second);
        assert_eq!(service.cache().stats().hits, 1);
    }

    #[test]
    fn test_hit_truncates_to_limit() {
        let (service, _clock) = service_with_clock(10, 3600);

        let full = service.recommend_for_user(1, Some(8), None);
        let short = service.recommend_for_user(1, Some(3), None);

        assert_eq!(short.as_slice(), &full[..3]);
    }

    #[test]
    fn test_short_cached_list_is_regenerated() {
        let (service, _clock) = service_with_clock(10, 3600);

        service.recommend_for_user(1, Some(2), None);
        let longer = service.recommend_for_user(1, Some(6), None);

        assert_eq!(longer.len(), 6);
        let cached = service.cache().get_recommendations(1).unwrap();
        assert_eq!(cached.len(), 6);
    }

    #[test]
    fn test_expired_entry_is_regenerated() {
        let (service, clock) = service_with_clock(10, 60);

        service.recommend_for_user(1, Some(4), None);
        clock.advance_secs(60);
        service.recommend_for_user(1, Some(4), None);

        let stats = service.cache().stats();
        assert_eq!(stats.expirations, 1);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_default_limit_applies() {
        let (service, _clock) = service_with_clock(10, 3600);
        assert_eq!(service.recommend_for_user(2, None, None).len(), 10);
    }

    #[test]
    fn test_mood_bypasses_cache() {
        let (service, _clock) = service_with_clock(10, 3600);

        let recs = service.recommend_for_user(1, Some(3), Some("happy"));

        assert_eq!(recs.len(), 3);
        assert!(recs.iter().all(|r| r.metadata.mood_category == "positive"));
        assert!(service.cache().is_empty());
    }

    #[test]
    fn test_platform_info() {
        let service = RecommendationService::default();
        let info = service.platform_info();
        assert_eq!(info.platforms.len(), 1);
        assert_eq!(info.platforms[0].name, "youtube");
    }

    #[test]
    fn test_user_preferences_lookup() {
        let service = RecommendationService::default();

        let prefs = service.user_preferences("demo_user").unwrap();
        assert_eq!(prefs.profile.recommended_categories.len(), 4);
        assert!(service.user_preferences("nobody").is_none());
    }

    #[test]
    fn test_default_limit_is_kept_as_given() {
        let (service, _clock) = service_with_clock(10, 3600);
        assert_eq!(service.default_limit(), 10);
        let service = RecommendationService::from_cache_config(CacheConfig::default(), 50);
        assert_eq!(service.default_limit(), 50);
    }
}
