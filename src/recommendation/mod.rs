//! Recommendation Module
//!
//! Mood catalog, templated generator, demo user profiles, and the
//! cache-aside service that serves per-user recommendation lists.

mod generator;
mod moods;
mod profiles;
mod service;

use std::sync::Arc;

pub use generator::{category_for_user, Platform, RecommendationGenerator, RECOMMENDED_BY};
pub use moods::{all_moods, categorize_mood, MoodCategory};
pub use profiles::{find_profile, EngagementMetrics, Preferences, UserProfile, DEMO_USERNAME};
pub use service::RecommendationService;

use crate::cache::{Clock, SharedCache, SystemClock};
use crate::models::VideoRecommendation;

/// Cache key: the requesting user's id
pub type UserId = u64;

/// Cached payload, shared so hits do not copy the list under the lock
pub type RecommendationList = Arc<Vec<VideoRecommendation>>;

/// Per-user recommendation cache
pub type RecommendationCache<C = SystemClock> = SharedCache<UserId, RecommendationList, C>;

impl<C: Clock> SharedCache<UserId, RecommendationList, C> {
    /// Cached recommendations for `user_id`, if present and fresh.
    pub fn get_recommendations(&self, user_id: UserId) -> Option<RecommendationList> {
        self.get(&user_id)
    }

    /// Caches `recommendations` for `user_id`, replacing any previous list.
    pub fn store_recommendations(&self, user_id: UserId, recommendations: RecommendationList) {
        self.put(user_id, recommendations)
    }
}
