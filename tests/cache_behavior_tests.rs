//! Integration Tests for the Recommendation Cache
//!
//! Exercises the public cache surface: eviction order, lazy expiry with a
//! manual clock, and concurrent access from many threads.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use recsys_cache::cache::ManualClock;
use recsys_cache::models::{RecommendationMetadata, VideoRecommendation};
use recsys_cache::recommendation::RecommendationList;
use recsys_cache::{CacheConfig, RecommendationCache};

// == Helper Functions ==

fn recommendation(id: u32, title: &str) -> VideoRecommendation {
    VideoRecommendation {
        id,
        title: title.to_string(),
        description: None,
        url: format!("https://example.com/{}", id),
        thumbnail_url: None,
        embed_url: None,
        duration: Some(300),
        category: None,
        platform: "youtube".to_string(),
        tags: Vec::new(),
        mood_tags: Vec::new(),
        engagement_score: 0.5,
        created_at: chrono::Utc::now(),
        metadata: RecommendationMetadata {
            recommended_by: "test".to_string(),
            mood_type: "calm".to_string(),
            mood_category: "neutral".to_string(),
            content_type: "calm_content".to_string(),
            platform: "youtube".to_string(),
            quality: "HD".to_string(),
            recommendation_time: chrono::Utc::now(),
        },
    }
}

fn list(title: &str) -> RecommendationList {
    Arc::new(vec![recommendation(1, title), recommendation(2, title)])
}

fn cache(max_size: usize, ttl: u64) -> (RecommendationCache<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let cache =
        RecommendationCache::with_clock(CacheConfig::new(max_size, ttl).unwrap(), clock.clone());
    (cache, clock)
}

fn held(cache: &RecommendationCache<ManualClock>) -> HashSet<u64> {
    cache.keys().into_iter().collect()
}

// == Eviction ==

#[test]
fn test_lru_eviction_then_promotion() {
    let (cache, _clock) = cache(2, 3600);

    cache.store_recommendations(1, list("A"));
    cache.store_recommendations(2, list("B"));
    cache.store_recommendations(3, list("C"));
    assert_eq!(held(&cache), HashSet::from([2, 3]));

    assert!(cache.get_recommendations(2).is_some());
    cache.store_recommendations(4, list("D"));
    assert_eq!(held(&cache), HashSet::from([2, 4]));
}

#[test]
fn test_reinsertion_replaces_value_and_recency() {
    let (cache, clock) = cache(3, 100);

    cache.store_recommendations(1, list("v1"));
    cache.store_recommendations(2, list("other"));
    clock.advance_secs(90);
    cache.store_recommendations(1, list("v2"));
    clock.advance_secs(90);

    assert_eq!(cache.keys().last(), Some(&1));
    let value = cache.get_recommendations(1).unwrap();
    assert_eq!(value[0].title, "v2");
    // 2 was written 180 seconds ago and is stale
    assert!(cache.get_recommendations(2).is_none());
}

// == Expiry ==

#[test]
fn test_expiry_removes_on_read() {
    let (cache, clock) = cache(10, 60);

    cache.store_recommendations(7, list("A"));
    clock.advance_secs(60);

    assert_eq!(cache.len(), 1, "stale entry lingers until read");
    assert!(cache.get_recommendations(7).is_none());
    assert_eq!(cache.len(), 0);
}

#[test]
fn test_zero_ttl_boundary() {
    let (cache, _clock) = cache(10, 0);

    cache.store_recommendations(7, list("A"));

    assert!(cache.get_recommendations(7).is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_miss_on_empty() {
    let (cache, _clock) = cache(10, 60);
    for user in [0, 1, u64::MAX] {
        assert!(cache.get_recommendations(user).is_none());
    }
}

#[test]
fn test_stored_list_is_returned_untouched() {
    let (cache, _clock) = cache(10, 60);
    let stored = list("payload");

    cache.store_recommendations(3, Arc::clone(&stored));

    let fetched = cache.get_recommendations(3).unwrap();
    assert!(Arc::ptr_eq(&stored, &fetched));
}

// == Concurrency ==

#[test]
fn test_concurrent_callers_respect_invariants() {
    const THREADS: u64 = 8;
    const OPS: u64 = 500;
    let max_size = 16;

    let (cache, clock) = cache(max_size, 30);
    let cache = Arc::new(cache);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            let clock = clock.clone();
            thread::spawn(move || {
                for i in 0..OPS {
                    let user = (t * 7 + i * 13) % 40;
                    if i % 3 == 0 {
                        let title = format!("user-{}", user);
                        cache.store_recommendations(user, list(&title));
                    } else if let Some(recs) = cache.get_recommendations(user) {
                        // Lists are only ever written whole for their own user
                        let expected = format!("user-{}", user);
                        assert_eq!(recs.len(), 2);
                        assert!(recs.iter().all(|r| r.title == expected));
                    }
                    if i % 97 == 0 {
                        clock.advance_secs(5);
                    }
                    assert!(cache.len() <= max_size);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let keys = cache.keys();
    let unique: HashSet<u64> = keys.iter().copied().collect();
    assert!(keys.len() <= max_size);
    assert_eq!(unique.len(), keys.len());

    let stats = cache.stats();
    assert_eq!(stats.hits + stats.misses, THREADS * (OPS - OPS.div_ceil(3)));
}
