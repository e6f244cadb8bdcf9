//! Recommendation Generator
//!
//! Assembles recommendation lists from mood templates and a random source.
//! Nothing here is learned or ranked; the output only has to look plausible.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::models::{RecommendationMetadata, VideoRecommendation};
use crate::recommendation::moods::{categorize_mood, MoodCategory};

/// Name written into `metadata.recommended_by`
pub const RECOMMENDED_BY: &str = "recsys_cache";

/// Shortest generated video, in seconds
const MIN_DURATION: u32 = 180;
/// Longest generated video, in seconds
const MAX_DURATION: u32 = 600;

// == Platform ==
/// URL templates for a video platform; `{video_id}` is substituted.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Platform {
    pub name: &'static str,
    pub video_url: &'static str,
    pub thumbnail_url: &'static str,
    pub embed_url: &'static str,
}

impl Platform {
    pub const YOUTUBE: Platform = Platform {
        name: "youtube",
        video_url: "https://www.youtube.com/watch?v={video_id}",
        thumbnail_url: "https://img.youtube.com/vi/{video_id}/maxresdefault.jpg",
        embed_url: "https://www.youtube.com/embed/{video_id}",
    };

    fn render(template: &str, video_id: &str) -> String {
        template.replace("{video_id}", video_id)
    }
}

// == Generator ==
/// Builds recommendation lists for one platform.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationGenerator {
    platform: Platform,
}

impl Default for RecommendationGenerator {
    fn default() -> Self {
        Self::new(Platform::YOUTUBE)
    }
}

impl RecommendationGenerator {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Generates `limit` recommendations for a free-form mood word.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mood: &str,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Vec<VideoRecommendation> {
        let category = categorize_mood(mood);
        self.build(rng, mood, category, limit, now)
    }

    /// Generates `limit` recommendations for a user with no stated mood.
    ///
    /// The user id picks a stable category, labelled with its first mood word.
    pub fn generate_for_user<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        user_id: u64,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Vec<VideoRecommendation> {
        let category = category_for_user(user_id);
        let mood = category.words()[0];
        self.build(rng, mood, category, limit, now)
    }

    fn build<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mood: &str,
        category: MoodCategory,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Vec<VideoRecommendation> {
        let mood_lower = mood.to_lowercase();
        let content_type = format!("{}_content", mood);

        (0..limit)
            .map(|i| {
                let video_id = pick(rng, category.video_ids());
                let title = pick(rng, category.titles()).replace("{mood}", mood);
                let description = pick(rng, category.descriptions()).replace("{mood}", mood);

                VideoRecommendation {
                    id: i as u32 + 1,
                    title,
                    description: Some(description),
                    url: Platform::render(self.platform.video_url, video_id),
                    thumbnail_url: Some(Platform::render(self.platform.thumbnail_url, video_id)),
                    embed_url: Some(Platform::render(self.platform.embed_url, video_id)),
                    duration: Some(rng.gen_range(MIN_DURATION..=MAX_DURATION)),
                    category: Some(category.label().to_string()),
                    platform: self.platform.name.to_string(),
                    tags: vec![
                        mood_lower.clone(),
                        category.as_str().to_string(),
                        "recommended".to_string(),
                        content_type.clone(),
                    ],
                    mood_tags: vec![mood_lower.clone(), category.as_str().to_string()],
                    engagement_score: engagement_score(i),
                    created_at: now,
                    metadata: RecommendationMetadata {
                        recommended_by: RECOMMENDED_BY.to_string(),
                        mood_type: mood.to_string(),
                        mood_category: category.as_str().to_string(),
                        content_type: content_type.clone(),
                        platform: self.platform.name.to_string(),
                        quality: "HD".to_string(),
                        recommendation_time: now,
                    },
                }
            })
            .collect()
    }
}

/// Stable category for a user without a mood.
pub fn category_for_user(user_id: u64) -> MoodCategory {
    let all = MoodCategory::ALL;
    all[(user_id % all.len() as u64) as usize]
}

/// Score decays by 0.02 per position from 0.95, rounded to two places.
/// Past position 47 it goes negative.
fn engagement_score(position: usize) -> f64 {
    let raw = 0.95 - position as f64 * 0.02;
    (raw * 100.0).round() / 100.0
}

/// Uniform choice from a non-empty static table.
fn pick<R: Rng + ?Sized>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    items[rng.gen_range(0..items.len())]
}
