//! Recommendation payload
//!
//! The record returned to clients. The cache stores lists of these without
//! looking inside them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recommended video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecommendation {
    /// Position in the list, starting at 1
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub embed_url: Option<String>,
    /// Duration in seconds
    pub duration: Option<u32>,
    pub category: Option<String>,
    pub platform: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub mood_tags: Vec<String>,
    pub engagement_score: f64,
    pub created_at: DateTime<Utc>,
    pub metadata: RecommendationMetadata,
}

/// Provenance of a generated recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMetadata {
    pub recommended_by: String,
    pub mood_type: String,
    pub mood_category: String,
    pub content_type: String,
    pub platform: String,
    pub quality: String,
    /// When the list containing this record was generated
    pub recommendation_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_deserialize_defaults() {
        let json = r#"{
            "id": 1,
            "title": "Motivational Morning Routine",
            "description": null,
            "url": "https://example.com/video1",
            "thumbnail_url": null,
            "embed_url": null,
            "duration": 300,
            "category": "Motivation",
            "platform": "youtube",
            "engagement_score": 0.95,
            "created_at": "2025-03-02T06:18:45Z",
            "metadata": {
                "recommended_by": "recsys",
                "mood_type": "motivated",
                "mood_category": "positive",
                "content_type": "motivated_content",
                "platform": "youtube",
                "quality": "HD",
                "recommendation_time": "2025-03-02T06:41:20Z"
            }
        }"#;

        let rec: VideoRecommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id, 1);
        assert_eq!(rec.duration, Some(300));
        assert!(rec.tags.is_empty());
        assert!(rec.mood_tags.is_empty());
        assert_eq!(rec.metadata.quality, "HD");
        assert_eq!(
            rec.metadata.recommendation_time.to_rfc3339(),
            "2025-03-02T06:41:20+00:00"
        );
    }
}
