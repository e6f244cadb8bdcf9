//! Request DTOs for the recommendation API
//!
//! Query strings accepted by the recommendation endpoints.

use serde::Deserialize;

/// Largest number of recommendations a single request may ask for
pub const MAX_LIMIT: i64 = 50;

/// Query for GET /recommendations/
///
/// # Fields
/// - `user_id`: The user asking for recommendations (must be at least 1)
/// - `limit`: How many to return (1 to 50, default from config)
/// - `mood`: Optional mood word; bypasses the per-user cache
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationQuery {
    pub user_id: i64,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub mood: Option<String>,
}

impl RecommendationQuery {
    /// Validates the query
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.user_id < 1 {
            return Some("Invalid user ID".to_string());
        }
        validate_limit(self.limit)
    }
}

/// Query for GET /recommendations/mood/
#[derive(Debug, Clone, Deserialize)]
pub struct MoodQuery {
    pub mood: String,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl MoodQuery {
    /// Validates the query
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.mood.trim().is_empty() {
            return Some("Mood cannot be empty".to_string());
        }
        validate_limit(self.limit)
    }
}

/// Query for GET /user/preferences
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesQuery {
    pub username: String,
}

fn validate_limit(limit: Option<i64>) -> Option<String> {
    match limit {
        Some(limit) if !(1..=MAX_LIMIT).contains(&limit) => {
            Some(format!("Limit must be between 1 and {}", MAX_LIMIT))
        }
        _ => None,
    }
}
