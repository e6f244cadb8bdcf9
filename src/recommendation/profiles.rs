//! User Profiles
//!
//! A fixed, in-memory directory of known users and their viewing
//! preferences. There is no user store behind the service.

use serde::Serialize;

/// Username of the built-in demo profile
pub const DEMO_USERNAME: &str = "demo_user";

/// Stated content preferences
#[derive(Debug, Clone, Serialize)]
pub struct Preferences {
    pub categories: &'static [&'static str],
    pub duration_preference: &'static str,
    pub preferred_moods: &'static [&'static str],
}

/// Viewing history summary
#[derive(Debug, Clone, Serialize)]
pub struct EngagementMetrics {
    pub videos_watched: u32,
    /// Seconds
    pub average_watch_time: u32,
    pub favorite_category: &'static str,
    pub completion_rate: f64,
}

/// Everything known about one user.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub username: &'static str,
    /// RFC 3339 timestamp
    pub last_active: &'static str,
    pub preferences: Preferences,
    pub recommended_categories: &'static [&'static str],
    pub engagement_metrics: EngagementMetrics,
}

static PROFILES: &[UserProfile] = &[UserProfile {
    username: DEMO_USERNAME,
    last_active: "2025-03-02T06:41:20Z",
    preferences: Preferences {
        categories: &[
            "Motivation",
            "Personal Development",
            "Success Stories",
            "Emotional Wellness",
        ],
        duration_preference: "medium",
        preferred_moods: &["motivated", "focused", "energetic"],
    },
    recommended_categories: &[
        "Leadership",
        "Goal Setting",
        "Time Management",
        "Mental Health",
    ],
    engagement_metrics: EngagementMetrics {
        videos_watched: 42,
        average_watch_time: 325,
        favorite_category: "Motivation",
        completion_rate: 0.87,
    },
}];

/// Looks up a profile by exact username.
pub fn find_profile(username: &str) -> Option<&'static UserProfile> {
    PROFILES.iter().find(|profile| profile.username == username)
}
