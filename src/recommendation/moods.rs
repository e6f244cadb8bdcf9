//! Mood Catalog
//!
//! Maps free-form mood words onto five categories and holds the content
//! templates used to dress up generated recommendations.

use serde::Serialize;

// == Mood Category ==
/// Broad mood bucket used to pick templates and videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Positive,
    Negative,
    Neutral,
    Emotional,
    Mental,
}

impl MoodCategory {
    /// All categories in catalog order.
    pub const ALL: [MoodCategory; 5] = [
        MoodCategory::Positive,
        MoodCategory::Negative,
        MoodCategory::Neutral,
        MoodCategory::Emotional,
        MoodCategory::Mental,
    ];

    /// Lowercase name, as used in tags.
    pub fn as_str(self) -> &'static str {
        match self {
            MoodCategory::Positive => "positive",
            MoodCategory::Negative => "negative",
            MoodCategory::Neutral => "neutral",
            MoodCategory::Emotional => "emotional",
            MoodCategory::Mental => "mental",
        }
    }

    /// Capitalized name, as used for the recommendation category.
    pub fn label(self) -> &'static str {
        match self {
            MoodCategory::Positive => "Positive",
            MoodCategory::Negative => "Negative",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Emotional => "Emotional",
            MoodCategory::Mental => "Mental",
        }
    }

    /// Mood words that belong to this category verbatim.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            MoodCategory::Positive => &[
                "happy", "excited", "energetic", "motivated", "inspired", "cheerful", "joyful",
                "optimistic",
            ],
            MoodCategory::Negative => &[
                "sad", "angry", "frustrated", "anxious", "depressed", "stressed", "upset",
                "worried",
            ],
            MoodCategory::Neutral => &[
                "calm", "focused", "relaxed", "peaceful", "balanced", "mindful", "composed",
                "centered",
            ],
            MoodCategory::Emotional => &[
                "love", "romantic", "heartbroken", "nostalgic", "sentimental", "passionate",
                "emotional",
            ],
            MoodCategory::Mental => &[
                "confused", "thoughtful", "curious", "creative", "reflective", "intellectual",
                "philosophical",
            ],
        }
    }

    /// Fragments that pull an unknown mood word into this category.
    fn associations(self) -> &'static [&'static str] {
        match self {
            MoodCategory::Positive => &[
                "good", "great", "awesome", "amazing", "wonderful", "fantastic", "excellent",
            ],
            MoodCategory::Negative => &[
                "bad", "terrible", "horrible", "awful", "miserable", "down", "low",
            ],
            MoodCategory::Neutral => &["okay", "fine", "normal", "regular", "standard", "moderate"],
            MoodCategory::Emotional => &["feeling", "heart", "soul", "spirit", "touched", "moved"],
            MoodCategory::Mental => &["think", "thought", "mind", "brain", "idea", "wonder"],
        }
    }

    /// Title templates; `{mood}` is replaced by the requested mood.
    pub fn titles(self) -> &'static [&'static str] {
        match self {
            MoodCategory::Positive => &[
                "Feel Good Vibes: {mood}",
                "Uplifting Moments: {mood}",
                "Happy Times: {mood}",
                "Positive Energy: {mood}",
            ],
            MoodCategory::Negative => &[
                "Finding Peace: {mood}",
                "Healing Moments: {mood}",
                "Understanding: {mood}",
                "Path to Calm: {mood}",
            ],
            MoodCategory::Neutral => &[
                "Balance & Harmony: {mood}",
                "Peaceful Moments: {mood}",
                "Mindful State: {mood}",
                "Centered Energy: {mood}",
            ],
            MoodCategory::Emotional => &[
                "Heart & Soul: {mood}",
                "Emotional Journey: {mood}",
                "Feel Deep: {mood}",
                "Soul Touch: {mood}",
            ],
            MoodCategory::Mental => &[
                "Mind Space: {mood}",
                "Mental Clarity: {mood}",
                "Think Clear: {mood}",
                "Brain Waves: {mood}",
            ],
        }
    }

    /// Description templates; `{mood}` is replaced by the requested mood.
    pub fn descriptions(self) -> &'static [&'static str] {
        match self {
            MoodCategory::Positive => &[
                "Boost your mood with amazing content for {mood} feelings.",
                "Perfect playlist for when you're feeling {mood}.",
                "Keep the good vibes going with {mood} content.",
                "Enhance your {mood} energy with these picks.",
            ],
            MoodCategory::Negative => &[
                "Transform your {mood} energy into something positive.",
                "Find understanding and peace when feeling {mood}.",
                "Let the music help you process {mood} feelings.",
                "Journey from {mood} to calm with these selections.",
            ],
            MoodCategory::Neutral => &[
                "Maintain your {mood} state with balanced content.",
                "Perfect for a {mood} mindset and focused energy.",
                "Stay centered and {mood} with these picks.",
                "Enhance your {mood} state with mindful content.",
            ],
            MoodCategory::Emotional => &[
                "Connect with your {mood} feelings through music.",
                "Express your {mood} emotions with these selections.",
                "Perfect for deep {mood} moments.",
                "Let the music match your {mood} heart.",
            ],
            MoodCategory::Mental => &[
                "Clear your mind while feeling {mood}.",
                "Perfect for {mood} thinking and focus.",
                "Enhance your {mood} mental state.",
                "Optimize your {mood} thought process.",
            ],
        }
    }

    /// YouTube video ids curated for this category.
    pub fn video_ids(self) -> &'static [&'static str] {
        match self {
            MoodCategory::Positive => &[
                "ZbZSe6N_BXs",
                "pRpeEdMmmQ0",
                "ru0K8uYEZWw",
                "09R8_2nJtjg",
                "y6Sxv-sUYtM",
            ],
            MoodCategory::Negative => &[
                "kXYiU_JCYtU",
                "eVTXPUF4Oz4",
                "04854XqcfCY",
                "CdXesX6mYUE",
                "gH476CxJxfg",
            ],
            MoodCategory::Neutral => &[
                "5qap5aO4i9A",
                "DWcJFNfaw9c",
                "lTRiuFIWV54",
                "1vx8iUvfyCY",
                "goyZbut_KFY",
            ],
            MoodCategory::Emotional => &[
                "JGwWNGJdvx8",
                "0E4Crx1PXJQ",
                "450p7goxZqg",
                "Y8HOfcYWZoo",
                "rtOvBOTyX00",
            ],
            MoodCategory::Mental => &[
                "DVg2EJvvlF8",
                "6kVlZAc6v3g",
                "v7xUxQsLPDw",
                "1ZYbU82GVz4",
                "goGNJ6hzUHk",
            ],
        }
    }
}

// == Categorize ==
/// Assigns a mood word to a category.
///
/// Exact word-list matches win, then the first category with an associated
/// fragment contained in the word. Anything else is neutral.
pub fn categorize_mood(mood: &str) -> MoodCategory {
    let mood = mood.trim().to_lowercase();

    if let Some(category) = MoodCategory::ALL
        .into_iter()
        .find(|category| category.words().contains(&mood.as_str()))
    {
        return category;
    }

    MoodCategory::ALL
        .into_iter()
        .find(|category| {
            category
                .associations()
                .iter()
                .any(|fragment| mood.contains(fragment))
        })
        .unwrap_or(MoodCategory::Neutral)
}

/// Every known mood word, sorted.
pub fn all_moods() -> Vec<&'static str> {
    let mut moods: Vec<&'static str> = MoodCategory::ALL
        .into_iter()
        .flat_map(|category| category.words().iter().copied())
        .collect();
    moods.sort_unstable();
    moods
}
