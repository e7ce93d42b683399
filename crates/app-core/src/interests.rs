//! Interest catalog
//!
//! The fixed set of tags a user picks from during onboarding.

use serde::Serialize;

/// Minimum number of interests required to finish onboarding
pub const MIN_INTERESTS: usize = 3;

/// One selectable interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interest {
    /// Stable tag id, persisted and used in search
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Emoji shown next to the name
    pub icon: &'static str,
}

const fn interest(id: &'static str, name: &'static str, icon: &'static str) -> Interest {
    Interest { id, name, icon }
}

/// Every selectable interest, in display order
pub const CATALOG: [Interest; 20] = [
    interest("wellness", "Wellness", "🧘"),
    interest("fitness", "Fitness", "💪"),
    interest("books", "Books", "📚"),
    interest("creativity", "Creativity", "🎨"),
    interest("technology", "Technology", "💻"),
    interest("sports", "Sports", "⚽"),
    interest("music", "Music", "🎵"),
    interest("cooking", "Cooking", "👨‍🍳"),
    interest("travel", "Travel", "✈️"),
    interest("parenting", "Parenting", "👶"),
    interest("business", "Business", "💼"),
    interest("spirituality", "Spirituality", "🕯️"),
    interest("arts", "Arts", "🖼️"),
    interest("gaming", "Gaming", "🎮"),
    interest("nature", "Nature", "🌿"),
    interest("education", "Education", "📖"),
    interest("relationships", "Relationships", "💝"),
    interest("health", "Health", "🏥"),
    interest("fashion", "Fashion", "👗"),
    interest("photography", "Photography", "📸"),
];

/// Look up an interest by id
pub fn find(id: &str) -> Option<&'static Interest> {
    CATALOG.iter().find(|i| i.id == id)
}

/// Check if an id is in the catalog
pub fn is_known(id: &str) -> bool {
    find(id).is_some()
}
