//! Test factory for creating Serenity Member objects.

use serenity::all::{Member, User};

/// Creates a test Serenity guild Member wrapping the given user.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user` - User the membership belongs to, usually from `create_test_user`
/// - `joined_at` - Optional RFC 3339 timestamp of when the member joined the guild
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(guild_id: u64, user: User, joined_at: Option<&str>) -> Member {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": user,
        "nick": null,
        "avatar": null,
        "roles": [],
        "joined_at": joined_at,
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
