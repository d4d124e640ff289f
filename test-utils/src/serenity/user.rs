//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User with customizable fields.
///
/// Creates a User object by deserializing JSON with the provided values. The user uses
/// Discord's new username system (discriminator `0`), so `User::tag()` returns the plain
/// username. The avatar hash is padded to 32 characters if it's shorter.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
/// - `avatar_hash` - Optional avatar hash (will be padded to 32 characters if shorter)
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str, avatar_hash: Option<&str>) -> User {
    let formatted_avatar = avatar_hash.map(|hash| {
        if hash.len() < 32 {
            format!("{:0<32}", hash)
        } else {
            hash.to_string()
        }
    });

    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": formatted_avatar,
        "bot": false,
        "system": false,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
