//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (User, Member) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{member::create_test_member, user::create_test_user};
//!
//! #[tokio::test]
//! async fn test_invoker_conversion() {
//!     let user = create_test_user(123456789, "slimy", None);
//!     let member = create_test_member(987654321, user, Some("2021-06-01T12:00:00.000000+00:00"));
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity Member objects

pub mod member;
pub mod user;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use user::create_test_user;
