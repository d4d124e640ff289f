//! Slimy Test Utils
//!
//! Provides shared testing utilities for the slimy bot. This crate offers a builder pattern
//! for creating test contexts backed by a temporary `questions.yml` file, plus factories for
//! Serenity model objects.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring the FAQ file written to disk
//! - **TestContext**: Test environment owning the temporary directory and file path
//! - **TestError**: Error types that can occur during test setup
//! - **serenity**: Factories for `User` and `Member` objects deserialized from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_faq_lookup() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_question("discord", None, "Is there a Discord?", "Yes.")
//!         .build()?;
//!
//!     let store = FaqStore::new(test.questions_path());
//!     // Perform lookups...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod serenity;
