//! Test fixtures providing reusable test data.
//!
//! Unlike the builder, fixtures never touch the filesystem; they only hand out constants
//! that tests compare against or feed into `TestBuilder::with_raw_content()`.

/// Discord id used for the configured bot owner in tests.
pub const OWNER_ID: u64 = 180000000000000001;

/// Discord id used for a guild member who is not the bot owner.
pub const MEMBER_ID: u64 = 180000000000000002;

/// Discord id used for the bot's own user.
pub const BOT_ID: u64 = 180000000000000003;

/// Discord id used for the guild the interactions come from.
pub const GUILD_ID: u64 = 190000000000000001;

/// A well-formed FAQ file with one plugin-scoped and one general question.
pub const QUESTIONS_YAML: &str = r#"
combatlogx-install:
  plugin: CombatLogX
  question: How do I install CombatLogX?
  answer: Put the jar into your plugins folder and restart the server.
support-hours:
  question: When is support available?
  answer: Whenever a developer is online.
"#;

/// A file that exists but is not a YAML mapping.
pub const MALFORMED_YAML: &str = "combatlogx-install: [unclosed\n  question: ???";
