//! Discord bot integration for slash command handling.
//!
//! This module connects the command registry to Discord. On `ready` the bot registers
//! the schemas of all slash commands globally; on every command interaction it builds an
//! `InvocationContext`, runs the matching handler and edits the deferred response with
//! the resulting embeds.
//!
//! # Gateway Intents
//!
//! The bot only requires the `GUILDS` intent. Slash command interactions are delivered
//! regardless of intents, and the invoking member is part of the interaction payload.

pub mod handler;
pub mod start;
