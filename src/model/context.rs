//! Per-invocation input of a command handler.
//!
//! An `InvocationContext` is built by the transport layer for each slash command
//! interaction and discarded once the reply has been sent. It carries everything a
//! handler is allowed to read: who invoked the command, the supplied option values, the
//! bot's own identity and the process-wide `BotState`.

use chrono::{DateTime, Utc};
use serenity::all::{Member, User};
use std::{collections::HashMap, sync::Arc};

use crate::state::BotState;

/// Milliseconds between the Unix epoch and the first second of 2015, Discord's epoch.
const DISCORD_EPOCH_MILLIS: u64 = 1_420_070_400_000;

/// The guild member who invoked a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker {
    pub id: u64,
    pub tag: String,
    pub avatar_url: String,
    /// When the member joined the guild the command was invoked in.
    pub joined_at: Option<DateTime<Utc>>,
}

impl From<&Member> for Invoker {
    fn from(member: &Member) -> Self {
        Self {
            id: member.user.id.get(),
            tag: member.user.tag(),
            avatar_url: member.user.face(),
            joined_at: member.joined_at.map(|joined_at| *joined_at),
        }
    }
}

/// The bot's own Discord user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdentity {
    pub id: u64,
    pub name: String,
    pub tag: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for BotIdentity {
    fn from(user: &User) -> Self {
        let id = user.id.get();
        Self {
            id,
            name: user.name.clone(),
            tag: user.tag(),
            avatar_url: user.face(),
            created_at: snowflake_created_at(id),
        }
    }
}

/// Input of a single command execution.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// The invoking guild member, `None` when invoked outside of a guild.
    pub member: Option<Invoker>,
    /// Supplied option values keyed by option name.
    pub options: HashMap<String, String>,
    pub bot: BotIdentity,
    pub state: Arc<BotState>,
    pub invoked_at: DateTime<Utc>,
}

impl InvocationContext {
    /// Creates a context without an invoking member or options.
    ///
    /// # Arguments
    /// - `bot` - Identity of the bot user
    /// - `state` - Process-wide bot state
    /// - `invoked_at` - When the interaction was received
    pub fn new(bot: BotIdentity, state: Arc<BotState>, invoked_at: DateTime<Utc>) -> Self {
        Self {
            member: None,
            options: HashMap::new(),
            bot,
            state,
            invoked_at,
        }
    }

    pub fn with_member(mut self, member: Invoker) -> Self {
        self.member = Some(member);
        self
    }

    /// Value supplied for the option `name`, if any.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Milliseconds the bot has been running at the time of the invocation.
    ///
    /// Clamped to zero if the clock went backwards since startup.
    pub fn bot_uptime_millis(&self) -> u64 {
        let uptime = self.invoked_at - self.state.started_at;
        u64::try_from(uptime.num_milliseconds()).unwrap_or(0)
    }
}

#[cfg(test)]
impl InvocationContext {
    pub fn with_option(mut self, name: &str, value: &str) -> Self {
        self.options.insert(name.to_string(), value.to_string());
        self
    }
}

/// Creation time encoded in a Discord snowflake id.
pub fn snowflake_created_at(id: u64) -> DateTime<Utc> {
    let millis = (id >> 22) + DISCORD_EPOCH_MILLIS;
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .unwrap_or_default()
}
