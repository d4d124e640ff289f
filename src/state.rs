//! Process-wide bot state shared by every command invocation.
//!
//! The state is created once at startup from the configuration and then handed to each
//! `InvocationContext` behind an `Arc`. Nothing in it changes after startup, so handlers
//! read it concurrently without locking.

use chrono::{DateTime, Utc};

use crate::config::Config;

/// Read-only state describing the running bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotState {
    /// Discord id of the user allowed to run owner-only commands.
    pub owner_id: u64,

    /// When the process started, used for the bot uptime.
    pub started_at: DateTime<Utc>,

    /// Base URL for embed thumbnail images, without a trailing slash.
    pub resource_url: String,
}

impl BotState {
    /// Creates the bot state from the loaded configuration.
    ///
    /// # Arguments
    /// - `config` - Application configuration providing owner id and resource URL
    /// - `started_at` - Startup timestamp of the process
    pub fn new(config: &Config, started_at: DateTime<Utc>) -> Self {
        Self {
            owner_id: config.bot_owner_id,
            started_at,
            resource_url: config.resource_url.clone(),
        }
    }

    /// Full URL of an image hosted under the resource base URL.
    pub fn image_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.resource_url, file_name)
    }
}
