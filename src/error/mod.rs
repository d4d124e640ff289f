//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from startup, the Discord client and console
//! commands. `CommandError` is the error type of slash command handlers; it never leaves
//! the command registry, which turns it into an error reply. `FaqError` describes the
//! failures of the FAQ file lookup and converts into `CommandError`.

pub mod command;
pub mod config;
pub mod faq;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates the errors that can stop startup or fail a console command. Most variants
/// use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Reading console input failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Two commands were registered under the same name.
    ///
    /// # Fields
    /// - Name shared by both commands
    #[error("A command named '{0}' is already registered")]
    DuplicateCommand(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
