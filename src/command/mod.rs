//! Slash and console commands.
//!
//! Slash commands implement `SlashCommand` and are registered in a `CommandRegistry`,
//! which also produces the schemas sent to Discord and turns handler errors into error
//! replies. Console commands live in `console` and are driven by lines read from stdin.

pub mod console;
pub mod registry;
pub mod slash;

#[cfg(test)]
mod test;

use serenity::{
    all::{CommandOptionType, CreateCommand, CreateCommandOption},
    async_trait,
};

use crate::{
    error::command::CommandError,
    model::{context::InvocationContext, embed::Reply},
};

/// Type of a command option.
///
/// Only string options are used by the bot's commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
}

impl OptionKind {
    fn to_command_option_type(self) -> CommandOptionType {
        match self {
            OptionKind::String => CommandOptionType::String,
        }
    }
}

/// Declaration of a named command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub required: bool,
}

impl OptionSchema {
    /// Declares a string option.
    pub fn string(name: &'static str, description: &'static str, required: bool) -> Self {
        Self {
            name,
            description,
            kind: OptionKind::String,
            required,
        }
    }
}

/// Declaration of a slash command as registered with Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<OptionSchema>,
}

impl CommandSchema {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            options: Vec::new(),
        }
    }

    pub fn option(mut self, option: OptionSchema) -> Self {
        self.options.push(option);
        self
    }

    /// Builds the Serenity command used for registration.
    pub fn to_create_command(&self) -> CreateCommand {
        self.options.iter().fold(
            CreateCommand::new(self.name).description(self.description),
            |command, option| {
                command.add_option(
                    CreateCommandOption::new(
                        option.kind.to_command_option_type(),
                        option.name,
                        option.description,
                    )
                    .required(option.required),
                )
            },
        )
    }
}

/// A slash command handler.
///
/// Handlers validate their preconditions before doing any work and return the first
/// failing check as `CommandError::Forbidden` or `CommandError::Validation`. They only
/// read the context and their providers, never mutate bot state, so one instance serves
/// concurrent invocations.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// Name the command is registered and dispatched under.
    fn name(&self) -> &'static str;

    fn schema(&self) -> CommandSchema;

    /// Whether replies are only visible to the invoker.
    fn is_ephemeral(&self) -> bool {
        false
    }

    async fn execute(&self, ctx: &InvocationContext) -> Result<Reply, CommandError>;
}
