use std::{collections::BTreeMap, sync::Arc};

use serenity::all::CreateCommand;

use crate::{
    command::{CommandSchema, SlashCommand},
    error::{command::CommandError, AppError},
    model::{context::InvocationContext, embed::Reply},
};

/// Reply message when a handler panics.
const UNEXPECTED_FAILURE: &str = "An unexpected error occurred while executing this command.";

/// Reply message when a handler built a reply Discord would reject.
const REPLY_TOO_LARGE: &str = "The reply is too large to be shown in Discord.";

/// Registered slash commands keyed by name.
///
/// Filled once at startup and read-only afterwards.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Arc<dyn SlashCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under its name.
    ///
    /// # Returns
    /// - `Ok(())` - The command was registered
    /// - `Err(AppError::DuplicateCommand)` - Another command already uses the name
    pub fn register(&mut self, command: Arc<dyn SlashCommand>) -> Result<(), AppError> {
        let name = command.name();
        if self.commands.contains_key(name) {
            return Err(AppError::DuplicateCommand(name.to_string()));
        }

        tracing::debug!("Registered slash command '{}'", name);
        self.commands.insert(name, command);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn SlashCommand>> {
        self.commands.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    /// Whether the reply of command `name` is only visible to the invoker.
    ///
    /// Unknown commands are treated as ephemeral so their error reply stays private.
    pub fn is_ephemeral(&self, name: &str) -> bool {
        self.commands
            .get(name)
            .map(|command| command.is_ephemeral())
            .unwrap_or(true)
    }

    pub fn schemas(&self) -> Vec<CommandSchema> {
        self.commands
            .values()
            .map(|command| command.schema())
            .collect()
    }

    /// Serenity commands for registering every schema with Discord.
    pub fn create_commands(&self) -> Vec<CreateCommand> {
        self.schemas()
            .iter()
            .map(CommandSchema::to_create_command)
            .collect()
    }

    /// Runs command `name` and returns the reply to deliver.
    ///
    /// The handler runs in its own task. Handler errors and panics are logged and turned
    /// into an error reply, so this always produces a reply. A reply exceeding Discord's
    /// embed limits is replaced by an error reply as well.
    ///
    /// # Arguments
    /// - `name` - Name of the invoked command
    /// - `ctx` - Invocation context, moved into the handler task
    ///
    /// # Returns
    /// - `Reply` - The handler's reply, or an error reply describing the failure
    pub async fn handle(&self, name: &str, ctx: InvocationContext) -> Reply {
        let invoker = ctx.member.clone();

        let Some(command) = self.get(name) else {
            tracing::warn!("Received interaction for unknown command '{}'", name);
            return Reply::error(invoker.as_ref(), format!("Unknown command '{}'.", name));
        };

        let task = tokio::spawn(async move { command.execute(&ctx).await });

        match task.await {
            Ok(Ok(reply)) => match reply.limit_violation() {
                None => reply,
                Some(violation) => {
                    tracing::error!(
                        "Slash command '{}' built a reply exceeding Discord's limits: {}",
                        name,
                        violation
                    );
                    Reply::error(invoker.as_ref(), REPLY_TOO_LARGE)
                }
            },
            Ok(Err(err)) => {
                log_command_error(name, invoker.as_ref().map(|i| i.id), &err);
                let footer = if err.hides_invoker() {
                    None
                } else {
                    invoker.as_ref()
                };
                Reply::error(footer, err.to_string())
            }
            Err(e) => {
                tracing::error!("Slash command '{}' panicked: {}", name, e);
                Reply::error(invoker.as_ref(), UNEXPECTED_FAILURE)
            }
        }
    }
}

fn log_command_error(name: &str, invoker_id: Option<u64>, err: &CommandError) {
    if err.is_user_error() {
        tracing::warn!(
            "Slash command '{}' rejected for {:?}: {}",
            name,
            invoker_id,
            err
        );
    } else {
        tracing::error!(
            "Slash command '{}' failed for {:?}: {:?}",
            name,
            invoker_id,
            err
        );
    }
}
