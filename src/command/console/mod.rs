//! Commands typed into the bot's console.
//!
//! Each line read from stdin is split on whitespace; the first word selects the command
//! (case-insensitive) and the remaining words are passed as arguments. A failing or
//! panicking console command is logged and never stops the bot.

pub mod help;
pub mod input;
pub mod stop;

use serenity::async_trait;
use std::{
    collections::BTreeMap,
    sync::{Arc, PoisonError, RwLock},
};
use tokio::sync::Notify;

use crate::{
    command::console::{help::HelpCommand, stop::StopCommand},
    error::AppError,
};

#[async_trait]
pub trait ConsoleCommand: Send + Sync {
    /// Label the command is invoked with, lowercase.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    async fn execute(&self, args: Vec<String>) -> Result<(), AppError>;
}

/// What happened to a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleOutcome {
    /// The line was blank.
    Ignored,
    /// No command is registered under the label.
    Unknown,
    Completed,
    /// The command returned an error or panicked; the failure was logged.
    Failed,
}

/// Label to description of every registered console command.
///
/// Shared between the manager and `help`, so commands registered after `help` are
/// listed as well.
pub type CommandCatalog = Arc<RwLock<BTreeMap<&'static str, &'static str>>>;

/// Label and description of every command in `catalog`, sorted by label.
pub fn catalog_entries(catalog: &CommandCatalog) -> Vec<(String, String)> {
    let catalog = catalog.read().unwrap_or_else(PoisonError::into_inner);
    catalog
        .iter()
        .map(|(name, description)| (name.to_string(), description.to_string()))
        .collect()
}

/// Registered console commands keyed by label.
#[derive(Default)]
pub struct ConsoleCommandManager {
    commands: BTreeMap<&'static str, Arc<dyn ConsoleCommand>>,
    catalog: CommandCatalog,
}

impl ConsoleCommandManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with the built-in `stop` and `help` commands.
    ///
    /// # Arguments
    /// - `shutdown` - Notified when `stop` is executed
    pub fn with_defaults(shutdown: Arc<Notify>) -> Result<Self, AppError> {
        let mut manager = Self::new();
        manager.register(Arc::new(StopCommand::new(shutdown)))?;
        let catalog = manager.catalog.clone();
        manager.register(Arc::new(HelpCommand::new(catalog)))?;

        Ok(manager)
    }

    /// Registers a command under its label.
    ///
    /// # Returns
    /// - `Ok(())` - The command was registered
    /// - `Err(AppError::DuplicateCommand)` - Another console command already uses the label
    pub fn register(&mut self, command: Arc<dyn ConsoleCommand>) -> Result<(), AppError> {
        let name = command.name();
        if self.commands.contains_key(name) {
            return Err(AppError::DuplicateCommand(name.to_string()));
        }

        self.catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, command.description());
        self.commands.insert(name, command);
        Ok(())
    }

    /// Splits a console line and runs the matching command.
    pub async fn dispatch_line(&self, line: &str) -> ConsoleOutcome {
        let mut words = line.split_whitespace();
        let Some(label) = words.next() else {
            return ConsoleOutcome::Ignored;
        };
        let args = words.map(str::to_string).collect();

        self.on_command(&label.to_lowercase(), args).await
    }

    /// Runs the command registered under `label`.
    ///
    /// The command runs in its own task so a panic is caught as well as an error. Both
    /// are logged with the label.
    pub async fn on_command(&self, label: &str, args: Vec<String>) -> ConsoleOutcome {
        let Some(command) = self.commands.get(label).cloned() else {
            tracing::warn!("Unknown console command '{}'. Type 'help' for a list.", label);
            return ConsoleOutcome::Unknown;
        };

        let task = tokio::spawn(async move { command.execute(args).await });

        match task.await {
            Ok(Ok(())) => ConsoleOutcome::Completed,
            Ok(Err(e)) => {
                tracing::error!("Failed to execute console command '{}': {:?}", label, e);
                ConsoleOutcome::Failed
            }
            Err(e) => {
                tracing::error!("Failed to execute console command '{}': {:?}", label, e);
                ConsoleOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
impl ConsoleCommandManager {
    /// Catalog shared with the registered `help` command.
    pub fn catalog(&self) -> CommandCatalog {
        self.catalog.clone()
    }
}
