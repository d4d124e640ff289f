use serenity::async_trait;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::{command::console::ConsoleCommand, error::AppError};

/// Shuts the bot down.
pub struct StopCommand {
    shutdown: Arc<Notify>,
}

impl StopCommand {
    pub fn new(shutdown: Arc<Notify>) -> Self {
        Self { shutdown }
    }
}

#[async_trait]
impl ConsoleCommand for StopCommand {
    fn name(&self) -> &'static str {
        "stop"
    }

    fn description(&self) -> &'static str {
        "Disconnect from Discord and exit."
    }

    async fn execute(&self, _args: Vec<String>) -> Result<(), AppError> {
        tracing::info!("Stopping the bot...");
        // Stores a permit if nobody is waiting yet
        self.shutdown.notify_one();
        Ok(())
    }
}
