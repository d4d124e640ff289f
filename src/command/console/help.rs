use serenity::async_trait;

use crate::{
    command::console::{catalog_entries, CommandCatalog, ConsoleCommand},
    error::AppError,
};

/// Logs every console command with its description.
pub struct HelpCommand {
    catalog: CommandCatalog,
}

impl HelpCommand {
    pub const NAME: &'static str = "help";
    pub const DESCRIPTION: &'static str = "List the available console commands.";

    /// # Arguments
    /// - `catalog` - Commands of the manager `help` is registered with
    pub fn new(catalog: CommandCatalog) -> Self {
        Self { catalog }
    }

    /// Lines logged by `execute`, read from the catalog at call time.
    pub fn lines(&self) -> Vec<String> {
        catalog_entries(&self.catalog)
            .iter()
            .map(|(name, description)| format!("{} - {}", name, description))
            .collect()
    }
}

#[async_trait]
impl ConsoleCommand for HelpCommand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    async fn execute(&self, _args: Vec<String>) -> Result<(), AppError> {
        tracing::info!("Console commands:");
        for line in self.lines() {
            tracing::info!("  {}", line);
        }
        Ok(())
    }
}
