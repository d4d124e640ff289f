use std::sync::Arc;
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

use crate::{
    command::{
        registry::CommandRegistry,
        slash::{DevInfoCommand, FaqCommand},
    },
    config::Config,
    error::AppError,
    service::{faq::FaqStore, system::LiveSystemInfo},
};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "slimy=info";

/// Installs the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set, otherwise only this crate's logs at
/// `info` and above are shown.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Creates the registry holding every slash command the bot serves.
///
/// # Arguments
/// - `config` - Application configuration providing the FAQ file path
///
/// # Returns
/// - `Ok(CommandRegistry)` - Registry with `devinfo` and `faq` registered
/// - `Err(AppError::DuplicateCommand)` - Two commands share a name
pub fn build_command_registry(config: &Config) -> Result<CommandRegistry, AppError> {
    let mut registry = CommandRegistry::new();

    registry.register(Arc::new(DevInfoCommand::new(Arc::new(LiveSystemInfo::new()))))?;
    registry.register(Arc::new(FaqCommand::new(FaqStore::new(
        config.questions_path.clone(),
    ))))?;

    tracing::info!("Slash commands: {}", registry.names().join(", "));

    Ok(registry)
}

/// Waits until the console `stop` command fires or the process receives Ctrl+C.
///
/// If the Ctrl+C listener can't be installed, only the console signal is awaited.
pub async fn wait_for_shutdown(shutdown: Arc<Notify>) {
    tokio::select! {
        _ = shutdown.notified() => {}
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                shutdown.notified().await;
            }
        }
    }
}
