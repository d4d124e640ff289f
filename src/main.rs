mod bot;
mod command;
mod config;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::{
    command::console::{input::run_console, ConsoleCommandManager},
    config::Config,
    error::AppError,
    state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let started_at = Utc::now();

    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let state = Arc::new(BotState::new(&config, started_at));
    let registry = Arc::new(startup::build_command_registry(&config)?);

    // Console commands run alongside the bot for the lifetime of the process
    let shutdown = Arc::new(Notify::new());
    let console = Arc::new(ConsoleCommandManager::with_defaults(shutdown.clone())?);
    tokio::spawn(run_console(console));

    tracing::info!("Starting bot");

    let client = bot::start::init_bot(&config, state, registry).await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        startup::wait_for_shutdown(shutdown).await;
        tracing::info!("Shutting down...");
        shard_manager.shutdown_all().await;
    });

    bot::start::start_bot(client).await?;

    tracing::info!("Bot stopped");

    Ok(())
}
