use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::{
    bot::handler::Handler, command::registry::CommandRegistry, config::Config,
    error::AppError, state::BotState,
};

/// Initializes the Discord bot client without connecting.
///
/// Split from `start_bot` so the caller can grab the shard manager for shutdown before
/// the client starts blocking.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `state` - Process-wide bot state handed to each invocation
/// - `registry` - Slash commands to register and dispatch
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(
    config: &Config,
    state: Arc<BotState>,
    registry: Arc<CommandRegistry>,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(state, registry);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Runs until the connection fails or all shards are shut down through the client's
/// shard manager.
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if connecting to Discord failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
