//! Slash command registration once the gateway session is established.
//!
//! Discord only routes interactions for commands it knows about, so the schemas of the
//! registry are pushed as global commands every time `ready` fires.

use serenity::all::{Command, Context, Ready};

use crate::command::registry::CommandRegistry;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers every slash command globally, replacing commands that are no longer in the
/// registry. The event fires again after reconnects; re-registering identical schemas is
/// a no-op on Discord's side.
///
/// # Arguments
/// - `registry` - Slash commands whose schemas are registered
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(registry: &CommandRegistry, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, registry.create_commands()).await {
        Ok(commands) => {
            tracing::info!("Registered {} slash commands", commands.len());
        }
        Err(e) => {
            tracing::error!("Failed to register slash commands: {:?}", e);
        }
    }
}
