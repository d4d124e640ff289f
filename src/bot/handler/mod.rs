use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::{command::registry::CommandRegistry, state::BotState};

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: Arc<BotState>,
    pub registry: Arc<CommandRegistry>,
}

impl Handler {
    pub fn new(state: Arc<BotState>, registry: Arc<CommandRegistry>) -> Self {
        Self { state, registry }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.registry, ctx, ready).await;
    }

    /// Called when a user invokes a slash command or other interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, &self.registry, ctx, interaction)
            .await;
    }
}
