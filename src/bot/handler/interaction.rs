//! Interaction handler dispatching slash commands.
//!
//! Each command interaction is deferred first, so handlers that read slow providers
//! don't run into Discord's three second acknowledgement window. The reply is then
//! delivered by editing the deferred response.

use chrono::Utc;
use serenity::all::{
    CommandDataOption, CommandInteraction, Context, EditInteractionResponse, Interaction, User,
};
use std::{collections::HashMap, sync::Arc};

use crate::{
    command::registry::CommandRegistry,
    model::{
        context::{BotIdentity, InvocationContext, Invoker},
        embed::Embed,
    },
    state::BotState,
};

/// Handles an incoming interaction.
///
/// Only application command interactions are handled; others are ignored.
///
/// # Arguments
/// - `state` - Process-wide bot state for the invocation context
/// - `registry` - Slash commands to dispatch to
/// - `ctx` - Discord context providing HTTP client and cache
/// - `interaction` - The received interaction
pub async fn handle_interaction_create(
    state: &Arc<BotState>,
    registry: &CommandRegistry,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };
    let name = command.data.name.clone();

    tracing::debug!(
        "Received slash command '{}' from user {}",
        name,
        command.user.id
    );

    let deferred = if registry.is_ephemeral(&name) {
        command.defer_ephemeral(&ctx.http).await
    } else {
        command.defer(&ctx.http).await
    };
    if let Err(e) = deferred {
        tracing::error!("Failed to defer slash command '{}': {:?}", name, e);
        return;
    }

    let bot = {
        let current_user = ctx.cache.current_user();
        let user: &User = &current_user;
        BotIdentity::from(user)
    };
    let invocation = build_context(&command, bot, state.clone());

    let reply = registry.handle(&name, invocation).await;
    if reply.is_error() {
        tracing::debug!("Replying to slash command '{}' with an error", name);
    }
    let embeds = reply.embeds().iter().map(Embed::to_create_embed).collect();

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().embeds(embeds))
        .await
    {
        tracing::error!("Failed to send reply for slash command '{}': {:?}", name, e);
    }
}

/// Builds the invocation context for a command interaction.
pub fn build_context(
    command: &CommandInteraction,
    bot: BotIdentity,
    state: Arc<BotState>,
) -> InvocationContext {
    let mut ctx = InvocationContext::new(bot, state, Utc::now());
    ctx.options = collect_options(&command.data.options);

    match command.member.as_deref() {
        Some(member) => ctx.with_member(Invoker::from(member)),
        None => ctx,
    }
}

/// Collects string option values by name; other option types are skipped.
pub fn collect_options(options: &[CommandDataOption]) -> HashMap<String, String> {
    options
        .iter()
        .filter_map(|option| {
            option
                .value
                .as_str()
                .map(|value| (option.name.clone(), value.to_string()))
        })
        .collect()
}
