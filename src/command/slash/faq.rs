use serenity::async_trait;

use crate::{
    command::{CommandSchema, OptionSchema, SlashCommand},
    error::command::CommandError,
    model::{
        context::{InvocationContext, Invoker},
        embed::{Embed, Reply, COLOR_GREEN},
        faq::FaqEntry,
    },
    service::faq::FaqStore,
};

/// `/faq` - answers to common questions from the FAQ file.
pub struct FaqCommand {
    store: FaqStore,
}

impl FaqCommand {
    pub fn new(store: FaqStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SlashCommand for FaqCommand {
    fn name(&self) -> &'static str {
        "faq"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new(self.name(), "Get some default answers to common questions.")
            .option(OptionSchema::string("id", "The ID of the question.", true))
    }

    async fn execute(&self, ctx: &InvocationContext) -> Result<Reply, CommandError> {
        let id = ctx
            .option("id")
            .ok_or_else(|| CommandError::missing_argument("id"))?;

        let entry = self.store.lookup(id).await?;

        Ok(Reply::single(faq_embed(ctx.member.as_ref(), id, &entry)))
    }
}

/// Builds the embed for a found entry; the plugin field is only shown when set.
pub fn faq_embed(member: Option<&Invoker>, id: &str, entry: &FaqEntry) -> Embed {
    let mut embed = Embed::executed_by(member)
        .title("FAQ")
        .color(COLOR_GREEN)
        .description(format!("Question ID: {}", id));

    if let Some(plugin) = &entry.plugin {
        embed = embed.field("Plugin", plugin, false);
    }

    embed
        .field("Question", &entry.question, false)
        .field("Answer", &entry.answer, false)
}
