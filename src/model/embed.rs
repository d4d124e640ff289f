//! Replies produced by command handlers.
//!
//! An `Embed` is an immutable description of one Discord embed: title, optional
//! description and thumbnail, an ordered list of fields and an accent color. Field order
//! is the on-screen display order. A `Reply` is either one or more successful embeds or a
//! single error embed with the reserved `"Error"` title.
//!
//! Handlers never touch Serenity builders; the conversion to `CreateEmbed` happens in the
//! transport layer through `Embed::to_create_embed`.

use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::model::context::Invoker;

/// Title reserved for error embeds.
pub const ERROR_TITLE: &str = "Error";
/// Placeholder for values that aren't available.
pub const NOT_AVAILABLE: &str = "N/A";

pub const COLOR_RED: u32 = 0xFF0000;
pub const COLOR_GREEN: u32 = 0x00FF00;

// Discord rejects embeds exceeding these lengths, counted in characters.
pub const TITLE_LIMIT: usize = 256;
pub const DESCRIPTION_LIMIT: usize = 4096;
pub const FIELD_COUNT_LIMIT: usize = 25;
pub const FIELD_NAME_LIMIT: usize = 256;
pub const FIELD_VALUE_LIMIT: usize = 1024;
pub const FOOTER_LIMIT: usize = 2048;
/// Combined length of every embed in one message.
pub const TOTAL_LIMIT: usize = 6000;

/// A labeled value shown in an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Footer naming the member who ran the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub color: Option<u32>,
    pub footer: Option<EmbedFooter>,
    pub fields: Vec<EmbedField>,
}

impl Embed {
    /// Creates an empty embed with an "Executed by" footer for `invoker`.
    ///
    /// Without an invoker (e.g. a command run from a direct message) the embed has no
    /// footer.
    pub fn executed_by(invoker: Option<&Invoker>) -> Self {
        Self {
            footer: invoker.map(|invoker| EmbedFooter {
                text: format!("Executed by {}", invoker.tag),
                icon_url: Some(invoker.avatar_url.clone()),
            }),
            ..Self::default()
        }
    }

    /// Creates the error embed carrying `message` as its only field.
    ///
    /// Messages longer than a field value allows are cut off, so the error embed itself
    /// is always accepted by Discord.
    pub fn error(invoker: Option<&Invoker>, message: impl Into<String>) -> Self {
        Self::executed_by(invoker)
            .title(ERROR_TITLE)
            .color(COLOR_RED)
            .field(ERROR_TITLE, truncate(message.into(), FIELD_VALUE_LIMIT), false)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Appends a field after all previously added fields.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Characters Discord counts towards the message total for this embed.
    pub fn length(&self) -> usize {
        char_count(self.title.as_deref())
            + char_count(self.description.as_deref())
            + char_count(self.footer.as_ref().map(|footer| footer.text.as_str()))
            + self
                .fields
                .iter()
                .map(|field| field.name.chars().count() + field.value.chars().count())
                .sum::<usize>()
    }

    /// Describes the first Discord embed limit this embed exceeds.
    ///
    /// # Returns
    /// - `Some(String)` - Which part is too long, for logging
    /// - `None` - The embed fits every per-embed limit
    pub fn limit_violation(&self) -> Option<String> {
        let title = char_count(self.title.as_deref());
        if title > TITLE_LIMIT {
            return Some(format!("title has {} characters", title));
        }

        let description = char_count(self.description.as_deref());
        if description > DESCRIPTION_LIMIT {
            return Some(format!("description has {} characters", description));
        }

        let footer = char_count(self.footer.as_ref().map(|footer| footer.text.as_str()));
        if footer > FOOTER_LIMIT {
            return Some(format!("footer has {} characters", footer));
        }

        if self.fields.len() > FIELD_COUNT_LIMIT {
            return Some(format!("embed has {} fields", self.fields.len()));
        }

        self.fields.iter().find_map(|field| {
            let name = field.name.chars().count();
            let value = field.value.chars().count();
            if name > FIELD_NAME_LIMIT {
                Some(format!("field name '{}' has {} characters", field.name, name))
            } else if value > FIELD_VALUE_LIMIT {
                Some(format!("value of field '{}' has {} characters", field.name, value))
            } else {
                None
            }
        })
    }

    /// Builds the Serenity embed sent to Discord.
    pub fn to_create_embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new();

        if let Some(title) = &self.title {
            embed = embed.title(title);
        }
        if let Some(description) = &self.description {
            embed = embed.description(description);
        }
        if let Some(thumbnail) = &self.thumbnail {
            embed = embed.thumbnail(thumbnail);
        }
        if let Some(color) = self.color {
            embed = embed.color(color);
        }
        if let Some(footer) = &self.footer {
            let mut create_footer = CreateEmbedFooter::new(&footer.text);
            if let Some(icon_url) = &footer.icon_url {
                create_footer = create_footer.icon_url(icon_url);
            }
            embed = embed.footer(create_footer);
        }

        embed.fields(
            self.fields
                .iter()
                .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
        )
    }
}

/// Outcome of a command execution, ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// One embed per section, in display order.
    Success(Vec<Embed>),
    /// A single error embed titled `ERROR_TITLE`.
    Error(Embed),
}

impl Reply {
    /// Successful reply with a single embed.
    pub fn single(embed: Embed) -> Self {
        Self::Success(vec![embed])
    }

    /// Error reply carrying `message`.
    pub fn error(invoker: Option<&Invoker>, message: impl Into<String>) -> Self {
        Self::Error(Embed::error(invoker, message))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Describes why Discord would reject this reply, `None` if it can be sent as is.
    pub fn limit_violation(&self) -> Option<String> {
        if let Some(violation) = self.embeds().iter().find_map(Embed::limit_violation) {
            return Some(violation);
        }

        let total: usize = self.embeds().iter().map(Embed::length).sum();
        if total > TOTAL_LIMIT {
            return Some(format!("embeds have {} characters in total", total));
        }

        None
    }

    /// Embeds to send, in display order.
    pub fn embeds(&self) -> &[Embed] {
        match self {
            Self::Success(embeds) => embeds,
            Self::Error(embed) => std::slice::from_ref(embed),
        }
    }
}

fn char_count(text: Option<&str>) -> usize {
    text.map(|text| text.chars().count()).unwrap_or(0)
}

/// Cuts `text` down to `limit` characters, marking the cut with an ellipsis.
fn truncate(text: String, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text;
    }

    let mut truncated: String = text.chars().take(limit.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
impl Embed {
    /// Field labels in display order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }

    /// Value of the first field labeled `name`.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

#[cfg(test)]
impl Reply {
    /// Message of an error reply, `None` for successful replies.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(embed) => embed.field_value(ERROR_TITLE),
            Self::Success(_) => None,
        }
    }
}
