//! Decides, per incoming event, whether and how the bot replies.

use chrono::Datelike;
use tracing::{Instrument, debug, error, info, instrument, warn};

use crate::{
    base::{
        config::Config,
        phrases::WELCOME_TEMPLATE,
        types::{BotIdentity, ChatEvent, EventKind, EventReceiver, PostOptions, ReactionChange, Void},
    },
    service::{chat::ChatClient, reactions::ReactionStore},
};

use super::{
    classify::{MentionTriggers, is_channel_conversation, is_chat_message, is_from_self, is_mention, is_reaction_event},
    escalation::escalation_prompt,
    keywords::{KeywordContext, KeywordTable},
    name_joke::random_name_joke,
};

/// Source of the current calendar month, `1..=12`.
pub type MonthSource = fn() -> u32;

fn local_month() -> u32 {
    chrono::Local::now().month()
}

/// Classifies events and sends the bot's replies through the chat client.
pub struct Responder {
    chat: ChatClient,
    reactions: ReactionStore,
    bot_name: String,
    triggers: MentionTriggers,
    keywords: KeywordTable,
    operations_channel: String,
    reaction_threshold: u32,
    identity: Option<BotIdentity>,
    month: MonthSource,
}

impl Responder {
    pub fn new(config: &Config, chat: ChatClient, reactions: ReactionStore) -> Self {
        Self {
            chat,
            reactions,
            bot_name: config.bot_name.clone(),
            triggers: MentionTriggers::new(&config.mention_triggers, &config.bot_name),
            keywords: KeywordTable::default(),
            operations_channel: config.operations_channel.clone(),
            reaction_threshold: config.reaction_threshold,
            identity: None,
            month: local_month,
        }
    }

    /// Replaces the clock used for seasonal responses.
    pub fn with_month_source(mut self, month: MonthSource) -> Self {
        self.month = month;
        self
    }

    /// Replaces the keyword table.
    pub fn with_keywords(mut self, keywords: KeywordTable) -> Self {
        self.keywords = keywords;
        self
    }

    /// The bot's own user, once resolved.
    pub fn identity(&self) -> Option<&BotIdentity> {
        self.identity.as_ref()
    }

    /// Runs once after connecting: resolves the bot's identity and greets the default channel.
    #[instrument(skip_all)]
    pub async fn on_start(&mut self) -> Void {
        self.load_identity().await?;
        self.post_welcome().await
    }

    async fn load_identity(&mut self) -> Void {
        let users = self.chat.list_users().await?;

        self.identity = users.into_iter().find(|u| u.name == self.bot_name).map(|u| BotIdentity { user_id: u.id, name: u.name });

        match &self.identity {
            Some(identity) => info!("Bot user ID: {}", identity.user_id),
            None => warn!("No user named `{}` found; messages from the bot itself will not be filtered.", self.bot_name),
        }

        Ok(())
    }

    async fn post_welcome(&self) -> Void {
        let channels = self.chat.list_channels().await?;

        let Some(channel) = channels.first() else {
            warn!("No channels to post the welcome message to.");
            return Ok(());
        };

        let text = WELCOME_TEMPLATE.replace("{bot_name}", &self.bot_name);

        self.chat.post_message_to_channel(&channel.name, &text, &PostOptions::as_user()).await
    }

    /// Drains the event queue, handling each event to completion before the next.
    ///
    /// Errors are logged and do not stop the loop.
    pub async fn run(self, mut events: EventReceiver) {
        while let Some(event) = events.recv().await {
            let result = self.handle(&event).in_current_span().await;

            if let Err(err) = &result {
                error!("Error while handling: {}", err);
            }
        }

        info!("Event queue closed; responder stopping.");
    }

    /// Handles a single event.
    #[instrument(skip_all, fields(kind = ?event.kind))]
    pub async fn handle(&self, event: &ChatEvent) -> Void {
        if is_chat_message(event) && is_channel_conversation(event) && !is_from_self(event, self.identity()) {
            self.reply_to_message(event).await?;
        }

        if is_reaction_event(event) {
            self.count_reaction(event).await?;
        }

        Ok(())
    }

    async fn reply_to_message(&self, event: &ChatEvent) -> Void {
        let text = event.text.as_deref().unwrap_or_default();

        let reply = if is_mention(event, &self.triggers) {
            Some(random_name_joke(&mut rand::thread_rng()))
        } else {
            let context = KeywordContext { month: (self.month)() };
            self.keywords.respond(text, &context)
        };

        let Some(reply) = reply else {
            return Ok(());
        };

        let channel_id = event.channel_id.as_deref().unwrap_or_default();
        let channel_name = self.chat.channel_name(channel_id).await?.ok_or_else(|| anyhow::anyhow!("Unknown channel ID `{}`.", channel_id))?;

        info!("Replying in #{} ...", channel_name);

        self.chat.post_message_to_channel(&channel_name, &reply, &PostOptions::as_user()).await
    }

    async fn count_reaction(&self, event: &ChatEvent) -> Void {
        let Some(key) = event.reaction_key() else {
            debug!("Reaction event has no target message.");
            return Ok(());
        };

        let change = match event.kind {
            EventKind::ReactionAdded => ReactionChange::Added,
            _ => ReactionChange::Removed,
        };

        let count = self.reactions.adjust(&key, change).await?;

        if count != self.reaction_threshold {
            return Ok(());
        }

        info!("Message {} in {} hit {} reactions; posting escalation prompt ...", key.timestamp, key.channel_id, count);

        let (text, options) = escalation_prompt();
        self.chat.post_message_to_channel(&self.operations_channel, text, &options).await
    }
}
