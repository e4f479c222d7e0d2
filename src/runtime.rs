//! Runtime services and shared state for the benedict-bot.

use tokio::sync::mpsc;
use tracing::{Instrument, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    interaction::responder::Responder,
    service::{chat::ChatClient, reactions::ReactionStore},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the chat client, reaction store, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The chat client instance.
    pub chat: ChatClient,
    /// The reaction store instance.
    pub reactions: ReactionStore,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Initialize the slack client.
        let chat = ChatClient::slack(&config).await?;

        // Reaction counts only live as long as the process.
        let reactions = ReactionStore::memory();

        Ok(Self { config, chat, reactions })
    }

    /// Builds the responder for this runtime.
    pub fn responder(&self) -> Responder {
        Responder::new(&self.config, self.chat.clone(), self.reactions.clone())
    }

    /// Greets the workspace, then serves events until the chat client shuts down.
    pub async fn start(&self) -> Void {
        let mut responder = self.responder();
        responder.on_start().await?;

        let (sender, receiver) = mpsc::unbounded_channel();

        let consumer = tokio::spawn(responder.run(receiver).in_current_span());

        let result = self.chat.start(sender).await;

        // The listener has shut down; events still queued are dropped.
        consumer.abort();

        result
    }
}
