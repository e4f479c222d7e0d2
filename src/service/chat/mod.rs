pub mod slack;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{DirectoryEntry, EventSender, PostOptions, Res, Void};

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the core functionality for interacting with chat platforms
/// like Slack. Implementing this trait allows different chat services to be used
/// with the benedict-bot.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Start the chat client listener.
    ///
    /// This connects to the platform's real-time stream and forwards every decoded
    /// event into `events` until the client shuts down.
    async fn start(&self, events: EventSender) -> Void;

    /// Post a message to a channel, addressed by the channel's name.
    async fn post_message_to_channel(&self, channel_name: &str, text: &str, options: &PostOptions) -> Void;

    /// List the users known to the platform.
    async fn list_users(&self) -> Res<Vec<DirectoryEntry>>;

    /// List the channels known to the platform.
    ///
    /// The order is the platform's own; the first entry is treated as the default channel.
    /// Implementations may answer from a cache.
    async fn list_channels(&self) -> Res<Vec<DirectoryEntry>>;

    /// Re-read the channel directory from the platform, bypassing any cache.
    async fn refresh_channels(&self) -> Res<Vec<DirectoryEntry>>;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }

    /// Finds the name of a channel from its id.
    ///
    /// A miss re-reads the directory once, so channels joined after startup resolve.
    pub async fn channel_name(&self, channel_id: &str) -> Res<Option<String>> {
        let find = |channels: Vec<DirectoryEntry>| channels.into_iter().find(|c| c.id == channel_id).map(|c| c.name);

        if let Some(name) = find(self.list_channels().await?) {
            return Ok(Some(name));
        }

        Ok(find(self.refresh_channels().await?))
    }
}
