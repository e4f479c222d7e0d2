use serde::{Deserialize, Serialize};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Sending half of the event queue that the chat client feeds.
pub type EventSender = tokio::sync::mpsc::UnboundedSender<ChatEvent>;
/// Receiving half of the event queue drained by the runtime.
pub type EventReceiver = tokio::sync::mpsc::UnboundedReceiver<ChatEvent>;

// Events.

/// The kind of an incoming chat event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Message,
    ReactionAdded,
    ReactionRemoved,
    Other(String),
}

impl From<&str> for EventKind {
    fn from(value: &str) -> Self {
        match value {
            "message" => EventKind::Message,
            "reaction_added" => EventKind::ReactionAdded,
            "reaction_removed" => EventKind::ReactionRemoved,
            other => EventKind::Other(other.to_string()),
        }
    }
}

/// A single decoded event from the chat platform.
///
/// For reaction events, `channel_id` and `timestamp` refer to the message the
/// reaction was applied to, not to the reaction itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEvent")]
pub struct ChatEvent {
    pub kind: EventKind,
    pub channel_id: Option<String>,
    pub user_id: Option<String>,
    pub text: Option<String>,
    pub reaction_name: Option<String>,
    pub timestamp: Option<String>,
}

impl ChatEvent {
    /// The key of the message a reaction event targets, if it has one.
    pub fn reaction_key(&self) -> Option<ReactionKey> {
        Some(ReactionKey {
            channel_id: self.channel_id.clone()?,
            timestamp: self.timestamp.clone()?,
        })
    }
}

/// Wire shape of a push event, as Slack sends it.
#[derive(Debug, Default, Deserialize)]
struct RawEvent {
    #[serde(rename = "type", default)]
    kind: String,
    text: Option<String>,
    channel: Option<String>,
    user: Option<String>,
    ts: Option<String>,
    item: Option<RawItem>,
    reaction: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawItem {
    channel: Option<String>,
    ts: Option<String>,
}

impl From<RawEvent> for ChatEvent {
    fn from(raw: RawEvent) -> Self {
        let (channel_id, timestamp) = match raw.item {
            Some(item) => (item.channel.or(raw.channel), item.ts.or(raw.ts)),
            None => (raw.channel, raw.ts),
        };

        Self {
            kind: EventKind::from(raw.kind.as_str()),
            channel_id,
            user_id: raw.user,
            text: raw.text,
            reaction_name: raw.reaction,
            timestamp,
        }
    }
}

// Reactions.

/// Identifies the message that reactions are counted against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionKey {
    pub channel_id: String,
    pub timestamp: String,
}

/// Direction of a reaction count update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionChange {
    Added,
    Removed,
}

// Directory.

/// The bot's own user, as resolved from the user directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdentity {
    pub user_id: String,
    pub name: String,
}

/// A user or channel in the platform directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl DirectoryEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

// Outbound messages.

/// Options for posting a message to a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostOptions {
    /// Post as the bot user rather than as the app.
    pub as_user: bool,
    /// Legacy interactive attachments, JSON-encoded when sent.
    pub attachments: Option<Vec<Attachment>>,
}

impl PostOptions {
    pub fn as_user() -> Self {
        Self { as_user: true, attachments: None }
    }

    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = Some(attachments);
        self
    }
}

/// A message attachment carrying interactive buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub text: String,
    pub fallback: String,
    pub callback_id: String,
    pub color: String,
    pub attachment_type: String,
    pub actions: Vec<AttachmentAction>,
}

/// A single button on an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentAction {
    pub name: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ActionConfirm>,
}

/// Confirmation dialog shown before a button action goes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionConfirm {
    pub title: String,
    pub text: String,
    pub ok_text: String,
    pub dismiss_text: String,
}

// Tests.
