//! Predicates that classify incoming chat events.

use crate::base::types::{BotIdentity, ChatEvent, EventKind};

/// Whether the event is a plain message with some text in it.
pub fn is_chat_message(event: &ChatEvent) -> bool {
    event.kind == EventKind::Message && event.text.as_deref().is_some_and(|t| !t.is_empty())
}

/// Whether the event happened in a public channel (Slack channel ids start with `C`).
pub fn is_channel_conversation(event: &ChatEvent) -> bool {
    event.channel_id.as_deref().is_some_and(|c| c.starts_with('C'))
}

/// Whether the bot itself wrote the message.
///
/// An unresolved identity never matches, so nothing is filtered in that case.
pub fn is_from_self(event: &ChatEvent, identity: Option<&BotIdentity>) -> bool {
    match (identity, event.user_id.as_deref()) {
        (Some(identity), Some(user_id)) => identity.user_id == user_id,
        _ => false,
    }
}

/// Whether the event is a reaction being added or removed.
pub fn is_reaction_event(event: &ChatEvent) -> bool {
    matches!(event.kind, EventKind::ReactionAdded | EventKind::ReactionRemoved) && event.reaction_name.as_deref().is_some_and(|r| !r.is_empty())
}

/// Lower-cased substrings that mean the bot is being talked about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionTriggers {
    triggers: Vec<String>,
}

impl MentionTriggers {
    /// Builds the trigger set from the configured proper-name triggers and the bot's name.
    pub fn new<I, S>(proper_names: I, bot_name: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bot_name = bot_name.to_lowercase();

        let mut triggers: Vec<String> = proper_names.into_iter().map(|s| s.as_ref().trim().to_lowercase()).filter(|s| !s.is_empty()).collect();
        triggers.push(format!("@{bot_name}"));
        triggers.push(bot_name);

        Self { triggers }
    }

    /// Returns the first trigger found in `text`, ignoring case.
    pub fn find(&self, text: &str) -> Option<&str> {
        let text = text.to_lowercase();
        self.triggers.iter().find(|t| text.contains(t.as_str())).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.triggers.iter().map(String::as_str)
    }
}

/// Whether the message text contains any mention trigger.
pub fn is_mention(event: &ChatEvent, triggers: &MentionTriggers) -> bool {
    event.text.as_deref().is_some_and(|t| triggers.find(t).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(channel: &str, user: &str, text: &str) -> ChatEvent {
        ChatEvent {
            kind: EventKind::Message,
            channel_id: Some(channel.to_string()),
            user_id: Some(user.to_string()),
            text: Some(text.to_string()),
            reaction_name: None,
            timestamp: Some("1700000000.000100".to_string()),
        }
    }

    fn triggers() -> MentionTriggers {
        MentionTriggers::new(["benedict", "cumberbatch"], "benedictbot")
    }

    #[test]
    fn chat_messages_need_text() {
        assert!(is_chat_message(&message("C1", "U1", "hi")));
        assert!(!is_chat_message(&message("C1", "U1", "")));
        assert!(!is_chat_message(&ChatEvent { text: None, ..message("C1", "U1", "hi") }));
        assert!(!is_chat_message(&ChatEvent { kind: EventKind::ReactionAdded, ..message("C1", "U1", "hi") }));
    }

    #[test]
    fn only_c_prefixed_channels_are_conversations() {
        assert!(is_channel_conversation(&message("C0123", "U1", "hi")));
        assert!(!is_channel_conversation(&message("D0123", "U1", "hi")));
        assert!(!is_channel_conversation(&message("G0123", "U1", "hi")));
        assert!(!is_channel_conversation(&ChatEvent { channel_id: None, ..message("C1", "U1", "hi") }));
    }

    #[test]
    fn self_check_needs_a_resolved_identity() {
        let identity = BotIdentity { user_id: "UBOT".to_string(), name: "benedictbot".to_string() };

        assert!(is_from_self(&message("C1", "UBOT", "hi"), Some(&identity)));
        assert!(!is_from_self(&message("C1", "U1", "hi"), Some(&identity)));
        assert!(!is_from_self(&message("C1", "UBOT", "hi"), None));
    }

    #[test]
    fn mentions_are_case_insensitive_substrings() {
        let triggers = triggers();

        assert!(is_mention(&message("C1", "U1", "Have you seen BENEDICT lately?"), &triggers));
        assert!(is_mention(&message("C1", "U1", "cumberbatches everywhere"), &triggers));
        assert!(is_mention(&message("C1", "U1", "ping @BenedictBot"), &triggers));
        assert!(!is_mention(&message("C1", "U1", "Sherlock is on tonight"), &triggers));
    }

    #[test]
    fn first_matching_trigger_wins() {
        let triggers = triggers();

        assert_eq!(triggers.find("cumberbatch, benedict"), Some("benedict"));
        assert_eq!(triggers.find("hey @benedictbot"), Some("benedict"));
        assert_eq!(triggers.iter().collect::<Vec<_>>(), vec!["benedict", "cumberbatch", "@benedictbot", "benedictbot"]);
    }

    #[test]
    fn reaction_events_need_a_name() {
        let reaction = ChatEvent {
            kind: EventKind::ReactionRemoved,
            text: None,
            reaction_name: Some("tada".to_string()),
            ..message("C1", "U1", "")
        };

        assert!(is_reaction_event(&reaction));
        assert!(!is_reaction_event(&ChatEvent { reaction_name: Some(String::new()), ..reaction.clone() }));
        assert!(!is_reaction_event(&ChatEvent { kind: EventKind::Message, ..reaction }));
    }
}
