//! Slack implementation of the chat service.
//!
//! This module provides the Slack side of the bot:
//! - Receiving push events over Socket Mode and queueing them for the runtime
//! - Posting messages (optionally with interactive attachments) to channels by name
//! - Looking up users and channels in the workspace directory

use crate::base::{
    config::Config,
    types::{ChatEvent, DirectoryEntry, EventSender, PostOptions, Res, Void},
};
use async_trait::async_trait;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use serde::Serialize;
use slack_morphism::prelude::*;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use std::sync::Arc;

use super::{ChatClient, GenericChatClient};

// Type aliases.

type FullClient = slack_morphism::SlackClient<SlackClientHyperConnector<HttpsConnector<HttpConnector>>>;

/// Page size for directory listings.
const DIRECTORY_PAGE_LIMIT: u16 = 200;

// Extra methods on `ChatClient` applied by the slack implementation.

impl ChatClient {
    /// Creates a new Slack chat client.
    pub async fn slack(config: &Config) -> Res<Self> {
        let client = SlackChatClient::new(config).await?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Structs.

/// User state for the slack socket client.
struct SlackUserState {
    events: EventSender,
}

/// Body of a `chat.postMessage` call.
///
/// Sent raw since the typed request has no room for legacy attachment actions.
#[derive(Debug, Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    text: &'a str,
    as_user: bool,
    link_names: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<String>,
}

/// Slack client implementation.
struct SlackChatClient {
    app_token: SlackApiToken,
    bot_token: SlackApiToken,
    client: Arc<FullClient>,
    channels: Arc<RwLock<Vec<DirectoryEntry>>>,
}

impl SlackChatClient {
    /// Create a new Slack chat client.
    #[instrument(name = "SlackChatClient::new", skip_all)]
    pub async fn new(config: &Config) -> Res<Self> {
        // Initialize tokens.

        let app_token = SlackApiToken::new(SlackApiTokenValue(config.slack_app_token.clone()));
        let bot_token = SlackApiToken::new(SlackApiTokenValue(config.slack_bot_token.clone()));

        // Initialize the Slack client.

        let https_connector = HttpsConnector::<HttpConnector>::builder().with_native_roots()?.https_only().enable_all_versions().build();
        let connector = SlackClientHyperConnector::with_connector(https_connector);
        let client = Arc::new(slack_morphism::SlackClient::new(connector));

        // Make sure the bot token works before going any further.

        let session = client.open_session(&bot_token);
        let auth = session.auth_test().await?;

        info!("Authenticated to Slack as user `{}`.", auth.user_id.0);

        Ok(Self {
            app_token,
            bot_token,
            client,
            channels: Arc::new(RwLock::new(Vec::new())),
        })
    }

    /// Resolves a channel name to its id, refreshing the directory once on a miss.
    async fn channel_id_by_name(&self, channel_name: &str) -> Res<String> {
        let name = channel_name.trim_start_matches('#');

        let cached = self.channels.read().await.iter().find(|c| c.name == name).map(|c| c.id.clone());
        if let Some(id) = cached {
            return Ok(id);
        }

        self.refresh_channels()
            .await?
            .into_iter()
            .find(|c| c.name == name)
            .map(|c| c.id)
            .ok_or_else(|| anyhow::anyhow!("Unknown channel `{}`.", channel_name))
    }
}

#[async_trait]
impl GenericChatClient for SlackChatClient {
    async fn start(&self, events: EventSender) -> Void {
        // Initialize the socket mode listener.

        let socket_mode_callbacks = SlackSocketModeListenerCallbacks::new()
            .with_command_events(handle_command_event)
            .with_interaction_events(handle_interaction_event)
            .with_push_events(handle_push_event);

        // Initialize the socket mode listener environment.

        let listener_environment = Arc::new(SlackClientEventsListenerEnvironment::new(self.client.clone()).with_user_state(SlackUserState { events }));

        let socket_mode_listener = Arc::new(SlackClientSocketModeListener::new(
            &SlackClientSocketModeConfig::new(),
            listener_environment.clone(),
            socket_mode_callbacks,
        ));

        // Register an app token to listen for events,
        socket_mode_listener.listen_for(&self.app_token).await?;

        // Serve until the process is interrupted; push events land on the queue meanwhile.
        socket_mode_listener.serve().await;

        Ok(())
    }

    #[instrument(skip(self, text, options))]
    async fn post_message_to_channel(&self, channel_name: &str, text: &str, options: &PostOptions) -> Void {
        let channel_id = self.channel_id_by_name(channel_name).await?;

        let attachments = options.attachments.as_ref().map(serde_json::to_string).transpose()?;

        let request = PostMessageRequest {
            channel: &channel_id,
            text,
            as_user: options.as_user,
            link_names: true,
            attachments,
        };

        let session = self.client.open_session(&self.bot_token);

        let _: serde_json::Value = session
            .http_session_api
            .http_post("chat.postMessage", &request, None)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Res<Vec<DirectoryEntry>> {
        let session = self.client.open_session(&self.bot_token);

        let mut users = Vec::new();
        let mut cursor = None;

        loop {
            let mut request = SlackApiUsersListRequest::new().with_limit(DIRECTORY_PAGE_LIMIT);
            request.cursor = cursor;

            let response = session.users_list(&request).await?;
            users.extend(serde_json::from_value::<Vec<DirectoryEntry>>(serde_json::to_value(&response.members)?)?);

            cursor = next_cursor(response.response_metadata);
            if cursor.is_none() {
                break;
            }
        }

        debug!("Loaded {} users.", users.len());

        Ok(users)
    }

    #[instrument(skip(self))]
    async fn list_channels(&self) -> Res<Vec<DirectoryEntry>> {
        let cached = self.channels.read().await.clone();
        if !cached.is_empty() {
            return Ok(cached);
        }

        self.refresh_channels().await
    }

    /// Re-fetches public and private channels, page by page, and replaces the cache.
    #[instrument(skip(self))]
    async fn refresh_channels(&self) -> Res<Vec<DirectoryEntry>> {
        let session = self.client.open_session(&self.bot_token);

        let mut channels = Vec::new();
        let mut cursor = None;

        loop {
            let mut request = SlackApiConversationsListRequest::new()
                .with_exclude_archived(true)
                .with_limit(DIRECTORY_PAGE_LIMIT)
                .with_types(vec![SlackConversationType::Public, SlackConversationType::Private]);
            request.cursor = cursor;

            let response = session.conversations_list(&request).await?;
            channels.extend(serde_json::from_value::<Vec<DirectoryEntry>>(serde_json::to_value(&response.channels)?)?);

            cursor = next_cursor(response.response_metadata);
            if cursor.is_none() {
                break;
            }
        }

        debug!("Loaded {} channels.", channels.len());

        *self.channels.write().await = channels.clone();

        Ok(channels)
    }
}

/// Cursor for the next directory page; Slack marks the last page with an empty or missing cursor.
fn next_cursor(metadata: Option<SlackResponseMetadata>) -> Option<SlackCursorId> {
    metadata.and_then(|m| m.next_cursor).filter(|c| !c.0.is_empty())
}

// Socket mode listener callbacks for Slack.

/// Handles command events from Slack.
async fn handle_command_event(
    event: SlackCommandEvent,
    _client: Arc<SlackHyperClient>,
    _states: SlackClientEventsUserState,
) -> Result<SlackCommandEventResponse, Box<dyn std::error::Error + Send + Sync>> {
    warn!("[COMMAND] {:#?}", event);
    Ok(SlackCommandEventResponse::new(SlackMessageContent::new().with_text("No slash commands are currently supported.".into())))
}

/// Handles interaction events from Slack (e.g., escalation prompt buttons).
async fn handle_interaction_event(event: SlackInteractionEvent, _client: Arc<SlackHyperClient>, _states: SlackClientEventsUserState) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("[INTERACTION] {:#?}", event);
    Ok(())
}

/// Handles push events from Slack.
///
/// Events are decoded from their wire form and queued; the runtime handles them one at a time.
#[instrument(skip_all)]
async fn handle_push_event(event_callback: SlackPushEventCallback, _client: Arc<SlackHyperClient>, states: SlackClientEventsUserState) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let states = states.read().await;
    let user_state = states.get_user_state::<SlackUserState>().ok_or(anyhow::anyhow!("Failed to get user state"))?;

    let event = match serde_json::to_value(&event_callback.event).and_then(serde_json::from_value::<ChatEvent>) {
        Ok(event) => event,
        Err(err) => {
            warn!("Dropping push event that could not be decoded: {}", err);
            return Ok(());
        }
    };

    debug!("Received {:?} event.", event.kind);

    user_state.events.send(event).map_err(|_| anyhow::anyhow!("Event queue is closed"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata(value: serde_json::Value) -> Option<SlackResponseMetadata> {
        Some(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn next_cursor_follows_a_non_empty_cursor() {
        let cursor = next_cursor(metadata(json!({ "next_cursor": "dGVhbTpDMDYxRkE1UEI=" })));

        assert_eq!(cursor, Some(SlackCursorId("dGVhbTpDMDYxRkE1UEI=".to_string())));
    }

    #[test]
    fn next_cursor_stops_on_the_last_page() {
        assert_eq!(next_cursor(metadata(json!({ "next_cursor": "" }))), None);
        assert_eq!(next_cursor(metadata(json!({}))), None);
        assert_eq!(next_cursor(None), None);
    }

    #[test]
    fn post_message_request_encodes_attachments_as_a_string() {
        let request = PostMessageRequest {
            channel: "C0OPS",
            text: "hello",
            as_user: true,
            link_names: true,
            attachments: Some("[]".to_string()),
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["channel"], "C0OPS");
        assert_eq!(value["attachments"], "[]");
    }
}
