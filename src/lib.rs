//! Library root for `benedict-bot`.
//!
//! Benedict-bot is a Slack bot that lurks in channels and:
//! - Answers mentions of its name with a randomly mangled version of it
//! - Answers a few trigger keywords with canned (sometimes seasonal) lines
//! - Posts an escalation prompt when a message collects enough reactions
//!
//! The bot integrates with Slack for chat and keeps reaction counts in memory.
//! The architecture is built around traits for each service, so the
//! classification logic can be driven by mocks in tests.

pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use rustls::crypto;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the benedict-bot runtime:
/// - Initializes the crypto provider
/// - Creates the runtime context with the chat client and reaction store
/// - Starts the main event loop for processing events
pub async fn start(config: Config) -> Void {
    info!("Starting benedict-bot ...");

    // Start the crypto provider.
    crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("A crypto provider is already installed."))?;

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
