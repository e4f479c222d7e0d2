//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the services used by the benedict-bot:
//! - Chat services (e.g., Slack)
//! - Reaction count storage (e.g., in-memory)
//!
//! Each service module defines both a generic trait and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod chat;
pub mod reactions;
