//! Event handling and user interactions for benedict-bot.
//!
//! This module provides functionality for handling chat events:
//! - Classifying incoming messages and reactions
//! - Picking a reply: name jokes, keyword responses, escalation prompts
//! - Sending replies back through the chat service

pub mod classify;
pub mod escalation;
pub mod keywords;
pub mod name_joke;
pub mod responder;
