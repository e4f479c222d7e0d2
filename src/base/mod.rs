//! Core components, types, and utilities for the benedict-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Fixed phrases: name lists, joke templates, and canned messages.
//! - Common types and result handling.

pub mod config;
pub mod phrases;
pub mod types;
