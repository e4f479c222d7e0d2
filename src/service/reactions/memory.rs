//! In-memory reaction counts; lost on restart.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::trace;

use crate::base::types::{ReactionChange, ReactionKey, Res};

use super::{GenericReactionStore, ReactionStore};

impl ReactionStore {
    /// Creates an empty in-memory reaction store.
    pub fn memory() -> Self {
        Self::new(Arc::new(MemoryReactionStore::default()))
    }
}

/// Reaction counts held in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryReactionStore {
    counts: Mutex<HashMap<ReactionKey, u32>>,
}

#[async_trait]
impl GenericReactionStore for MemoryReactionStore {
    async fn adjust(&self, key: &ReactionKey, change: ReactionChange) -> Res<u32> {
        let mut counts = self.counts.lock().await;
        let count = counts.entry(key.clone()).or_insert(0);

        *count = match change {
            ReactionChange::Added => count.saturating_add(1),
            ReactionChange::Removed => count.saturating_sub(1),
        };

        trace!("Reaction count for {:?} is now {}.", key, count);

        Ok(*count)
    }

    async fn count(&self, key: &ReactionKey) -> Res<u32> {
        Ok(self.counts.lock().await.get(key).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(ts: &str) -> ReactionKey {
        ReactionKey {
            channel_id: "C0123".to_string(),
            timestamp: ts.to_string(),
        }
    }

    #[tokio::test]
    async fn adds_and_removes_per_message() {
        let store = ReactionStore::memory();

        assert_eq!(store.adjust(&key("1"), ReactionChange::Added).await.unwrap(), 1);
        assert_eq!(store.adjust(&key("1"), ReactionChange::Added).await.unwrap(), 2);
        assert_eq!(store.adjust(&key("2"), ReactionChange::Added).await.unwrap(), 1);
        assert_eq!(store.adjust(&key("1"), ReactionChange::Removed).await.unwrap(), 1);

        assert_eq!(store.count(&key("1")).await.unwrap(), 1);
        assert_eq!(store.count(&key("2")).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn counts_never_go_negative() {
        let store = ReactionStore::memory();

        assert_eq!(store.adjust(&key("1"), ReactionChange::Removed).await.unwrap(), 0);
        assert_eq!(store.adjust(&key("1"), ReactionChange::Removed).await.unwrap(), 0);
        assert_eq!(store.adjust(&key("1"), ReactionChange::Added).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unknown_keys_count_zero() {
        let store = ReactionStore::memory();

        assert_eq!(store.count(&key("never")).await.unwrap(), 0);
    }
}
