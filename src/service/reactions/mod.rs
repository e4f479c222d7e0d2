pub mod memory;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{ReactionChange, ReactionKey, Res};

// Traits.

/// Generic reaction counter store that clients must implement.
///
/// Counts are kept per message and never drop below zero.
#[async_trait]
pub trait GenericReactionStore: Send + Sync + 'static {
    /// Applies a reaction change to the count for `key` and returns the new count.
    async fn adjust(&self, key: &ReactionKey, change: ReactionChange) -> Res<u32>;

    /// Gets the current count for `key`; unknown keys count zero.
    async fn count(&self, key: &ReactionKey) -> Res<u32>;
}

// Structs.

/// Reaction store for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ReactionStore {
    inner: Arc<dyn GenericReactionStore>,
}

impl Deref for ReactionStore {
    type Target = dyn GenericReactionStore;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ReactionStore {
    pub fn new(inner: Arc<dyn GenericReactionStore>) -> Self {
        Self { inner }
    }
}
