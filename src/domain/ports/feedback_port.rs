//! Callbacks invoked for inbound user feedback.

use async_trait::async_trait;

use crate::domain::entities::IllustId;

/// Receives like/dislike style feedback about a delivered illustration.
#[async_trait]
pub trait FeedbackHandler: Send + Sync {
    /// Handles `action` taken on `illust_id`.
    async fn on_feedback(&self, illust_id: IllustId, action: &str);
}

/// Receives free-standing actions not tied to an illustration.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Handles `action`.
    async fn on_action(&self, action: &str);
}
