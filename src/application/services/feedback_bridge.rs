//! Forwards inbound user feedback to external callbacks.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::IllustId;
use crate::domain::ports::{ActionHandler, FeedbackHandler};

/// Sink for feedback arriving from the gateway.
///
/// Every call is acknowledged; a missing callback makes it a no-op.
#[derive(Clone, Default)]
pub struct FeedbackBridge {
    on_feedback: Option<Arc<dyn FeedbackHandler>>,
    on_action: Option<Arc<dyn ActionHandler>>,
}

impl std::fmt::Debug for FeedbackBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackBridge")
            .field("on_feedback", &self.on_feedback.is_some())
            .field("on_action", &self.on_action.is_some())
            .finish()
    }
}

impl FeedbackBridge {
    /// Creates a bridge with no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the feedback callback.
    #[must_use]
    pub fn with_feedback_handler(mut self, handler: Arc<dyn FeedbackHandler>) -> Self {
        self.on_feedback = Some(handler);
        self
    }

    /// Sets the action callback.
    #[must_use]
    pub fn with_action_handler(mut self, handler: Arc<dyn ActionHandler>) -> Self {
        self.on_action = Some(handler);
        self
    }

    /// Forwards feedback on `illust_id`. Always returns true.
    pub async fn handle_feedback(&self, illust_id: IllustId, action: &str) -> bool {
        match &self.on_feedback {
            Some(handler) => handler.on_feedback(illust_id, action).await,
            None => debug!(illust_id = %illust_id, action, "No feedback handler configured"),
        }
        true
    }

    /// Forwards a free-standing action. Always returns true.
    pub async fn handle_action(&self, action: &str) -> bool {
        match &self.on_action {
            Some(handler) => handler.on_action(action).await,
            None => debug!(action, "No action handler configured"),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::RecordingHandler;

    #[tokio::test]
    async fn test_without_callback_acknowledges() {
        let bridge = FeedbackBridge::new();

        assert!(bridge.handle_feedback(IllustId(1), "like").await);
        assert!(bridge.handle_action("refresh").await);
    }

    #[tokio::test]
    async fn test_forwards_to_callbacks() {
        let handler = Arc::new(RecordingHandler::new());
        let bridge = FeedbackBridge::new()
            .with_feedback_handler(handler.clone())
            .with_action_handler(handler.clone());

        assert!(bridge.handle_feedback(IllustId(99), "dislike").await);
        assert!(bridge.handle_action("pause").await);

        assert_eq!(
            handler.feedback.lock().as_slice(),
            &[(IllustId(99), "dislike".to_string())]
        );
        assert_eq!(handler.actions.lock().as_slice(), &["pause".to_string()]);
    }
}
