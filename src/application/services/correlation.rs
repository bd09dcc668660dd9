//! Delivered-message to illustration lookup.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::entities::{GatewayMessageId, IllustId};

/// Maps gateway message ids back to the illustration they carried.
///
/// Entries are never evicted; the map lives as long as its owner.
#[derive(Debug, Clone, Default)]
pub struct CorrelationMap {
    entries: Arc<RwLock<HashMap<GatewayMessageId, IllustId>>>,
}

impl CorrelationMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `message_id` delivered `illust_id`. A repeated id overwrites.
    pub fn record(&self, message_id: GatewayMessageId, illust_id: IllustId) {
        self.entries.write().insert(message_id, illust_id);
    }

    /// Looks up the illustration for a delivered message.
    #[must_use]
    pub fn get(&self, message_id: &GatewayMessageId) -> Option<IllustId> {
        self.entries.read().get(message_id).copied()
    }

    /// Returns a point-in-time copy of all entries.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<GatewayMessageId, IllustId> {
        self.entries.read().clone()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let map = CorrelationMap::new();
        map.record(GatewayMessageId::from(42), IllustId(7));

        assert_eq!(map.get(&GatewayMessageId::from("42")), Some(IllustId(7)));
        assert_eq!(map.get(&GatewayMessageId::from(43)), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let map = CorrelationMap::new();
        map.record(GatewayMessageId::from(1), IllustId(10));
        map.record(GatewayMessageId::from(1), IllustId(11));

        assert_eq!(map.get(&GatewayMessageId::from(1)), Some(IllustId(11)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let map = CorrelationMap::new();
        let view = map.clone();
        map.record(GatewayMessageId::from("m-1"), IllustId(3));

        assert_eq!(view.snapshot().len(), 1);
        assert!(!view.is_empty());
    }
}
