//! Batch delivery of illustration notifications.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::correlation::CorrelationMap;
use super::image_transcoder::ImageTranscoder;
use super::message_formatter::MessageFormatter;
use super::mirror_url::MirrorUrl;
use crate::domain::entities::{
    DeliveryResult, GatewayMessageId, IllustId, IllustrationRecord, MessageChain, MessageSegment,
    TextButton,
};
use crate::domain::errors::DeliveryError;
use crate::domain::ports::{DeliveryPort, PacerPort};

/// Pushes illustrations to the gateway one at a time.
///
/// Each record becomes a chain of an optional cover image followed by its
/// caption. Records are delivered strictly sequentially with a pause after
/// every attempt; a failing record is logged and skipped.
pub struct PushDispatcher {
    delivery: Arc<dyn DeliveryPort>,
    transcoder: ImageTranscoder,
    formatter: MessageFormatter,
    pacer: Arc<dyn PacerPort>,
    mirror: MirrorUrl,
    correlations: CorrelationMap,
}

impl std::fmt::Debug for PushDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushDispatcher")
            .field("formatter", &self.formatter)
            .field("mirror", &self.mirror)
            .field("correlations", &self.correlations.len())
            .finish_non_exhaustive()
    }
}

impl PushDispatcher {
    /// Creates a dispatcher with the default formatter and mirror.
    #[must_use]
    pub fn new(
        delivery: Arc<dyn DeliveryPort>,
        transcoder: ImageTranscoder,
        pacer: Arc<dyn PacerPort>,
    ) -> Self {
        Self {
            delivery,
            transcoder,
            formatter: MessageFormatter::default(),
            pacer,
            mirror: MirrorUrl::default(),
            correlations: CorrelationMap::new(),
        }
    }

    /// Replaces the caption formatter.
    #[must_use]
    pub const fn with_formatter(mut self, formatter: MessageFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Replaces the fallback mirror.
    #[must_use]
    pub fn with_mirror(mut self, mirror: MirrorUrl) -> Self {
        self.mirror = mirror;
        self
    }

    /// Returns the caption formatter.
    #[must_use]
    pub const fn formatter(&self) -> &MessageFormatter {
        &self.formatter
    }

    /// Delivers `records` in order and returns the ids the gateway accepted.
    pub async fn send(&self, records: &[IllustrationRecord]) -> Vec<IllustId> {
        if records.is_empty() {
            return Vec::new();
        }

        let mut delivered = Vec::with_capacity(records.len());

        for record in records {
            match self.push_one(record).await {
                Ok(result) => {
                    delivered.push(record.id);
                    if let Some(message_id) = result.message_id {
                        debug!(
                            illust_id = %record.id,
                            message_id = %message_id,
                            "Recorded message mapping"
                        );
                        self.correlations.record(message_id, record.id);
                    }
                }
                Err(e) => warn!(illust_id = %record.id, error = %e, "Failed to push illustration"),
            }

            self.pacer.pause().await;
        }

        info!(
            succeeded = delivered.len(),
            total = records.len(),
            "Push finished: {}/{}",
            delivered.len(),
            records.len()
        );

        delivered
    }

    async fn push_one(&self, record: &IllustrationRecord) -> Result<DeliveryResult, DeliveryError> {
        let chain = self.build_chain(record).await;
        self.delivery.post(&chain).await
    }

    /// Builds the outbound chain for one record: cover image (inline, or a
    /// mirror link if transcoding fails) followed by the caption.
    pub async fn build_chain(&self, record: &IllustrationRecord) -> MessageChain {
        let mut chain = MessageChain::new();

        if let Some(cover) = record.cover_url() {
            match self.transcoder.fetch_and_compress(cover).await {
                Some(jpeg) => chain.push(MessageSegment::Image(jpeg)),
                None => {
                    let link = self.mirror.for_illust(record.id);
                    debug!(illust_id = %record.id, url = %link, "Falling back to mirror link");
                    chain.push(MessageSegment::ImageLink(link));
                }
            }
        }

        chain.push(MessageSegment::Text(self.formatter.format(record)));
        chain
    }

    /// Sends a plain text message.
    ///
    /// The gateway has no interactive buttons, so `buttons` are appended to
    /// the text as a bulleted list of labels.
    pub async fn send_text(&self, text: &str, buttons: &[TextButton]) -> bool {
        let body = render_text_with_buttons(text, buttons);
        let chain = MessageChain::new().with(MessageSegment::Text(body));

        match self.delivery.post(&chain).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Failed to send text message");
                false
            }
        }
    }

    /// Resolves a delivered message back to its illustration.
    #[must_use]
    pub fn illust_for_message(&self, message_id: &GatewayMessageId) -> Option<IllustId> {
        self.correlations.get(message_id)
    }

    /// Returns a copy of the message to illustration map.
    #[must_use]
    pub fn correlations(&self) -> HashMap<GatewayMessageId, IllustId> {
        self.correlations.snapshot()
    }

    /// Releases the delivery session. The dispatcher never does this on its own.
    pub async fn close(&self) {
        self.delivery.close().await;
    }
}

fn render_text_with_buttons(text: &str, buttons: &[TextButton]) -> String {
    if buttons.is_empty() {
        return text.to_string();
    }

    let list = buttons
        .iter()
        .map(|button| format!("• {}", button.label))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{text}\n\n{list}")
}
