//! Wire format of the gateway send endpoint.

use base64::{Engine as _, engine::general_purpose};
use serde::Serialize;

use crate::domain::entities::{MessageChain, MessageSegment};

/// Body of `POST /api/v1/send`.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub unified_msg_origin: &'a str,
    pub message: Vec<SegmentDto<'a>>,
}

impl<'a> SendRequest<'a> {
    pub fn new(destination: &'a str, chain: &'a MessageChain) -> Self {
        Self {
            unified_msg_origin: destination,
            message: chain.segments().iter().map(SegmentDto::from).collect(),
        }
    }
}

/// One message chain element as the gateway expects it.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum SegmentDto<'a> {
    Plain {
        text: &'a str,
    },
    Image {
        #[serde(skip_serializing_if = "Option::is_none")]
        base64: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<&'a str>,
    },
}

impl<'a> From<&'a MessageSegment> for SegmentDto<'a> {
    fn from(segment: &'a MessageSegment) -> Self {
        match segment {
            MessageSegment::Text(text) => Self::Plain {
                text: text.as_str(),
            },
            MessageSegment::Image(bytes) => Self::Image {
                base64: Some(general_purpose::STANDARD.encode(bytes)),
                url: None,
            },
            MessageSegment::ImageLink(url) => Self::Image {
                base64: None,
                url: Some(url.as_str()),
            },
        }
    }
}
