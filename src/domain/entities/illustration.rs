//! Illustration records supplied by the upstream content source.

use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::string_or_u64;

/// Unique identifier for an illustration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IllustId(pub u64);

impl std::fmt::Display for IllustId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IllustId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// What the illustration's pages contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Static image pages.
    #[default]
    Illust,
    /// Static manga pages.
    Manga,
    /// Animated frame sequence.
    Ugoira,
}

impl ContentKind {
    /// Returns true for animated frame sequences.
    #[must_use]
    pub const fn is_animated(self) -> bool {
        matches!(self, Self::Ugoira)
    }
}

/// Read-only illustration metadata handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IllustrationRecord {
    /// Illustration id.
    #[serde(deserialize_with = "deserialize_illust_id")]
    pub id: IllustId,
    /// Title.
    pub title: String,
    /// Author display name.
    pub user_name: String,
    /// Number of bookmarks.
    #[serde(default)]
    pub bookmark_count: u64,
    /// Tags in upstream order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Number of pages.
    #[serde(default = "default_page_count")]
    pub page_count: u32,
    /// Content kind.
    #[serde(default, rename = "type")]
    pub kind: ContentKind,
    /// Adult-content flag.
    #[serde(default)]
    pub is_r18: bool,
    /// Recommendation match score in `0.0..=1.0`.
    #[serde(default)]
    pub match_score: Option<f64>,
    /// Image URLs, cover first.
    #[serde(default)]
    pub image_urls: Vec<String>,
}

fn default_page_count() -> u32 {
    1
}

fn deserialize_illust_id<'de, D>(deserializer: D) -> Result<IllustId, D::Error>
where
    D: serde::Deserializer<'de>,
{
    string_or_u64::deserialize(deserializer).map(IllustId)
}

impl IllustrationRecord {
    /// Creates a single-page record with no tags, images or score.
    #[must_use]
    pub fn new(
        id: impl Into<IllustId>,
        title: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            user_name: user_name.into(),
            bookmark_count: 0,
            tags: Vec::new(),
            page_count: 1,
            kind: ContentKind::Illust,
            is_r18: false,
            match_score: None,
            image_urls: Vec::new(),
        }
    }

    /// Returns the cover image URL, if any.
    #[must_use]
    pub fn cover_url(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    /// Sets the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the image URL list.
    #[must_use]
    pub fn with_image_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the page count.
    #[must_use]
    pub const fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = page_count;
        self
    }
}
