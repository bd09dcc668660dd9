//! Fallback image links on a mirror host.

use crate::domain::entities::IllustId;

/// Placeholder replaced by the illustration id.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Default mirror serving illustration covers by id.
pub const DEFAULT_MIRROR_TEMPLATE: &str = "https://pixiv.cat/{id}.jpg";

/// URL template for the fallback image link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorUrl {
    template: String,
}

impl Default for MirrorUrl {
    fn default() -> Self {
        Self::new(DEFAULT_MIRROR_TEMPLATE)
    }
}

impl MirrorUrl {
    /// Creates a template. Without a `{id}` placeholder the id is appended.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Builds the mirror URL for `id`.
    #[must_use]
    pub fn for_illust(&self, id: IllustId) -> String {
        if self.template.contains(ID_PLACEHOLDER) {
            self.template.replace(ID_PLACEHOLDER, &id.to_string())
        } else {
            format!("{}/{id}", self.template.trim_end_matches('/'))
        }
    }
}
