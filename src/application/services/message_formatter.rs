//! Caption rendering for illustration notifications.

use std::fmt::Write as _;

use crate::domain::entities::IllustrationRecord;

/// Base of the canonical illustration permalink.
pub const PERMALINK_BASE: &str = "https://pixiv.net/i/";

/// Tags shown per caption.
pub const MAX_CAPTION_TAGS: usize = 5;

const LONG_FORM_MARK: &str = "📚 ";
const ADULT_MARK: &str = "🔞 ";
const ANIMATED_MARK: &str = "🎞️ ";

/// Renders illustration records into chat captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFormatter {
    max_pages: u32,
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_PAGES)
    }
}

impl MessageFormatter {
    /// Page count above which a work is marked long-form.
    pub const DEFAULT_MAX_PAGES: u32 = 10;

    /// Creates a formatter with the given long-form threshold.
    #[must_use]
    pub const fn new(max_pages: u32) -> Self {
        Self { max_pages }
    }

    /// Returns the long-form threshold.
    #[must_use]
    pub const fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Renders the caption for `record`.
    #[must_use]
    pub fn format(&self, record: &IllustrationRecord) -> String {
        let mut caption = String::new();

        if record.page_count > self.max_pages {
            caption.push_str(LONG_FORM_MARK);
        }
        if record.is_r18 {
            caption.push_str(ADULT_MARK);
        }
        if record.kind.is_animated() {
            caption.push_str(ANIMATED_MARK);
        }

        let _ = write!(caption, "🎨 {}", record.title);
        if record.page_count > 1 {
            let _ = write!(caption, " ({}P)", record.page_count);
        }
        caption.push('\n');

        let _ = writeln!(caption, "👤 {}", record.user_name);
        let _ = writeln!(caption, "❤️ {}", record.bookmark_count);

        if let Some(score) = record.match_score {
            let _ = writeln!(caption, "🎯 Match: {:.0}%", score * 100.0);
        }

        let tags = record
            .tags
            .iter()
            .take(MAX_CAPTION_TAGS)
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(caption, "🏷️ {tags}");

        let _ = writeln!(caption, "🔗 {PERMALINK_BASE}{}", record.id);
        caption.push('\n');
        let _ = write!(caption, "Reply {} 1=like 2=dislike", record.id);

        caption
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ContentKind;
    use test_case::test_case;

    fn record() -> IllustrationRecord {
        IllustrationRecord::new(123_456u64, "Morning Light", "artist")
            .with_tags(["landscape", "sky"])
    }

    #[test]
    fn test_full_caption_layout() {
        let mut rec = record();
        rec.bookmark_count = 321;

        let caption = MessageFormatter::default().format(&rec);

        assert_eq!(
            caption,
            "🎨 Morning Light\n\
             👤 artist\n\
             ❤️ 321\n\
             🏷️ #landscape #sky\n\
             🔗 https://pixiv.net/i/123456\n\
             \n\
             Reply 123456 1=like 2=dislike"
        );
    }

    #[test_case(0, false ; "zero_pages")]
    #[test_case(1, false ; "single_page")]
    #[test_case(2, true ; "two_pages")]
    #[test_case(25, true ; "many_pages")]
    fn test_page_suffix(page_count: u32, expected: bool) {
        let rec = record().with_page_count(page_count);
        let caption = MessageFormatter::default().format(&rec);
        let suffix = format!("({page_count}P)");

        assert_eq!(caption.contains(&suffix), expected);
    }

    #[test_case(10, 10, false ; "at_threshold")]
    #[test_case(11, 10, true ; "above_threshold")]
    #[test_case(3, 2, true ; "custom_threshold")]
    #[test_case(1, 10, false ; "single_page")]
    fn test_long_form_marker(page_count: u32, max_pages: u32, expected: bool) {
        let rec = record().with_page_count(page_count);
        let caption = MessageFormatter::new(max_pages).format(&rec);

        assert_eq!(caption.starts_with(LONG_FORM_MARK), expected);
    }

    #[test]
    fn test_marker_order() {
        let mut rec = record().with_page_count(20);
        rec.is_r18 = true;
        rec.kind = ContentKind::Ugoira;

        let caption = MessageFormatter::default().format(&rec);

        assert!(caption.starts_with("📚 🔞 🎞️ 🎨 Morning Light (20P)\n"));
    }

    #[test_case(Some(0.876), Some("🎯 Match: 88%") ; "rounds_up")]
    #[test_case(Some(0.5), Some("🎯 Match: 50%") ; "exact")]
    #[test_case(Some(1.0), Some("🎯 Match: 100%") ; "full")]
    #[test_case(None, None ; "absent")]
    fn test_match_score_line(score: Option<f64>, expected: Option<&str>) {
        let mut rec = record();
        rec.match_score = score;

        let caption = MessageFormatter::default().format(&rec);

        match expected {
            Some(line) => assert!(caption.contains(line), "{caption}"),
            None => assert!(!caption.contains("🎯")),
        }
    }

    #[test]
    fn test_tags_limited_to_five() {
        let rec = record().with_tags(["a", "b", "c", "d", "e", "f", "g"]);
        let caption = MessageFormatter::default().format(&rec);

        assert!(caption.contains("🏷️ #a #b #c #d #e\n"));
        assert!(!caption.contains("#f"));
    }

    #[test]
    fn test_deterministic() {
        let formatter = MessageFormatter::default();
        let rec = record().with_page_count(4);

        assert_eq!(formatter.format(&rec), formatter.format(&rec));
    }
}
