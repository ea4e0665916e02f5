//! Memo record type.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::{MemocalError, MemocalResult};

/// A user note attached to a date, with optional reminder time.
///
/// Memos are plain values: equality covers all three fields, and removal
/// from a store matches by full value. Empty content is permitted here;
/// the front end rejects it before creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub content: String,
}

impl Memo {
    pub fn new(date: NaiveDate, time: Option<NaiveTime>, content: impl Into<String>) -> Memo {
        Memo {
            date,
            time,
            content: content.into(),
        }
    }

    /// Truncated caption for a day cell: at most `width` characters,
    /// with "..." appended when the content was cut.
    pub fn preview(&self, width: usize) -> String {
        if self.content.chars().count() > width {
            let cut: String = self.content.chars().take(width).collect();
            format!("{}...", cut)
        } else {
            self.content.clone()
        }
    }

    /// Check that the content can pass through the flat encoding untouched.
    ///
    /// The codec performs no escaping, so content carrying a field or
    /// record separator (or a line break) would corrupt the store on the
    /// next save. Rejected up front instead.
    pub fn validate_content(content: &str) -> MemocalResult<()> {
        for reserved in [
            codec::FIELD_SEPARATOR,
            codec::RECORD_SEPARATOR,
            '\n',
            '\r',
        ] {
            if content.contains(reserved) {
                return Err(MemocalError::ReservedCharacter(reserved));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memo(content: &str) -> Memo {
        Memo::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            None,
            content,
        )
    }

    // --- preview ---

    #[test]
    fn preview_keeps_short_content() {
        assert_eq!(memo("lunch").preview(5), "lunch");
        assert_eq!(memo("").preview(5), "");
    }

    #[test]
    fn preview_truncates_long_content() {
        assert_eq!(memo("dentist").preview(5), "denti...");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        assert_eq!(memo("日本語の予定です").preview(5), "日本語の予...");
    }

    // --- validate_content ---

    #[test]
    fn validate_accepts_plain_text() {
        assert!(Memo::validate_content("dentist at 12:30?").is_ok());
        assert!(Memo::validate_content("").is_ok());
    }

    #[test]
    fn validate_rejects_reserved_characters() {
        assert!(matches!(
            Memo::validate_content("a|b"),
            Err(MemocalError::ReservedCharacter('|'))
        ));
        assert!(matches!(
            Memo::validate_content("a;b"),
            Err(MemocalError::ReservedCharacter(';'))
        ));
        assert!(Memo::validate_content("a\nb").is_err());
    }
}
