// src/domain/article/read_time.rs
use crate::domain::article::value_objects::ArticleContent;

pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time in whole minutes, never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadTime(u32);

impl ReadTime {
    pub fn from_content(content: &ArticleContent) -> Self {
        Self::from_text(content.as_str())
    }

    pub fn from_text(text: &str) -> Self {
        let words = text.split_whitespace().count();
        let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
        Self(u32::try_from(minutes).unwrap_or(u32::MAX))
    }

    /// Rehydrate a stored value. Zero and negatives collapse to one minute.
    pub fn from_stored(minutes: i32) -> Self {
        Self(u32::try_from(minutes.max(1)).unwrap_or(1))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl From<ReadTime> for i32 {
    fn from(value: ReadTime) -> Self {
        i32::try_from(value.0).unwrap_or(i32::MAX)
    }
}
