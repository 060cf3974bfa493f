use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Post entity - a single bulletin board entry.
///
/// All fields are fixed at creation; edits are not part of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub timestamp: i64,
    pub created_at: String,
}

impl Post {
    /// Create a new post attributed to `author`.
    ///
    /// The id is `<unix-seconds>-<8 lowercase hex chars>`. Title and content
    /// are trimmed of surrounding whitespace; the title is additionally cut
    /// to [`TITLE_MAX_CHARS`] characters. Content validation (non-empty) is
    /// the caller's responsibility.
    pub fn new(author: impl Into<String>, title: &str, content: &str) -> Self {
        let now = Utc::now();
        Self {
            id: format!("{}-{:08x}", now.timestamp(), rand::random::<u32>()),
            author: author.into(),
            title: truncate_chars(title.trim(), TITLE_MAX_CHARS),
            content: content.trim().to_string(),
            timestamp: now.timestamp(),
            created_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Cut `s` to at most `max` characters, never splitting a UTF-8 sequence.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
