//! Request payloads accepted by the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts`.
///
/// Both fields are optional at the parsing layer; the handler validates
/// that `content` is present and non-blank after trimming.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
