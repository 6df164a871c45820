//! Wire types for the post endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use postview_common::ContentKind;

/// Metadata for one blob entry attached to a post.
///
/// Only `content_type` drives the viewer; the remaining fields are
/// carried through for display and debugging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blob {
    /// Blob identifier.
    #[serde(default)]
    pub id: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Declared content type name, e.g. "markdown" or "text".
    #[serde(rename = "type", default)]
    pub content_type: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional expiry timestamp.
    #[serde(default)]
    pub expire_time: Option<DateTime<Utc>>,
}

/// Server response for one shared post.
///
/// Exactly one of `body` / `encrypted_body` is meaningful; when both
/// are absent the post has no viewable content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    /// Plaintext body, present for unencrypted shares.
    #[serde(default)]
    pub body: Option<String>,
    /// Encrypted body, a base64 string on the wire.
    #[serde(default, with = "base64_bytes")]
    pub encrypted_body: Option<Vec<u8>>,
    /// Blob entries; the first one declares the content type.
    #[serde(default)]
    pub blobs: Vec<Blob>,
}

impl PostResponse {
    /// Content kind declared by the first blob entry.
    ///
    /// Falls back to `Text` when no blob metadata is present.
    pub fn kind(&self) -> ContentKind {
        self.blobs
            .first()
            .map(|b| ContentKind::from_name(&b.content_type))
            .unwrap_or(ContentKind::Text)
    }
}

/// Serde adapter for `Option<Vec<u8>>` carried as base64 text in JSON.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|s| STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}
