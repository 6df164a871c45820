//! Common types used throughout the post viewer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one shared post: the owning user plus the post id.
///
/// Built once from the share URL by the resolver; immutable afterwards
/// and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareLocator {
    owner_name: String,
    post_id: String,
}

impl ShareLocator {
    /// Create a locator from already percent-decoded components.
    pub fn new(owner_name: impl Into<String>, post_id: impl Into<String>) -> Self {
        Self {
            owner_name: owner_name.into(),
            post_id: post_id.into(),
        }
    }

    /// The display name of the post owner.
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// The post identifier.
    pub fn post_id(&self) -> &str {
        &self.post_id
    }
}

impl fmt::Display for ShareLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner_name, self.post_id)
    }
}

/// Declared content type of a post body.
///
/// Only `Markdown` is interpreted as markup when rendering; every other
/// kind is presented as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Markdown,
    Html,
    Bash,
    Python,
    Javascript,
    Golang,
    Text,
}

impl ContentKind {
    /// Resolve a user-facing type name or file extension.
    ///
    /// Matching is case-insensitive; unknown names resolve to `Text`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Self::Markdown,
            "html" => Self::Html,
            "bash" | "sh" => Self::Bash,
            "python" | "py" => Self::Python,
            "javascript" | "js" => Self::Javascript,
            "golang" | "go" => Self::Golang,
            _ => Self::Text,
        }
    }

    /// Whether this kind is rendered as markup rather than literal text.
    pub fn is_markdown(&self) -> bool {
        matches!(self, Self::Markdown)
    }

    /// Canonical long name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Bash => "bash",
            Self::Python => "python",
            Self::Javascript => "javascript",
            Self::Golang => "golang",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_locator_accessors() {
        let locator = ShareLocator::new("alice", "post123");
        assert_eq!(locator.owner_name(), "alice");
        assert_eq!(locator.post_id(), "post123");
        assert_eq!(locator.to_string(), "alice/post123");
    }

    #[test]
    fn test_content_kind_long_names() {
        assert_eq!(ContentKind::from_name("markdown"), ContentKind::Markdown);
        assert_eq!(ContentKind::from_name("html"), ContentKind::Html);
        assert_eq!(ContentKind::from_name("golang"), ContentKind::Golang);
    }

    #[test]
    fn test_content_kind_extensions() {
        assert_eq!(ContentKind::from_name("md"), ContentKind::Markdown);
        assert_eq!(ContentKind::from_name("py"), ContentKind::Python);
        assert_eq!(ContentKind::from_name("sh"), ContentKind::Bash);
    }

    #[test]
    fn test_content_kind_case_insensitive() {
        assert_eq!(ContentKind::from_name("Markdown"), ContentKind::Markdown);
        assert_eq!(ContentKind::from_name("MD"), ContentKind::Markdown);
    }

    #[test]
    fn test_content_kind_unknown_is_text() {
        assert_eq!(ContentKind::from_name("text"), ContentKind::Text);
        assert_eq!(ContentKind::from_name("csv"), ContentKind::Text);
        assert_eq!(ContentKind::from_name(""), ContentKind::Text);
    }

    #[test]
    fn test_only_markdown_is_markup() {
        assert!(ContentKind::Markdown.is_markdown());
        assert!(!ContentKind::Html.is_markdown());
        assert!(!ContentKind::Text.is_markdown());
    }
}
