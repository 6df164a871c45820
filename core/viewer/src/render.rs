//! Render dispatch for recovered post content.
//!
//! Rendering is modeled as a capability: implementations receive decoded
//! bytes plus the declared content kind and must sanitize any HTML they
//! produce before returning it. Unsanitized converter output never
//! crosses this trait boundary.

use pulldown_cmark::{html, Parser};

use postview_common::{ContentKind, Error, Result};

/// Presentation-ready output of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Sanitized HTML, safe to place into a document.
    Html(String),
    /// Literal text, not to be interpreted as markup.
    Text(String),
}

impl Rendered {
    /// The contained string, regardless of variant.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Html(s) | Self::Text(s) => s,
        }
    }
}

/// Renders recovered plaintext bytes for presentation.
pub trait Renderer {
    /// Decode the bytes as UTF-8 and render per the content kind:
    /// markdown becomes sanitized HTML, everything else is literal text.
    ///
    /// # Errors
    /// - `Error::InvalidInput` when the bytes are not valid UTF-8
    fn render(&self, plaintext: &[u8], kind: ContentKind) -> Result<Rendered>;
}

/// Markdown-to-HTML renderer with built-in sanitization.
#[derive(Debug, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, plaintext: &[u8], kind: ContentKind) -> Result<Rendered> {
        let text = std::str::from_utf8(plaintext)
            .map_err(|e| Error::InvalidInput(format!("Content is not valid UTF-8: {}", e)))?;

        if kind.is_markdown() {
            let mut converted = String::new();
            html::push_html(&mut converted, Parser::new(text));
            Ok(Rendered::Html(ammonia::clean(&converted)))
        } else {
            Ok(Rendered::Text(text.to_string()))
        }
    }
}
