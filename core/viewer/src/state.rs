//! Viewer state: classification and the decrypt action.
//!
//! Fetch completion produces one immutable [`ViewerState`]; the
//! user-triggered decrypt action reads it by reference. There is no
//! process-wide mutable state, and no state value exists before the
//! fetch completes, so "decrypt before fetch" is unrepresentable rather
//! than a runtime race.

use tracing::debug;

use postview_client::PostResponse;
use postview_common::{ContentKind, Error, Result, ShareLocator};
use postview_crypto::{decrypt_post, derive_post_key, EncryptedPayload};

use crate::render::{Rendered, Renderer};

/// Placeholder shown for encrypted content until a passphrase arrives.
const ENCRYPTED_PLACEHOLDER: &str = "Encrypted bytes";

/// Classified content of a fetched post.
#[derive(Debug, Clone)]
pub enum Content {
    /// Body arrived in the clear; decryption is never invoked.
    Plaintext(String),
    /// Encrypted body held pending until the user supplies a passphrase.
    Encrypted(EncryptedPayload),
    /// Neither body form was present.
    Empty,
}

/// Immutable state of the viewer for one fetched post.
pub struct ViewerState {
    locator: ShareLocator,
    kind: ContentKind,
    content: Content,
}

impl ViewerState {
    /// Classify a fetch response into viewer state.
    ///
    /// An encrypted body is parsed into its payload here, so an
    /// undersized one is reported at fetch time instead of surprising
    /// the user when they try to decrypt.
    ///
    /// # Errors
    /// - `Error::MalformedPayload` when the encrypted body is shorter
    ///   than the 16-byte header
    pub fn from_response(locator: ShareLocator, response: PostResponse) -> Result<Self> {
        let kind = response.kind();

        let content = if let Some(body) = response.body {
            debug!("post {} is a plaintext share", locator);
            Content::Plaintext(body)
        } else if let Some(bytes) = response.encrypted_body {
            debug!("post {} is encrypted ({} bytes)", locator, bytes.len());
            Content::Encrypted(EncryptedPayload::parse(bytes)?)
        } else {
            debug!("post {} has no viewable content", locator);
            Content::Empty
        };

        Ok(Self {
            locator,
            kind,
            content,
        })
    }

    /// The locator this state was fetched for.
    pub fn locator(&self) -> &ShareLocator {
        &self.locator
    }

    /// Declared content kind.
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Whether a passphrase is needed to view the content.
    pub fn is_encrypted(&self) -> bool {
        matches!(self.content, Content::Encrypted(_))
    }

    /// Run the decrypt action against the pending payload.
    ///
    /// Derives the key fresh from the passphrase (CPU-bound, runs to
    /// completion on the calling thread) and decrypts; the key is
    /// zeroized when this returns. The legacy payload format carries no
    /// integrity tag, so a wrong passphrase yields garbage bytes rather
    /// than an error.
    ///
    /// # Errors
    /// - `Error::MissingCiphertext` when the content is plaintext or
    ///   empty and there is nothing to decrypt
    pub fn decrypt(&self, passphrase: &str) -> Result<Vec<u8>> {
        let Content::Encrypted(payload) = &self.content else {
            return Err(Error::MissingCiphertext);
        };

        debug!("deriving key for {}", self.locator);
        let key = derive_post_key(passphrase)?;
        decrypt_post(payload, &key)
    }

    /// Render the content as fetched.
    ///
    /// Plaintext renders per its kind; encrypted content renders as the
    /// inert placeholder; empty content renders as empty text.
    pub fn view(&self, renderer: &dyn Renderer) -> Result<Rendered> {
        match &self.content {
            Content::Plaintext(body) => renderer.render(body.as_bytes(), self.kind),
            Content::Encrypted(_) => Ok(Rendered::Text(ENCRYPTED_PLACEHOLDER.to_string())),
            Content::Empty => Ok(Rendered::Text(String::new())),
        }
    }

    /// Decrypt the pending payload and render the recovered bytes.
    pub fn view_decrypted(&self, passphrase: &str, renderer: &dyn Renderer) -> Result<Rendered> {
        let plaintext = self.decrypt(passphrase)?;
        renderer.render(&plaintext, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MarkdownRenderer;

    fn locator() -> ShareLocator {
        ShareLocator::new("alice", "post123")
    }

    fn state_from_json(json: &str) -> Result<ViewerState> {
        let response: PostResponse = serde_json::from_str(json).unwrap();
        ViewerState::from_response(locator(), response)
    }

    #[test]
    fn test_plaintext_markdown_renders_without_decryption() {
        // Scenario A: plaintext share, markdown type.
        let state = state_from_json(r##"{"body":"# Hi","blobs":[{"type":"markdown"}]}"##).unwrap();

        assert!(!state.is_encrypted());
        let rendered = state.view(&MarkdownRenderer::new()).unwrap();
        match rendered {
            Rendered::Html(html) => assert!(html.contains("<h1>Hi</h1>")),
            Rendered::Text(_) => panic!("markdown body must render to HTML"),
        }

        // The decrypt action has nothing to work on.
        assert!(matches!(
            state.decrypt("irrelevant"),
            Err(Error::MissingCiphertext)
        ));
    }

    #[test]
    fn test_encrypted_share_decrypts_to_fixture() {
        // Scenario B: base64(iv || ciphertext) produced under
        // scrypt("open sesame") with IV 00..0f.
        let state = state_from_json(
            r#"{"encrypted_body":"AAECAwQFBgcICQoLDA0OD+MrLLHnrBlCZEGxXWz0WiDSrxBHZ2o9","blobs":[{"type":"text"}]}"#,
        )
        .unwrap();

        assert!(state.is_encrypted());

        let plaintext = state.decrypt("open sesame").unwrap();
        assert_eq!(plaintext, b"the vault opens at dawn");

        let rendered = state
            .view_decrypted("open sesame", &MarkdownRenderer::new())
            .unwrap();
        assert_eq!(
            rendered,
            Rendered::Text("the vault opens at dawn".to_string())
        );
    }

    #[test]
    fn test_encrypted_share_shows_placeholder_until_passphrase() {
        let state = state_from_json(
            r#"{"encrypted_body":"AAECAwQFBgcICQoLDA0OD+MrLLHnrBlCZEGxXWz0WiDSrxBHZ2o9","blobs":[{"type":"text"}]}"#,
        )
        .unwrap();

        let rendered = state.view(&MarkdownRenderer::new()).unwrap();
        assert_eq!(rendered, Rendered::Text("Encrypted bytes".to_string()));
    }

    #[test]
    fn test_decrypt_without_pending_ciphertext() {
        // Scenario C: the decrypt action with nothing pending must fail
        // with the typed error, not slice into nothing.
        let state = state_from_json(r#"{}"#).unwrap();

        assert!(matches!(
            state.decrypt("passphrase"),
            Err(Error::MissingCiphertext)
        ));
    }

    #[test]
    fn test_empty_response_views_as_empty_text() {
        let state = state_from_json(r#"{}"#).unwrap();

        let rendered = state.view(&MarkdownRenderer::new()).unwrap();
        assert_eq!(rendered, Rendered::Text(String::new()));
    }

    #[test]
    fn test_undersized_payload_rejected_at_classification() {
        // 8 bytes of encrypted body: shorter than the IV header.
        let result = state_from_json(r#"{"encrypted_body":"AAAAAAAAAAA=","blobs":[]}"#);

        assert!(matches!(result, Err(Error::MalformedPayload(8))));
    }

    #[test]
    fn test_empty_ciphertext_decrypts_to_empty() {
        // Exactly one IV, zero ciphertext bytes.
        let state =
            state_from_json(r#"{"encrypted_body":"AAAAAAAAAAAAAAAAAAAAAA==","blobs":[]}"#)
                .unwrap();

        assert_eq!(state.decrypt("anything").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_body_wins_over_encrypted_body() {
        // When both are present the plaintext path is taken and
        // decryption is never attempted.
        let state = state_from_json(
            r#"{"body":"clear","encrypted_body":"AAECAwQFBgcICQoLDA0OD+MrLLHnrBlCZEGxXWz0WiDSrxBHZ2o9"}"#,
        )
        .unwrap();

        assert!(!state.is_encrypted());
        let rendered = state.view(&MarkdownRenderer::new()).unwrap();
        assert_eq!(rendered, Rendered::Text("clear".to_string()));
    }
}
