//! Viewer pipeline for shared posts.
//!
//! This module provides:
//! - Share URL resolution into a locator and fetch URI
//! - Classification of fetch responses into plaintext, encrypted, or
//!   empty content
//! - The passphrase-driven decrypt action
//! - Render dispatch with built-in HTML sanitization

pub mod render;
pub mod resolver;
pub mod state;

pub use render::{MarkdownRenderer, Rendered, Renderer};
pub use resolver::{resolve_share_url, ShareTarget};
pub use state::{Content, ViewerState};
