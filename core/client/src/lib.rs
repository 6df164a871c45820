//! HTTP client and wire types for the post endpoint.

pub mod fetch;
pub mod types;

pub use fetch::PostClient;
pub use types::{Blob, PostResponse};
