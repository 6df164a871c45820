//! Share URL resolution.
//!
//! A share URL looks like `https://host/v1/post/<owner>/<postId>/view`
//! with percent-encoded components. Resolution scans for the last
//! `"/view"` marker and the `"/v1/post"` marker before it; anything that
//! does not fit the shape resolves to nothing, with no error surfaced.

use percent_encoding::percent_decode_str;

use postview_common::ShareLocator;

const POST_MARKER: &str = "/v1/post";
const VIEW_MARKER: &str = "/view";

/// A resolved share URL: the locator plus the URI to fetch the post from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTarget {
    locator: ShareLocator,
    fetch_uri: String,
}

impl ShareTarget {
    /// The (owner, post id) pair extracted from the URL.
    pub fn locator(&self) -> &ShareLocator {
        &self.locator
    }

    /// The URL prefix up to (not including) the view marker.
    pub fn fetch_uri(&self) -> &str {
        &self.fetch_uri
    }
}

/// Resolve a document URL into a share target.
///
/// Returns `None` when the URL does not carry a share locator: a marker
/// is missing, the markers are out of order, the segment between them
/// does not split into exactly two components, or a component fails to
/// percent-decode as UTF-8.
pub fn resolve_share_url(url: &str) -> Option<ShareTarget> {
    let view_idx = url.rfind(VIEW_MARKER)?;
    let post_idx = url.rfind(POST_MARKER)?;

    // The post marker and its trailing slash must precede the view
    // marker; the locator segment sits strictly between them.
    let start = post_idx + POST_MARKER.len() + 1;
    if start > view_idx {
        return None;
    }
    let segment = url.get(start..view_idx)?;

    let mut parts = segment.split('/');
    let owner = parts.next()?;
    let post_id = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let owner = percent_decode_str(owner).decode_utf8().ok()?;
    let post_id = percent_decode_str(post_id).decode_utf8().ok()?;

    Some(ShareTarget {
        locator: ShareLocator::new(owner, post_id),
        fetch_uri: url[..view_idx].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_basic() {
        let target =
            resolve_share_url("https://example.com/v1/post/alice/post123/view").unwrap();

        assert_eq!(target.locator().owner_name(), "alice");
        assert_eq!(target.locator().post_id(), "post123");
        assert_eq!(target.fetch_uri(), "https://example.com/v1/post/alice/post123");
    }

    #[test]
    fn test_resolve_percent_encoded() {
        let target =
            resolve_share_url("https://example.com/v1/post/alice%20smith/my%2Fpost/view")
                .unwrap();

        assert_eq!(target.locator().owner_name(), "alice smith");
        assert_eq!(target.locator().post_id(), "my/post");
    }

    #[test]
    fn test_resolve_trailing_query() {
        let target =
            resolve_share_url("https://example.com/v1/post/alice/post123/view?utm=x").unwrap();

        assert_eq!(target.locator().post_id(), "post123");
        assert_eq!(target.fetch_uri(), "https://example.com/v1/post/alice/post123");
    }

    #[test]
    fn test_missing_view_marker() {
        assert!(resolve_share_url("https://example.com/v1/post/alice/post123").is_none());
    }

    #[test]
    fn test_missing_post_marker() {
        assert!(resolve_share_url("https://example.com/alice/post123/view").is_none());
    }

    #[test]
    fn test_wrong_segment_count() {
        assert!(resolve_share_url("https://example.com/v1/post/alice/view").is_none());
        assert!(
            resolve_share_url("https://example.com/v1/post/a/b/c/view").is_none()
        );
    }

    #[test]
    fn test_markers_out_of_order() {
        assert!(resolve_share_url("https://example.com/view/v1/post").is_none());
    }

    #[test]
    fn test_last_view_marker_wins() {
        let target = resolve_share_url("https://example.com/v1/post/alice/view/view").unwrap();

        assert_eq!(target.locator().owner_name(), "alice");
        assert_eq!(target.locator().post_id(), "view");
        assert_eq!(target.fetch_uri(), "https://example.com/v1/post/alice/view");
    }

    #[test]
    fn test_invalid_percent_sequence_fails_closed() {
        // %FF does not decode to UTF-8.
        assert!(resolve_share_url("https://example.com/v1/post/%FF/post/view").is_none());
    }

    #[test]
    fn test_not_a_url_at_all() {
        assert!(resolve_share_url("").is_none());
        assert!(resolve_share_url("plain text").is_none());
    }
}
