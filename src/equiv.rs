//! Canonicalization-aware comparison of two URLs.

use crate::builder::UrlBuilder;
use crate::encoding::decode;
use crate::Url;

/// Checks whether two URLs are effectively the same.
///
/// Structural equality short-circuits; otherwise the comparison
/// normalizes the default port, the trailing slash and encoding
/// differences. It does not resolve `.`/`..` segments and does not
/// reorder or deduplicate query parameters.
pub(crate) fn equivalent(url: &Url, other: &Url) -> bool {
    if url == other {
        return true;
    }

    url.protocol == other.protocol
        && url.host.hostname == other.host.hostname
        && resolve_port(url) == resolve_port(other)
        && effective_path(url) == effective_path(other)
        && decoded_query(url) == decoded_query(other)
        && decoded_fragment(url) == decoded_fragment(other)
}

fn resolve_port(url: &Url) -> i32 {
    url.host.port.unwrap_or_else(|| url.protocol.default_port())
}

fn effective_path(url: &Url) -> Option<String> {
    UrlBuilder::new(url.clone())
        .without_trailing_slash()
        .into_unvalidated()
        .path
        .map(|path| decode(&path.to_component_string()))
}

fn decoded_query(url: &Url) -> Option<String> {
    url.query
        .as_ref()
        .map(|query| decode(&query.to_component_string()))
}

fn decoded_fragment(url: &Url) -> Option<String> {
    url.fragment.as_deref().map(decode)
}
