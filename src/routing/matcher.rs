//! Extraction of the lookup key from a request.
//!
//! # Design Decisions
//! - The key is the request target as sent: path plus `?query` in origin
//!   form, the full `scheme://authority/path?query` in absolute form
//! - HTTP/2 always carries scheme and authority pseudo-headers, so only
//!   HTTP/1.x requests are treated as absolute-form
//! - Matching is case-sensitive and exact; no trailing-slash or percent
//!   normalisation is applied
//! - A request with an empty target (authority-form) matches as `/`

use std::borrow::Cow;

use axum::http::{Request, Version};

/// The string a [`PathMapping`](super::PathMapping) is queried with.
pub fn request_target<B>(request: &Request<B>) -> Cow<'_, str> {
    let uri = request.uri();

    if request.version() < Version::HTTP_2 && uri.scheme().is_some() {
        return Cow::Owned(uri.to_string());
    }

    Cow::Borrowed(uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/"))
}
