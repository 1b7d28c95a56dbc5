//! Temporary redirect responses.
//!
//! # Responsibilities
//! - Resolve scheme-less targets against the request path
//! - Produce a `Location` header that is always a valid header value
//! - Attach the short HTML body browsers show when they do not follow
//!
//! # Design Decisions
//! - Absolute targets (`https://...`, `//host/...`) are written unchanged
//! - Relative targets are resolved purely on the path string: prefixed with
//!   the request's directory, dot segments removed, trailing slash kept;
//!   no percent-encoding and no backslash rewriting
//! - An empty target resolves to the request's directory
//! - Control characters are replaced by spaces instead of failing the request

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, StatusCode},
    response::Response,
};

/// Build a `307 Temporary Redirect` response for `target`.
///
/// `request_path` is the path component of the incoming request and is
/// only consulted when `target` carries neither a scheme nor a host.
pub fn temporary_redirect(method: &Method, request_path: &str, target: &str) -> Response {
    let location = resolve_location(request_path, target);

    let body = if *method == Method::GET {
        Body::from(format!(
            "<a href=\"{}\">Temporary Redirect</a>.\n",
            html_escape(&location)
        ))
    } else {
        Body::empty()
    };

    let mut response = Response::new(body);
    *response.status_mut() = StatusCode::TEMPORARY_REDIRECT;

    let headers = response.headers_mut();
    headers.insert(header::LOCATION, header_value(&location));
    if *method == Method::GET || *method == Method::HEAD {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
    }

    response
}

/// Turn a configured target into the value sent in `Location`.
pub fn resolve_location(request_path: &str, target: &str) -> String {
    if !is_path_reference(target) {
        return target.to_string();
    }

    let mut resolved = if target.starts_with('/') {
        target.to_string()
    } else {
        let request_path = if request_path.is_empty() { "/" } else { request_path };
        let dir_end = request_path.rfind('/').map_or(0, |i| i + 1);
        format!("{}{}", &request_path[..dir_end], target)
    };

    let query = match resolved.find('?') {
        Some(i) => resolved.split_off(i),
        None => String::new(),
    };

    let trailing_slash = resolved.ends_with('/');
    let mut cleaned = clean_path(&resolved);
    if trailing_slash && !cleaned.ends_with('/') {
        cleaned.push('/');
    }
    cleaned.push_str(&query);
    cleaned
}

/// Whether `target` is a scheme-less, host-less reference that should be
/// resolved against the request. Targets that do not parse as a URL
/// reference at all are left alone too.
fn is_path_reference(target: &str) -> bool {
    if target.starts_with("//") || target.starts_with(':') {
        return false;
    }
    if target.bytes().any(|b| b < 0x20 || b == 0x7f) {
        return false;
    }
    scheme_len(target).is_none()
}

/// Length of a leading RFC 3986 scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`)
/// terminated by `:`.
fn scheme_len(target: &str) -> Option<usize> {
    for (i, b) in target.bytes().enumerate() {
        match b {
            b'a'..=b'z' | b'A'..=b'Z' => {}
            b'0'..=b'9' | b'+' | b'-' | b'.' if i > 0 => {}
            b':' if i > 0 => return Some(i),
            _ => return None,
        }
    }
    None
}

/// Lexical path cleaning: collapse repeated slashes, drop `.` segments and
/// resolve `..` against the preceding segment. Never climbs above the root.
fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

fn header_value(location: &str) -> HeaderValue {
    let sanitized: Vec<u8> = location
        .bytes()
        .map(|b| if (b < 0x20 && b != b'\t') || b == 0x7f { b' ' } else { b })
        .collect();

    HeaderValue::from_bytes(&sanitized).unwrap_or_else(|_| HeaderValue::from_static("/"))
}

fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
