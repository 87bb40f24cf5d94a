//! Static file serving module
//!
//! Maps request paths to files under the site root with traversal
//! protection, resolves directory paths to `index.html`, and answers
//! conditional requests with 304.

use super::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::INDEX_FILE;

/// Serve a static file from the site root
pub async fn serve(ctx: &RequestContext<'_>, root: &Path) -> Response<Full<Bytes>> {
    match load(root, ctx.path).await {
        Some((content, content_type)) => {
            let response = build_file_response(
                &content,
                content_type,
                ctx.if_none_match.as_deref(),
                ctx.is_head,
            );
            if ctx.access_log {
                logger::log_response(response.status().as_u16(), content.len());
            }
            response
        }
        None => http::build_404_response(),
    }
}

/// Load the file under `root` that corresponds to a request path.
///
/// Directory paths (including the bare `/`) resolve to their `index.html`.
/// Returns `None` for anything missing or escaping the root.
async fn load(root: &Path, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = sanitize_path(path);
    let mut file_path = root.join(&relative);

    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Site root not accessible '{}': {e}",
                root.display()
            ));
            return None;
        }
    };

    if file_path.is_dir() || relative.as_os_str().is_empty() || path.ends_with('/') {
        file_path = file_path.join(INDEX_FILE);
    }

    // Missing files are ordinary 404s; only escapes from the root get logged.
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
        return None;
    }
    if !file_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_canonical.display()
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Strip the leading slash and keep only normal components, so `..` and
/// rooted segments can never climb out of the serving root.
fn sanitize_path(path: &str) -> PathBuf {
    Path::new(path.trim_start_matches('/'))
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

/// Build the file response, answering `If-None-Match` with 304
fn build_file_response(
    data: &[u8],
    content_type: &'static str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data.to_owned())
    };

    http::build_file_response(body, content_type, &etag, data.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_path() {
        assert_eq!(sanitize_path("/styles/main.css"), PathBuf::from("styles/main.css"));
        assert_eq!(sanitize_path("/index.html"), PathBuf::from("index.html"));
    }

    #[test]
    fn test_sanitize_root_path() {
        assert_eq!(sanitize_path("/"), PathBuf::new());
        assert_eq!(sanitize_path(""), PathBuf::new());
    }

    #[test]
    fn test_sanitize_traversal() {
        assert_eq!(sanitize_path("/../etc/passwd"), PathBuf::from("etc/passwd"));
        assert_eq!(sanitize_path("/a/../../b"), PathBuf::from("a/b"));
        assert_eq!(sanitize_path("/./a/./b"), PathBuf::from("a/b"));
    }

    #[test]
    fn test_head_has_empty_body_but_same_headers() {
        let full = build_file_response(b"hello", "text/plain; charset=utf-8", None, false);
        let head = build_file_response(b"hello", "text/plain; charset=utf-8", None, true);
        assert_eq!(full.status(), 200);
        assert_eq!(head.status(), 200);
        assert_eq!(
            full.headers().get("Content-Length"),
            head.headers().get("Content-Length")
        );
    }

    #[test]
    fn test_if_none_match_yields_304() {
        let first = build_file_response(b"hello", "text/plain; charset=utf-8", None, false);
        let etag = first.headers().get("ETag").unwrap().to_str().unwrap().to_string();
        let second = build_file_response(b"hello", "text/plain; charset=utf-8", Some(&etag), false);
        assert_eq!(second.status(), 304);
    }
}
