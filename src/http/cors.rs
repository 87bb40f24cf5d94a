//! CORS header injection
//!
//! The single composition point that stamps the permissive testing headers
//! onto every outgoing response, whatever its status. The page under test
//! can then be exercised cross-origin as if it were deployed.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use hyper::Response;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Add the three CORS headers to a finished response.
pub fn apply(mut response: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http;

    fn assert_cors(response: &Response<Full<Bytes>>) {
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "Content-Type"
        );
    }

    #[test]
    fn test_headers_on_ok_response() {
        let response = apply(http::build_file_response(
            Bytes::from_static(b"<html></html>"),
            "text/html; charset=utf-8",
            "\"abc\"",
            13,
        ));
        assert_eq!(response.status(), 200);
        assert_cors(&response);
    }

    #[test]
    fn test_headers_on_404_response() {
        let response = apply(http::build_404_response());
        assert_eq!(response.status(), 404);
        assert_cors(&response);
    }

    #[test]
    fn test_headers_on_options_response() {
        let response = apply(http::build_options_response());
        assert_eq!(response.status(), 204);
        assert_cors(&response);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let response = apply(apply(http::build_404_response()));
        assert_eq!(
            response
                .headers()
                .get_all(ACCESS_CONTROL_ALLOW_ORIGIN)
                .iter()
                .count(),
            1
        );
    }
}
