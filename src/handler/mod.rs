//! Request handler module
//!
//! Method validation and static-file dispatch. Every response leaving this
//! module passes through the CORS injection point, whatever its status.

mod static_files;

use crate::http::{self, cors};
use crate::logger;
use crate::server::ServeContext;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;

/// Request context for static-file serving
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    ctx: &ServeContext,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();

    if ctx.access_log {
        logger::log_request(method, path);
    }

    let response = match *method {
        Method::GET | Method::HEAD => {
            let request = RequestContext {
                path,
                is_head: *method == Method::HEAD,
                if_none_match: req
                    .headers()
                    .get("if-none-match")
                    .and_then(|v| v.to_str().ok())
                    .map(ToString::to_string),
                access_log: ctx.access_log,
            };
            static_files::serve(&request, &ctx.root).await
        }
        // OPTIONS answers for any path, existing or not
        Method::OPTIONS => http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    Ok(cors::apply(response))
}
