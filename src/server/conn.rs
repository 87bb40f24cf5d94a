// Connection handling module
// Serves a single accepted TCP connection over HTTP/1.1

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;

use super::ServeContext;
use crate::handler;
use crate::logger;

/// Serve one accepted connection on its own task.
///
/// Connection-level errors are logged and absorbed; they never reach the
/// accept loop.
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    ctx: Arc<ServeContext>,
) {
    if ctx.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let ctx = Arc::clone(&ctx);
                async move { handler::handle_request(req, &ctx).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
