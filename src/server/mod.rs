// Server module entry point
// Listener creation, accept loop, and interrupt-driven shutdown

mod conn;
mod listener;
mod signal;

pub use listener::bind_listener;

use crate::config::Config;
use crate::logger;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Immutable context shared by every connection.
pub struct ServeContext {
    pub root: PathBuf,
    pub access_log: bool,
}

impl ServeContext {
    pub fn new(cfg: &Config, root: PathBuf) -> Self {
        Self {
            root,
            access_log: cfg.logging.access_log,
        }
    }
}

/// Accept connections until the interrupt signal arrives.
///
/// Returns `Ok(())` once interrupted. The listener is owned here and dropped
/// on return, so the port is released before the process reports shutdown.
pub async fn run(listener: TcpListener, ctx: Arc<ServeContext>) -> std::io::Result<()> {
    let shutdown = signal::shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        conn::handle_connection(stream, peer_addr, Arc::clone(&ctx));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            res = &mut shutdown => {
                return res;
            }
        }
    }
}
