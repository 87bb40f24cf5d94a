// Shutdown signal module
//
// SIGINT (Ctrl+C) and SIGTERM both resolve into the same graceful shutdown
// path; neither is allowed to kill the process with an unhandled-signal trace.

/// Wait for an interrupt or termination signal (Unix).
#[cfg(unix)]
pub async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        res = tokio::signal::ctrl_c() => res,
        _ = sigterm.recv() => Ok(()),
    }
}

/// Windows fallback - only Ctrl+C is supported
#[cfg(not(unix))]
pub async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
