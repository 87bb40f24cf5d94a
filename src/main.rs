use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

/// Marker file that must exist under the serving root before anything binds.
const INDEX_FILE: &str = "index.html";

fn main() -> ExitCode {
    let cfg = match config::Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            logger::log_error(&format!("Failed to load configuration: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let root = match resolve_site_root(&cfg) {
        Ok(root) => root,
        Err(e) => {
            logger::log_error(&format!("Failed to resolve site directory: {e}"));
            return ExitCode::FAILURE;
        }
    };

    // Checked before any listener exists: a missing site means the tool was
    // launched from the wrong place, not a server problem.
    if !root.join(INDEX_FILE).is_file() {
        logger::log_missing_index(INDEX_FILE, &root);
        return ExitCode::FAILURE;
    }

    let addr = match cfg.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            logger::log_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            logger::log_error(&format!("Failed to start async runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(serve(&cfg, root, addr)) {
        Ok(()) => {
            logger::log_stopped_by_user();
            ExitCode::SUCCESS
        }
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            logger::log_port_in_use(addr.port());
            ExitCode::FAILURE
        }
        Err(e) => {
            logger::log_error(&format!("Failed to start server: {e}"));
            ExitCode::FAILURE
        }
    }
}

/// Bind, announce, open the browser, then serve until interrupted.
async fn serve(cfg: &config::Config, root: PathBuf, addr: SocketAddr) -> std::io::Result<()> {
    let listener = server::bind_listener(addr)?;
    let url = format!("http://localhost:{}", addr.port());

    logger::log_server_start(&url, &root);
    if cfg.site.open_browser {
        launch_browser(&url);
    }
    logger::log_checklist();

    let ctx = Arc::new(server::ServeContext::new(cfg, root));
    server::run(listener, ctx).await
}

/// Fire-and-forget browser launch. A failure here must never stop the server.
fn launch_browser(url: &str) {
    match open::that(url) {
        Ok(()) => logger::log_browser_opened(url),
        Err(e) => logger::log_browser_fallback(url, &e),
    }
}

/// The serving root is the directory containing the executable, unless
/// overridden through `site.root`.
fn resolve_site_root(cfg: &config::Config) -> std::io::Result<PathBuf> {
    if !cfg.site.root.is_empty() {
        return Ok(PathBuf::from(&cfg.site.root));
    }
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable has no parent directory",
        )
    })
}
