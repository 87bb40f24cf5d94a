use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(url: &str, root: &Path) {
    println!("==================================================");
    println!("Site Preview - Local Test Server");
    println!("==================================================");
    println!("Server running at: {url}");
    println!("Serving from: {}", root.display());
    println!("Access: password protected (enforced by the deployed site, not here)");
    println!("==================================================");
    println!("This server is for testing only!");
    println!("Deploy to an HTTPS server for production use.");
    println!("==================================================");
    println!("Press Ctrl+C to stop the server");
    println!();
}

pub fn log_checklist() {
    println!();
    println!("Testing checklist:");
    println!("  [ ] Password protection works");
    println!("  [ ] Main interface loads correctly");
    println!("  [ ] Download button functions");
    println!("  [ ] Update checking works");
    println!("  [ ] Mobile responsive design");
    println!("  [ ] FAQ sections expand/collapse");
    println!();
}

pub fn log_browser_opened(url: &str) {
    println!("Opened {url} in your default browser");
}

pub fn log_browser_fallback(url: &str, err: &impl std::fmt::Display) {
    println!("Could not open a browser ({err})");
    println!("Manually open {url} in your browser");
}

pub fn log_stopped_by_user() {
    println!("\nServer stopped by user");
}

pub fn log_port_in_use(port: u16) {
    eprintln!("[ERROR] Port {port} is already in use");
    eprintln!("        Try stopping other servers or use a different port");
}

pub fn log_missing_index(file: &str, root: &Path) {
    eprintln!("[ERROR] {file} not found in {}", root.display());
    eprintln!("        Make sure you're running this from the website directory");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &hyper::Method, path: &str) {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    println!("[{now}] {method} {path}");
}

pub fn log_response(status: u16, size: usize) {
    println!("[Response] {status} ({size} bytes)");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
