//! Static file server for the Eco-Eeelien web app
//!
//! Serves the built Leptos WASM app from `ECO_DIST_DIR` (default `dist/`) on
//! `ECO_SERVER_ADDR` (default `127.0.0.1:8080`). Unknown paths fall back to `index.html`
//! so client-side routes like `/dashboard` load the app.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    dev_server::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod dev_server {
    use std::fs;
    use std::io::{BufRead, BufReader, Write};
    use std::net::{TcpListener, TcpStream};
    use std::path::{Path, PathBuf};

    use anyhow::Context;
    use lib_core::config::{core_config, init_config, load_dotenv};
    use lib_core::logging::init_tracing;
    use lib_utils::envs::get_env_or;
    use tracing::{debug, error, info, warn};

    const DEFAULT_ADDR: &str = "127.0.0.1:8080";
    const DEFAULT_DIST_DIR: &str = "dist";
    const NOT_FOUND_PAGE: &[u8] =
        b"<!DOCTYPE html><html><body><h1>Error: index.html not found</h1></body></html>";

    pub fn run() -> anyhow::Result<()> {
        let dotenv_loaded = load_dotenv();
        let config = match init_config() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Invalid configuration, using defaults: {}", e);
                core_config()
            }
        };
        init_tracing(&config.log_level)?;
        if dotenv_loaded {
            debug!("Loaded .env");
        }

        let addr = get_env_or("ECO_SERVER_ADDR", DEFAULT_ADDR);
        let dist = PathBuf::from(get_env_or("ECO_DIST_DIR", DEFAULT_DIST_DIR));
        if !dist.join("index.html").exists() {
            warn!(dist = %dist.display(), "index.html missing, build the app with trunk first");
        }

        let listener =
            TcpListener::bind(&addr).with_context(|| format!("Failed to bind to {}", addr))?;

        info!("Eco-Eeelien server running at http://{}", addr);
        info!("Serving from {}", dist.display());

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(e) = handle_client(stream, &dist) {
                        warn!("Request failed: {:#}", e);
                    }
                }
                Err(e) => error!("Connection error: {}", e),
            }
        }
        Ok(())
    }

    fn handle_client(mut stream: TcpStream, dist: &Path) -> anyhow::Result<()> {
        let request_line = BufReader::new(&mut stream)
            .lines()
            .next()
            .context("Empty request")?
            .context("Failed to read request line")?;

        let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
        let path = full_path.split_once('?').map_or(full_path, |(p, _)| p);

        let file_path = resolve_path(dist, path);
        let (status, content_type, body) = match fs::read(&file_path) {
            Ok(contents) => ("200 OK", content_type_for(&file_path), contents),
            Err(e) => {
                warn!(path = %file_path.display(), "Failed to read file: {}", e);
                ("404 NOT FOUND", "text/html; charset=utf-8", NOT_FOUND_PAGE.to_vec())
            }
        };
        debug!(%path, status, "served");

        let headers = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
            status,
            content_type,
            body.len()
        );
        stream
            .write_all(headers.as_bytes())
            .context("Failed to write headers")?;
        stream.write_all(&body).context("Failed to write body")?;
        stream.flush()?;
        Ok(())
    }

    /// Map a request path to a file under `dist`, falling back to `index.html`.
    pub(crate) fn resolve_path(dist: &Path, path: &str) -> PathBuf {
        let index = dist.join("index.html");
        let relative = path.trim_start_matches('/');
        if relative.is_empty() || relative.split('/').any(|part| part == "..") {
            return index;
        }

        let candidate = dist.join(relative);
        if candidate.is_file() {
            candidate
        } else {
            index
        }
    }

    pub(crate) fn content_type_for(path: &Path) -> &'static str {
        match path.extension().and_then(|s| s.to_str()) {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("wasm") => "application/wasm",
            Some("json") => "application/json",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("svg") => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }

}
