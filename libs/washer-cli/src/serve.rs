//! # Static Server
//!
//! Serves the web UI and its WASM package from a root directory.
//!
//! ## Routes
//!
//! - `GET /` redirects to the entry page
//! - `GET /{*path}` serves a file below the root; directories redirect to
//!   the entry page
//!
//! Request paths are resolved lexically and never leave the root.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path as UrlPath, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use config::constants::WEB_ENTRY_PATH;
use tower_http::trace::TraceLayer;

/// Where and what to serve.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
    pub root: PathBuf,
}

/// State shared across handlers.
#[derive(Debug, Clone)]
pub struct ServeState {
    /// Canonical root directory.
    pub root: Arc<PathBuf>,
}

/// Builds the router for an already canonical root.
pub fn build_router(root: PathBuf) -> Router {
    Router::new()
        .route("/", get(redirect_to_entry))
        .route("/{*path}", get(serve_file))
        .layer(TraceLayer::new_for_http())
        .with_state(ServeState {
            root: Arc::new(root),
        })
}

/// Binds the listener and serves until the process is stopped.
///
/// # Errors
///
/// Fails if the root does not exist or the address cannot be bound.
pub async fn serve(config: ServeConfig) -> anyhow::Result<()> {
    let root = config
        .root
        .canonicalize()
        .with_context(|| format!("Cannot serve {}", config.root.display()))?;
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(root = %root.display(), "serving static files");
    println!("Web UI available at http://{addr}{WEB_ENTRY_PATH}");

    axum::serve(listener, build_router(root))
        .await
        .context("Server stopped unexpectedly")
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn redirect_to_entry() -> Response {
    found(WEB_ENTRY_PATH)
}

async fn serve_file(State(state): State<ServeState>, UrlPath(path): UrlPath<String>) -> Response {
    let Some(target) = resolve_safe_path(&state.root, &path) else {
        tracing::warn!(%path, "rejected path outside root");
        return plain_text(StatusCode::FORBIDDEN, "Forbidden");
    };

    match tokio::fs::metadata(&target).await {
        Ok(meta) if meta.is_dir() => found(WEB_ENTRY_PATH),
        Ok(_) => match tokio::fs::read(&target).await {
            Ok(bytes) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type_for(&target))],
                bytes,
            )
                .into_response(),
            Err(_) => not_found(),
        },
        Err(_) => not_found(),
    }
}

fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

fn not_found() -> Response {
    plain_text(StatusCode::NOT_FOUND, "Not found")
}

fn plain_text(status: StatusCode, body: &'static str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

// =============================================================================
// PATHS
// =============================================================================

/// Joins an already decoded request path onto `root`.
///
/// `.` segments are dropped and `..` pops a segment; returns `None` if a
/// `..` would climb above `root`. The filesystem is not consulted.
pub fn resolve_safe_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    let mut depth = 0usize;
    for component in Path::new(request_path).components() {
        match component {
            Component::Normal(segment) => {
                resolved.push(segment);
                depth += 1;
            }
            Component::ParentDir => {
                if depth == 0 {
                    return None;
                }
                resolved.pop();
                depth -= 1;
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    Some(resolved)
}

/// Content type by file extension, case-insensitive.
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("stl") => "model/stl",
        Some("txt") => "text/plain; charset=utf-8",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests;
