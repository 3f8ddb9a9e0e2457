//! Tests for path resolution and the file handlers.

use super::*;
use axum::body::to_bytes;
use tempfile::TempDir;

fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("web/pkg")).unwrap();
    std::fs::write(dir.path().join("web/index.html"), "<!doctype html>").unwrap();
    std::fs::write(dir.path().join("web/pkg/washer_wasm_bg.wasm"), [0u8, 97, 115, 109]).unwrap();
    dir
}

fn state(dir: &TempDir) -> ServeState {
    ServeState {
        root: Arc::new(dir.path().canonicalize().unwrap()),
    }
}

async fn get_path(dir: &TempDir, path: &str) -> Response {
    serve_file(State(state(dir)), UrlPath(path.to_string())).await
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// RESOLUTION
// =============================================================================

#[test]
fn test_resolves_inside_root() {
    let root = Path::new("/srv/site");
    assert_eq!(
        resolve_safe_path(root, "web/index.html"),
        Some(PathBuf::from("/srv/site/web/index.html"))
    );
    assert_eq!(
        resolve_safe_path(root, "/web/./pkg/../index.html"),
        Some(PathBuf::from("/srv/site/web/index.html"))
    );
}

#[test]
fn test_rejects_traversal() {
    let root = Path::new("/srv/site");
    assert_eq!(resolve_safe_path(root, "../etc/passwd"), None);
    assert_eq!(resolve_safe_path(root, "web/../../secret"), None);
    assert_eq!(resolve_safe_path(root, "/../site/web/index.html"), None);
}

#[test]
fn test_empty_path_is_root() {
    let root = Path::new("/srv/site");
    assert_eq!(resolve_safe_path(root, ""), Some(root.to_path_buf()));
}

#[test]
fn test_content_types() {
    assert_eq!(content_type_for(Path::new("a.HTML")), "text/html; charset=utf-8");
    assert_eq!(content_type_for(Path::new("main.js")), "text/javascript; charset=utf-8");
    assert_eq!(content_type_for(Path::new("w.stl")), "model/stl");
    assert_eq!(content_type_for(Path::new("x_bg.wasm")), "application/wasm");
    assert_eq!(content_type_for(Path::new("README")), "application/octet-stream");
}

// =============================================================================
// HANDLERS
// =============================================================================

#[tokio::test]
async fn test_root_redirects_to_entry() {
    let response = redirect_to_entry().await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/web/index.html");
}

#[tokio::test]
async fn test_serves_file_with_content_type() {
    let dir = site();
    let response = get_path(&dir, "web/index.html").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert_eq!(body_text(response).await, "<!doctype html>");
}

#[tokio::test]
async fn test_serves_wasm() {
    let dir = site();
    let response = get_path(&dir, "web/pkg/washer_wasm_bg.wasm").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/wasm");
}

#[tokio::test]
async fn test_directory_redirects() {
    let dir = site();
    let response = get_path(&dir, "web/").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/web/index.html");
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = site();
    let response = get_path(&dir, "web/missing.js").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Not found");
}

#[tokio::test]
async fn test_traversal_is_forbidden() {
    let dir = site();
    let response = get_path(&dir, "../outside.txt").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_text(response).await, "Forbidden");
}
