use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use site_core::Sitemap;
use site_server::{build_router, state::AppState};
use tempfile::TempDir;
use tower::ServiceExt;

const SHELL: &str = "<!DOCTYPE html><html><body></body></html>";

fn static_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), SHELL).unwrap();
    std::fs::create_dir_all(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets/app.css"), "body {}").unwrap();
    dir
}

async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = build_router(state).oneshot(req).await.unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health() {
    let dir = static_dir();
    let (status, body) = get(AppState::new(Sitemap::default(), dir.path()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_serves_static_files() {
    let dir = static_dir();
    let state = AppState::new(Sitemap::default(), dir.path());

    let (status, body) = get(state.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SHELL);

    let (status, body) = get(state, "/assets/app.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body {}");
}

#[tokio::test]
async fn test_client_routes_get_shell() {
    let dir = static_dir();
    let state = AppState::new(Sitemap::default(), dir.path());

    for path in ["/about-us", "/solutions", "/industries", "/regulations", "/contact-us/"] {
        let (status, body) = get(state.clone(), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body, SHELL);
    }
}

#[tokio::test]
async fn test_unknown_paths_are_not_found() {
    let dir = static_dir();
    let state = AppState::new(Sitemap::default(), dir.path());

    for path in ["/pricing", "/assets/missing.png", "/ai-agent"] {
        let (status, body) = get(state.clone(), path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(body, SHELL);
    }
}

#[tokio::test]
async fn test_ai_agent_route_when_enabled() {
    let dir = static_dir();
    let (status, _) = get(AppState::new(Sitemap::new(true), dir.path()), "/ai-agent").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _) = get(AppState::new(Sitemap::default(), dir.path()), "/about-us").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
