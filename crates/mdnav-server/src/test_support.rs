//! Shared fixtures for HTTP handler tests.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use mdnav_site::Site;
use mdnav_storage::FsStorage;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::app::create_router;
use crate::state::AppState;

pub(crate) const ROOT_CONTENT: &str = "# Root Content\nThis is the root page.";
pub(crate) const VALID_CONTENT: &str = "# Test Content\nThis is a test page.";
pub(crate) const NESTED_CONTENT: &str = "# Nested Content\nThis is a nested page.";
pub(crate) const TEMPLATE: &str = "<html><body>{{content}}</body></html>";

/// Content tree and template laid out in a temporary directory.
///
/// ```text
/// content/index.md
/// content/valid-page/index.md
/// content/valid-page/nested/index.md
/// template.html
/// ```
pub(crate) struct TestSite {
    dir: TempDir,
}

impl TestSite {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        std::fs::create_dir_all(content.join("valid-page/nested")).unwrap();
        std::fs::write(content.join("index.md"), ROOT_CONTENT).unwrap();
        std::fs::write(content.join("valid-page/index.md"), VALID_CONTENT).unwrap();
        std::fs::write(content.join("valid-page/nested/index.md"), NESTED_CONTENT).unwrap();
        std::fs::write(dir.path().join("template.html"), TEMPLATE).unwrap();
        Self { dir }
    }

    pub(crate) fn content_dir(&self) -> PathBuf {
        self.dir.path().join("content")
    }

    pub(crate) fn template_path(&self) -> PathBuf {
        self.dir.path().join("template.html")
    }

    pub(crate) fn router(&self) -> Router {
        let storage = Arc::new(FsStorage::new(self.content_dir()));
        let site = Site::new(storage, self.template_path());
        create_router(Arc::new(AppState { site }))
    }
}

/// Send a GET request and return the raw response.
pub(crate) async fn send(router: Router, uri: &str) -> Response {
    router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a GET request and return status and body text.
pub(crate) async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = send(router, uri).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
