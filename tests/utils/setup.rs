use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt; // for `oneshot`

use mnemonica::{AppState, ExtractorOptions};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
}

pub struct TestSetupBuilder {
    options: ExtractorOptions,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            options: ExtractorOptions::default(),
        }
    }

    pub fn with_relaxed_linker(mut self) -> Self {
        self.options.relaxed_linker = true;
        self
    }

    pub fn build(self) -> TestSetup {
        TestSetup {
            app: mnemonica::app(AppState::mnemonica(self.options)),
        }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestSetup {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        TestResponse { status, body }
    }

    pub async fn post_raw(&self, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri("/cutcard")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_text(&self, text: &str) -> TestResponse {
        let body = serde_json::json!({ "text": text }).to_string();
        self.post_raw(&body).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }
}
