use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use activities::{build_router, ActivityModel, AppState, InMemoryActivityRepository};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// Status, redirect target and decoded JSON body (Null when the body is not JSON)
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

/// A router over an isolated registry
pub struct TestApp {
    router: Router,
}

pub struct TestAppBuilder {
    activities: Option<Vec<ActivityModel>>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self { activities: None }
    }

    /// Replace the seeded catalog with custom activities
    #[allow(dead_code)]
    pub fn with_activities(mut self, activities: Vec<ActivityModel>) -> Self {
        self.activities = Some(activities);
        self
    }

    pub fn build(self) -> TestApp {
        let repository = match self.activities {
            Some(activities) => InMemoryActivityRepository::with_activities(activities),
            None => InMemoryActivityRepository::seeded(),
        };
        let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");

        TestApp {
            router: build_router(AppState::new(Arc::new(repository)), static_dir),
        }
    }
}

impl TestApp {
    /// Seeded registry, the state a fresh server starts with
    pub fn seeded() -> Self {
        TestAppBuilder::new().build()
    }

    pub async fn request(&self, method: &str, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            location,
            body,
        }
    }

    pub async fn get_activities(&self) -> Value {
        let response = self.request("GET", "/activities").await;
        assert_eq!(response.status, StatusCode::OK);
        response.body
    }

    /// Participants of one activity as currently listed
    pub async fn roster(&self, activity_name: &str) -> Vec<String> {
        let activities = self.get_activities().await;
        serde_json::from_value(activities[activity_name]["participants"].clone()).unwrap()
    }

    /// `email` goes into the query string as-is, so callers control its encoding
    pub async fn signup(&self, activity_name: &str, email: &str) -> TestResponse {
        let uri = format!(
            "/activities/{}/signup?email={}",
            encode_segment(activity_name),
            email
        );
        self.request("POST", &uri).await
    }

    pub async fn unregister(&self, activity_name: &str, email: &str) -> TestResponse {
        let uri = format!(
            "/activities/{}/unregister?email={}",
            encode_segment(activity_name),
            email
        );
        self.request("DELETE", &uri).await
    }
}

fn encode_segment(segment: &str) -> String {
    segment.replace(' ', "%20")
}
