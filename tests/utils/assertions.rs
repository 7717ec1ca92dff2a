use axum::http::StatusCode;
use serde_json::Value;

use super::setup::{TestApp, TestResponse};

// ============================================================================
// Fluent assertions over responses and registry state
// ============================================================================

pub struct ResponseAssertion<'a> {
    response: &'a TestResponse,
}

#[allow(dead_code)]
impl<'a> ResponseAssertion<'a> {
    pub fn of(response: &'a TestResponse) -> Self {
        Self { response }
    }

    pub fn has_status(self, status: StatusCode) -> Self {
        assert_eq!(
            self.response.status, status,
            "unexpected status, body: {}",
            self.response.body
        );
        self
    }

    pub fn has_message(self, message: &str) -> Self {
        assert_eq!(self.response.body["message"], Value::from(message));
        self
    }

    pub fn has_detail(self, detail: &str) -> Self {
        assert_eq!(self.response.body["detail"], Value::from(detail));
        self
    }

    pub fn redirects_to(self, location: &str) -> Self {
        assert_eq!(self.response.location.as_deref(), Some(location));
        self
    }
}

pub struct ActivitiesAssertion<'a> {
    app: &'a TestApp,
    activity_name: String,
}

#[allow(dead_code)]
impl<'a> ActivitiesAssertion<'a> {
    pub fn for_activity(app: &'a TestApp, activity_name: &str) -> Self {
        Self {
            app,
            activity_name: activity_name.to_string(),
        }
    }

    pub async fn has_participant_once(self, email: &str) -> Self {
        let roster = self.app.roster(&self.activity_name).await;
        let count = roster.iter().filter(|p| p.as_str() == email).count();
        assert_eq!(count, 1, "{} should appear once in {:?}", email, roster);
        self
    }

    pub async fn lacks_participant(self, email: &str) -> Self {
        let roster = self.app.roster(&self.activity_name).await;
        assert!(
            !roster.iter().any(|p| p == email),
            "{} should not be in {:?}",
            email,
            roster
        );
        self
    }

    pub async fn has_roster(self, expected: &[&str]) -> Self {
        let roster = self.app.roster(&self.activity_name).await;
        assert_eq!(roster, expected);
        self
    }
}
