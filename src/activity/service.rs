use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    repository::{ActivityRepository, SignupResult, UnregisterResult},
    types::{ActivityCatalog, MessageResponse},
};
use crate::shared::AppError;

pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";
pub const ALREADY_SIGNED_UP: &str = "Student already signed up for this activity";
pub const NOT_REGISTERED: &str = "Student is not registered for this activity";

/// Service for handling activity signup business logic
pub struct ActivityService {
    repository: Arc<dyn ActivityRepository + Send + Sync>,
}

impl ActivityService {
    pub fn new(repository: Arc<dyn ActivityRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Lists every activity with its current roster
    #[instrument(skip(self))]
    pub async fn list_activities(&self) -> Result<ActivityCatalog, AppError> {
        let activities = self.repository.list_activities().await?;
        debug!(activity_count = activities.len(), "Activities retrieved");
        Ok(ActivityCatalog(activities))
    }

    /// Signs a student up for an activity
    ///
    /// Capacity is not checked; `max_participants` is informational.
    #[instrument(skip(self))]
    pub async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, AppError> {
        match self.repository.try_signup(activity_name, email).await? {
            SignupResult::Success(activity) => {
                info!(
                    activity_name = %activity_name,
                    email = %email,
                    participant_count = activity.participant_count(),
                    "Student signed up"
                );
                Ok(MessageResponse {
                    message: format!("Signed up {} for {}", email, activity_name),
                })
            }
            SignupResult::AlreadySignedUp => Err(AppError::Conflict(ALREADY_SIGNED_UP.to_string())),
            SignupResult::ActivityNotFound => {
                Err(AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()))
            }
        }
    }

    /// Removes a student from an activity
    #[instrument(skip(self))]
    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, AppError> {
        match self.repository.try_unregister(activity_name, email).await? {
            UnregisterResult::Success(activity) => {
                info!(
                    activity_name = %activity_name,
                    email = %email,
                    participant_count = activity.participant_count(),
                    "Student unregistered"
                );
                Ok(MessageResponse {
                    message: format!("Unregistered {} from {}", email, activity_name),
                })
            }
            // Reported as a bad request, not a 404
            UnregisterResult::NotRegistered => Err(AppError::Conflict(NOT_REGISTERED.to_string())),
            UnregisterResult::ActivityNotFound => {
                Err(AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()))
            }
        }
    }
}
