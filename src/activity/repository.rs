use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

use super::models::ActivityModel;
use super::seed;
use crate::shared::AppError;

/// Result of attempting to sign a student up
#[derive(Debug, Clone)]
pub enum SignupResult {
    /// Email appended to the roster, returns updated activity data
    Success(ActivityModel),
    /// Email is already on the roster
    AlreadySignedUp,
    /// Activity does not exist
    ActivityNotFound,
}

/// Result of attempting to remove a student from an activity
#[derive(Debug, Clone)]
pub enum UnregisterResult {
    /// Email removed from the roster, returns updated activity data
    Success(ActivityModel),
    /// Email was not on the roster
    NotRegistered,
    /// Activity does not exist
    ActivityNotFound,
}

/// Trait for activity registry operations
#[async_trait]
pub trait ActivityRepository {
    /// All activities in registry order
    async fn list_activities(&self) -> Result<Vec<ActivityModel>, AppError>;

    /// Atomically checks the roster for the email and appends it
    async fn try_signup(&self, name: &str, email: &str) -> Result<SignupResult, AppError>;

    /// Atomically checks the roster for the email and removes it
    async fn try_unregister(&self, name: &str, email: &str)
        -> Result<UnregisterResult, AppError>;
}

/// In-memory activity registry
///
/// Activities are kept in a `Vec` so listing follows seed order. The set of
/// activities is fixed at construction; only rosters change afterwards.
pub struct InMemoryActivityRepository {
    activities: Mutex<Vec<ActivityModel>>,
}

impl Default for InMemoryActivityRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryActivityRepository {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::with_activities(Vec::new())
    }

    /// Creates a registry from the given activities; later duplicates of a name are dropped
    pub fn with_activities(activities: Vec<ActivityModel>) -> Self {
        let mut unique: Vec<ActivityModel> = Vec::with_capacity(activities.len());
        for activity in activities {
            if unique.iter().any(|a| a.name == activity.name) {
                warn!(activity_name = %activity.name, "Duplicate activity name, skipping");
                continue;
            }
            unique.push(activity);
        }

        Self {
            activities: Mutex::new(unique),
        }
    }

    /// Creates a registry holding the Mergington High School catalog
    pub fn seeded() -> Self {
        Self::with_activities(seed::seed_activities())
    }

    /// Returns the number of activities in the registry
    pub fn activity_count(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<ActivityModel>>, AppError> {
        self.activities.lock().map_err(|_| {
            warn!("Activity registry lock poisoned");
            AppError::Internal
        })
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    #[instrument(skip(self))]
    async fn list_activities(&self) -> Result<Vec<ActivityModel>, AppError> {
        debug!("Listing all activities in memory");

        let activities = self.lock()?;
        Ok(activities.clone())
    }

    #[instrument(skip(self))]
    async fn try_signup(&self, name: &str, email: &str) -> Result<SignupResult, AppError> {
        debug!(activity_name = %name, email = %email, "Attempting signup atomically");

        let mut activities = self.lock()?;

        let activity = match activities.iter_mut().find(|a| a.name == name) {
            Some(activity) => activity,
            None => {
                debug!(activity_name = %name, "Activity not found");
                return Ok(SignupResult::ActivityNotFound);
            }
        };

        if !activity.add_participant(email.to_string()) {
            debug!(activity_name = %name, email = %email, "Student already signed up");
            return Ok(SignupResult::AlreadySignedUp);
        }

        info!(
            activity_name = %name,
            email = %email,
            participant_count = activity.participant_count(),
            max_participants = activity.max_participants,
            "Student signed up (atomic)"
        );

        Ok(SignupResult::Success(activity.clone()))
    }

    #[instrument(skip(self))]
    async fn try_unregister(
        &self,
        name: &str,
        email: &str,
    ) -> Result<UnregisterResult, AppError> {
        debug!(activity_name = %name, email = %email, "Attempting unregister atomically");

        let mut activities = self.lock()?;

        let activity = match activities.iter_mut().find(|a| a.name == name) {
            Some(activity) => activity,
            None => {
                debug!(activity_name = %name, "Activity not found");
                return Ok(UnregisterResult::ActivityNotFound);
            }
        };

        if !activity.remove_participant(email) {
            debug!(activity_name = %name, email = %email, "Student not registered");
            return Ok(UnregisterResult::NotRegistered);
        }

        info!(
            activity_name = %name,
            email = %email,
            participant_count = activity.participant_count(),
            "Student unregistered (atomic)"
        );

        Ok(UnregisterResult::Success(activity.clone()))
    }
}
