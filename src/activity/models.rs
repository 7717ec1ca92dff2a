use serde::Serialize;

/// In-memory model for a single extracurricular activity
///
/// The activity name is the registry key and is not part of the serialized
/// body; it is carried here so the registry can keep seed order in a `Vec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityModel {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32, // Advisory only, signups never check it
    pub participants: Vec<String>, // Emails in signup order
}

impl ActivityModel {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: vec![],
        }
    }

    /// Seeds the roster, dropping any repeated email
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            self.add_participant(email.into());
        }
        self
    }

    /// Get the current number of participants
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Remaining capacity, for display only
    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }

    /// Check if the roster has reached `max_participants`
    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }

    /// Check if an email is on the roster (exact match)
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Appends an email to the roster; returns false if it was already there
    pub fn add_participant(&mut self, email: String) -> bool {
        if self.has_participant(&email) {
            return false;
        }
        self.participants.push(email);
        true
    }

    /// Removes an email from the roster; returns false if it was not there
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }
}
