use serde::{ser::SerializeMap, Serialize, Serializer};

use super::models::ActivityModel;

/// Query string for signup and unregister (`?email=...`)
#[derive(Debug, PartialEq)]
pub struct EmailQuery {
    pub email: String,
}

impl EmailQuery {
    /// Picks the `email` parameter from decoded query pairs; a repeated key keeps the last value
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Option<Self> {
        pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, email)| Self { email })
    }
}

/// Confirmation body for a successful signup or unregister
#[derive(Debug, Serialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for the activity listing: a JSON object keyed by activity name
///
/// Serialized by hand so keys come out in registry order rather than the
/// sorted order a `serde_json::Map` would give.
#[derive(Debug, Clone)]
pub struct ActivityCatalog(pub Vec<ActivityModel>);

impl ActivityCatalog {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ActivityModel> {
        self.0.iter().find(|activity| activity.name == name)
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}
