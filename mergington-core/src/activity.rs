use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a student on an activity roster, usually an email address.
///
/// The value is opaque: the directory never validates its format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl PartialEq<str> for ParticipantId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ParticipantId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An extracurricular activity and its roster.
///
/// The activity name is the directory key and is not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ActivityRecord {
    /// Free-text summary of the activity.
    pub description: String,
    /// Free-text meeting times, e.g. `"Fridays, 3:30 PM - 5:00 PM"`.
    pub schedule: String,
    /// Advisory capacity. Enrollment does not check it.
    pub max_participants: u32,
    /// Enrolled participants in signup order.
    pub participants: Vec<ParticipantId>,
}

impl ActivityRecord {
    /// Creates a record with the given roster.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<ParticipantId>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        }
    }

    /// Returns `true` if `participant` is on the roster.
    #[must_use]
    pub fn is_enrolled(&self, participant: &ParticipantId) -> bool {
        self.participants.contains(participant)
    }

    /// Number of enrolled participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Returns `true` if nobody is enrolled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> ActivityRecord {
        ActivityRecord::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            2,
            vec!["michael@mergington.edu".into(), "daniel@mergington.edu".into()],
        )
    }

    #[test]
    fn record_serializes_with_wire_field_names() {
        let json = match serde_json::to_value(chess()) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json["schedule"], "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(json["max_participants"], 2);
        assert_eq!(
            json["participants"],
            serde_json::json!(["michael@mergington.edu", "daniel@mergington.edu"])
        );
        assert!(json.get("name").is_none(), "name is the map key, not a field");
    }

    #[test]
    fn is_enrolled_matches_exact_identifier() {
        let record = chess();
        assert!(record.is_enrolled(&"michael@mergington.edu".into()));
        assert!(!record.is_enrolled(&"Michael@mergington.edu".into()));
    }

    #[test]
    fn participant_id_display_is_raw_value() {
        let id = ParticipantId::from("new+student@mergington.edu");
        assert_eq!(id.to_string(), "new+student@mergington.edu");
        assert_eq!(id, "new+student@mergington.edu");
    }
}
