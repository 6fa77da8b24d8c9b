//! Activity directory for the Mergington High School activities service.
//!
//! Defines the activity record, participant identifiers, and the in-memory
//! directory through which students are enrolled and removed.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod activity;
pub mod directory;
pub mod error;
pub mod seed;

pub use activity::{ActivityRecord, ParticipantId};
pub use directory::ActivityDirectory;
pub use error::{DirectoryError, ErrorKind};
pub use seed::seed_activities;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directory_is_seeded() {
        let dir = ActivityDirectory::default();
        assert_eq!(dir.len(), seed_activities().len());
        assert_eq!(dir.list(), seed_activities());
    }

    #[test]
    fn error_kinds_map_to_taxonomy() {
        let not_found = DirectoryError::ActivityNotFound { activity: "Chess".to_owned() };
        assert_eq!(not_found.kind(), ErrorKind::NotFound);

        let conflict = DirectoryError::AlreadySignedUp {
            activity: "Chess Club".to_owned(),
            participant: ParticipantId::from("michael@mergington.edu"),
        };
        assert_eq!(conflict.kind(), ErrorKind::Conflict);

        let missing = DirectoryError::ParticipantNotFound {
            activity: "Chess Club".to_owned(),
            participant: ParticipantId::from("nobody@mergington.edu"),
        };
        assert_eq!(missing.kind(), ErrorKind::NotFound);
        assert_eq!(missing.activity(), "Chess Club");
    }

    #[test]
    fn directory_list_serializes_as_object_keyed_by_name() {
        let dir = ActivityDirectory::seeded();
        let json = match serde_json::to_value(dir.list()) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        let obj = match json.as_object() {
            Some(o) => o,
            None => panic!("expected JSON object, got {json}"),
        };
        assert_eq!(obj.len(), 9);
        assert_eq!(json["Debate Team"]["participants"][0], "grace@mergington.edu");
        assert_eq!(json["Gym Class"]["max_participants"], 30);
    }
}
