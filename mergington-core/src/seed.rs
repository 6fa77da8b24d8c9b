//! The activities offered when the service starts.
//!
//! There is no persistence: every process begins from this dataset.

use indexmap::IndexMap;

use crate::activity::{ActivityRecord, ParticipantId};

const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Competitive basketball training and interschool games",
        "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
        15,
        &["alex@mergington.edu", "sarah@mergington.edu"],
    ),
    (
        "Track and Field",
        "Running, jumping, and throwing events training",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        25,
        &["lucas@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore various art mediums including painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        18,
        &["maya@mergington.edu", "ethan@mergington.edu"],
    ),
    (
        "Drama Club",
        "Acting, stage performance, and theatrical productions",
        "Tuesdays and Fridays, 3:30 PM - 5:00 PM",
        20,
        &["isabella@mergington.edu", "jacob@mergington.edu"],
    ),
    (
        "Science Olympiad",
        "Competitive science events and STEM problem solving",
        "Wednesdays, 3:30 PM - 5:00 PM",
        16,
        &["ava@mergington.edu", "william@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop critical thinking and public speaking skills",
        "Mondays, 3:30 PM - 5:00 PM",
        14,
        &["grace@mergington.edu"],
    ),
];

/// Returns the nine seed activities keyed by name, in catalogue order.
#[must_use]
pub fn seed_activities() -> IndexMap<String, ActivityRecord> {
    SEED.iter()
        .map(|&(name, description, schedule, max_participants, roster)| {
            let participants = roster.iter().copied().map(ParticipantId::from).collect();
            (
                name.to_owned(),
                ActivityRecord::new(description, schedule, max_participants, participants),
            )
        })
        .collect()
}
