//! In-memory activity directory.
//!
//! Holds every activity keyed by name and enforces roster uniqueness on
//! each mutation. Activities are fixed at construction; only rosters change.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::debug;

use crate::activity::{ActivityRecord, ParticipantId};
use crate::error::DirectoryError;
use crate::seed::seed_activities;

/// Thread-safe directory of activities.
///
/// A single directory-wide lock guards the map, so the duplicate check and
/// the append in [`enroll`](Self::enroll) happen atomically.
#[derive(Debug)]
pub struct ActivityDirectory {
    activities: RwLock<IndexMap<String, ActivityRecord>>,
}

impl ActivityDirectory {
    /// Create a directory holding exactly `activities`.
    #[must_use]
    pub fn new(activities: IndexMap<String, ActivityRecord>) -> Self {
        Self { activities: RwLock::new(activities) }
    }

    /// Create a directory populated with the seed catalogue.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Snapshot of every activity, in catalogue order.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn list(&self) -> IndexMap<String, ActivityRecord> {
        self.read().clone()
    }

    /// Snapshot of a single activity.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn get(&self, activity: &str) -> Option<ActivityRecord> {
        self.read().get(activity).cloned()
    }

    /// Number of activities in the directory.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if the directory holds no activities.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Append `participant` to the roster of `activity`.
    ///
    /// Capacity is advisory: `max_participants` is not checked.
    ///
    /// # Errors
    /// Returns [`DirectoryError::ActivityNotFound`] if no such activity exists,
    /// or [`DirectoryError::AlreadySignedUp`] if the participant is already
    /// on the roster. The directory is unchanged on error.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn enroll(
        &self,
        activity: &str,
        participant: impl Into<ParticipantId>,
    ) -> Result<(), DirectoryError> {
        let participant = participant.into();
        let mut activities = self.write();
        let record = activities
            .get_mut(activity)
            .ok_or_else(|| DirectoryError::ActivityNotFound { activity: activity.to_owned() })?;

        if record.is_enrolled(&participant) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity.to_owned(),
                participant,
            });
        }

        debug!(activity, participant = %participant, "participant enrolled");
        record.participants.push(participant);
        Ok(())
    }

    /// Remove `participant` from the roster of `activity`.
    ///
    /// # Errors
    /// Returns [`DirectoryError::ActivityNotFound`] if no such activity exists,
    /// or [`DirectoryError::ParticipantNotFound`] if the participant is not
    /// on the roster. The directory is unchanged on error.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn unenroll(
        &self,
        activity: &str,
        participant: impl Into<ParticipantId>,
    ) -> Result<(), DirectoryError> {
        let participant = participant.into();
        let mut activities = self.write();
        let record = activities
            .get_mut(activity)
            .ok_or_else(|| DirectoryError::ActivityNotFound { activity: activity.to_owned() })?;

        let Some(position) = record.participants.iter().position(|p| *p == participant) else {
            return Err(DirectoryError::ParticipantNotFound {
                activity: activity.to_owned(),
                participant,
            });
        };

        record.participants.remove(position);
        debug!(activity, participant = %participant, "participant removed");
        Ok(())
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, ActivityRecord>> {
        self.activities.read().expect("activity directory read lock poisoned")
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, ActivityRecord>> {
        self.activities.write().expect("activity directory write lock poisoned")
    }
}

impl Default for ActivityDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
