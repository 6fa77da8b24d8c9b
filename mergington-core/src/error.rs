use crate::activity::ParticipantId;

/// Broad category of a [`DirectoryError`].
///
/// Both categories are client-input errors: they are never retried and
/// always surface to the caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The activity, or the participant within it, does not exist.
    NotFound,
    /// The participant is already enrolled.
    Conflict,
}

/// Errors produced by the `mergington-core` crate.
///
/// The `Display` text is the fixed human-readable message shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DirectoryError {
    /// No activity with this name exists in the directory.
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    /// The participant already appears in the activity's roster.
    #[error("Student already signed up for this activity")]
    AlreadySignedUp {
        activity: String,
        participant: ParticipantId,
    },

    /// The participant is not in the activity's roster.
    #[error("Participant not found in this activity")]
    ParticipantNotFound {
        activity: String,
        participant: ParticipantId,
    },
}

impl DirectoryError {
    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ActivityNotFound { .. } | Self::ParticipantNotFound { .. } => {
                ErrorKind::NotFound
            }
            Self::AlreadySignedUp { .. } => ErrorKind::Conflict,
        }
    }

    /// Returns the name of the activity the failed operation targeted.
    #[must_use]
    pub fn activity(&self) -> &str {
        match self {
            Self::ActivityNotFound { activity }
            | Self::AlreadySignedUp { activity, .. }
            | Self::ParticipantNotFound { activity, .. } => activity,
        }
    }
}
