//! Activity service — list, signup, and unregister.
//!
//! DESIGN
//! ======
//! Each mutation takes the directory write guard once and does its
//! membership check and roster edit under that one guard, so two requests
//! on the same activity cannot interleave between check and edit. Listing
//! takes the read guard and returns an owned snapshot.
//!
//! Capacity (`max_participants`) is reported but never enforced here.

use std::fmt;

use tracing::{debug, info, warn};

use crate::error::ErrorCode;
use crate::state::{ActivityListing, AppState, ParticipantId};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound(String),
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp { activity: String, participant: ParticipantId },
    #[error("Student is not signed up for this activity")]
    NotSignedUp { activity: String, participant: ParticipantId },
}

impl ErrorCode for DirectoryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_ACTIVITY_NOT_FOUND",
            Self::AlreadySignedUp { .. } => "E_ALREADY_SIGNED_UP",
            Self::NotSignedUp { .. } => "E_NOT_SIGNED_UP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterChange {
    SignedUp,
    Unregistered,
}

/// Successful roster change, naming who moved and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub change: RosterChange,
    pub participant: ParticipantId,
    pub activity: String,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.change {
            RosterChange::SignedUp => write!(f, "{} signed up for {}", self.participant, self.activity),
            RosterChange::Unregistered => write!(f, "{} unregistered from {}", self.participant, self.activity),
        }
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Every activity with its current attributes, in directory order.
pub async fn list_activities(state: &AppState) -> ActivityListing {
    let directory = state.directory.read().await;
    let listing = directory.snapshot();
    debug!(activities = listing.len(), "listed activities");
    listing
}

/// Append `participant` to the roster of `activity`.
///
/// # Errors
///
/// Returns `NotFound` for an unknown activity and `AlreadySignedUp` if the
/// participant is already on the roster. The directory is unchanged on error.
pub async fn signup(state: &AppState, activity: &str, participant: ParticipantId) -> Result<Confirmation, DirectoryError> {
    let mut directory = state.directory.write().await;
    let Some(record) = directory.get_mut(activity) else {
        warn!(%activity, "signup for unknown activity");
        return Err(DirectoryError::NotFound(activity.to_owned()));
    };

    if record.is_signed_up(&participant) {
        debug!(%activity, %participant, "duplicate signup rejected");
        return Err(DirectoryError::AlreadySignedUp { activity: activity.to_owned(), participant });
    }

    record.participants.push(participant.clone());
    info!(
        %activity,
        %participant,
        participants = record.participants.len(),
        max_participants = record.max_participants,
        "participant signed up"
    );

    Ok(Confirmation { change: RosterChange::SignedUp, participant, activity: activity.to_owned() })
}

/// Remove one occurrence of `participant` from the roster of `activity`.
///
/// # Errors
///
/// Returns `NotFound` for an unknown activity and `NotSignedUp` if the
/// participant is not on the roster. The directory is unchanged on error.
pub async fn unregister(
    state: &AppState,
    activity: &str,
    participant: ParticipantId,
) -> Result<Confirmation, DirectoryError> {
    let mut directory = state.directory.write().await;
    let Some(record) = directory.get_mut(activity) else {
        warn!(%activity, "unregister from unknown activity");
        return Err(DirectoryError::NotFound(activity.to_owned()));
    };

    let Some(position) = record.participants.iter().position(|p| *p == participant) else {
        debug!(%activity, %participant, "unregister of absent participant rejected");
        return Err(DirectoryError::NotSignedUp { activity: activity.to_owned(), participant });
    };

    record.participants.remove(position);
    info!(%activity, %participant, participants = record.participants.len(), "participant unregistered");

    Ok(Confirmation { change: RosterChange::Unregistered, participant, activity: activity.to_owned() })
}

#[cfg(test)]
#[path = "activity_test.rs"]
mod tests;
