//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It owns the activity directory: every activity keyed by name, held in
//! memory for the lifetime of the process. Activity keys are fixed at
//! construction; only participant rosters change afterwards.
//!
//! The directory sits behind a single `RwLock`. Signup and unregister hold
//! the write guard across their whole read-modify-write; listing takes the
//! read guard and clones a snapshot out.

use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use tokio::sync::RwLock;

// =============================================================================
// PARTICIPANT ID
// =============================================================================

/// Opaque participant identifier, stored exactly as the caller sent it.
///
/// Email-shaped by convention only. No trimming, case folding, or format
/// check is applied; the empty string is a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ACTIVITY
// =============================================================================

/// One extracurricular activity. The name is the directory key and is not
/// repeated here.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory capacity. Signup does not enforce it.
    pub max_participants: u32,
    /// Roster in signup order. Never holds the same identifier twice.
    pub participants: Vec<ParticipantId>,
}

impl Activity {
    #[must_use]
    pub fn is_signed_up(&self, participant: &ParticipantId) -> bool {
        self.participants.contains(participant)
    }
}

// =============================================================================
// ACTIVITY DIRECTORY
// =============================================================================

/// Activities keyed by exact, case-sensitive name, in insertion order.
///
/// A `Vec` keeps the order the catalogue was seeded in; with nine entries a
/// linear lookup is fine.
#[derive(Debug, Clone, Default)]
pub struct ActivityDirectory {
    entries: Vec<(String, Activity)>,
}

impl ActivityDirectory {
    /// Build a directory from `(name, activity)` pairs. Later duplicates of a
    /// name are dropped so keys stay unique; callers that care about
    /// duplicates (the seed loader) reject them before getting here.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (String, Activity)>) -> Self {
        let mut directory = Self::default();
        for (name, activity) in entries {
            if directory.get(&name).is_none() {
                directory.entries.push((name, activity));
            }
        }
        directory
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(key, _)| key == name).map(|(_, activity)| activity)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, activity)| activity)
    }

    #[cfg(test)]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Owned copy of every activity, detached from the lock.
    #[must_use]
    pub fn snapshot(&self) -> ActivityListing {
        ActivityListing(self.entries.clone())
    }
}

// =============================================================================
// ACTIVITY LISTING
// =============================================================================

/// Point-in-time copy of the directory returned by the list operation.
///
/// Serializes as a JSON object keyed by activity name, preserving directory
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityListing(Vec<(String, Activity)>);

impl ActivityListing {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
impl ActivityListing {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(name, activity)| (name.as_str(), activity))
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, activity)| (name, activity)))
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the directory is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<ActivityDirectory>>,
}

impl AppState {
    #[must_use]
    pub fn new(directory: ActivityDirectory) -> Self {
        Self { directory: Arc::new(RwLock::new(directory)) }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` seeded with the built-in catalogue.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(crate::seed::default_directory())
    }

    /// Build a bare activity with the given capacity and roster.
    #[must_use]
    pub fn activity(max_participants: u32, participants: &[&str]) -> Activity {
        Activity {
            description: "Test activity".into(),
            schedule: "Daily, 9:00 AM - 10:00 AM".into(),
            max_participants,
            participants: participants.iter().map(|p| ParticipantId::new(*p)).collect(),
        }
    }

    /// Read one activity's roster as plain strings.
    pub async fn roster(state: &AppState, name: &str) -> Vec<String> {
        let directory = state.directory.read().await;
        directory
            .get(name)
            .expect("activity should exist")
            .participants
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
