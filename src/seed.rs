//! Activity catalogue used to seed the directory at startup.
//!
//! The built-in catalogue holds the nine school activities. Deployments can
//! swap it for a YAML file (`ACTIVITIES_SEED_PATH`), a list of entries:
//!
//! ```yaml
//! - name: Chess Club
//!   description: Learn strategies and compete in chess tournaments
//!   schedule: Fridays, 3:30 PM - 5:00 PM
//!   max_participants: 12
//!   participants: [michael@mergington.edu]
//! ```
//!
//! A file is validated as a whole before any of it is used.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::state::{Activity, ActivityDirectory, ParticipantId};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("seed catalogue is empty")]
    Empty,
    #[error("duplicate activity name: {0}")]
    DuplicateActivity(String),
    #[error("activity {activity:?} has an empty {field}")]
    EmptyField { activity: String, field: &'static str },
    #[error("activity {0:?} must allow at least one participant")]
    ZeroCapacity(String),
    #[error("activity {activity:?} lists participant {participant:?} more than once")]
    DuplicateParticipant { activity: String, participant: String },
}

/// One catalogue entry as written in the seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

const BUILTIN: &[(&str, &str, &str, u32, &[&str])] = &[
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
        "Competitive basketball team and recreational play",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["alex@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Learn tennis skills and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        12,
        &["james@mergington.edu", "jessica@mergington.edu"],
    ),
    (
        "Drama Club",
        "Perform in theatrical productions and develop acting skills",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        25,
        &["grace@mergington.edu"],
    ),
    (
        "Art Studio",
        "Explore painting, drawing, and sculpture techniques",
        "Mondays and Thursdays, 3:30 PM - 5:00 PM",
        18,
        &["isabella@mergington.edu", "lucas@mergington.edu"],
    ),
    (
        "Robotics Club",
        "Design, build, and compete with robots",
        "Tuesdays, 4:00 PM - 5:30 PM",
        16,
        &["noah@mergington.edu"],
    ),
    (
        "Science olympiad",
        "Compete in science competitions and experiments",
        "Fridays, 3:30 PM - 5:00 PM",
        15,
        &["liam@mergington.edu", "ava@mergington.edu"],
    ),
];

/// The built-in nine-activity catalogue.
#[must_use]
pub fn builtin_catalogue() -> Vec<SeedActivity> {
    BUILTIN
        .iter()
        .map(|(name, description, schedule, max_participants, participants)| SeedActivity {
            name: (*name).to_owned(),
            description: (*description).to_owned(),
            schedule: (*schedule).to_owned(),
            max_participants: *max_participants,
            participants: participants.iter().map(|p| (*p).to_owned()).collect(),
        })
        .collect()
}

/// Directory seeded from the built-in catalogue.
#[must_use]
pub fn default_directory() -> ActivityDirectory {
    build_unchecked(builtin_catalogue())
}

/// Load the directory from `path`, or the built-in catalogue when `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML, or fails
/// catalogue validation.
pub fn load_directory(path: Option<&Path>) -> Result<ActivityDirectory, SeedError> {
    let Some(path) = path else {
        return Ok(default_directory());
    };

    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read { path: path.to_path_buf(), source })?;
    let directory = directory_from_yaml(&raw)?;
    tracing::info!(path = %path.display(), activities = directory.len(), "loaded activity catalogue");
    Ok(directory)
}

/// Parse and validate a YAML catalogue.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or fails catalogue validation.
pub fn directory_from_yaml(raw: &str) -> Result<ActivityDirectory, SeedError> {
    let entries: Vec<SeedActivity> = serde_yaml::from_str(raw)?;
    validate(&entries)?;
    Ok(build_unchecked(entries))
}

/// Check the directory invariants a seed file could violate.
///
/// # Errors
///
/// Returns the first violation found, in file order.
pub fn validate(entries: &[SeedActivity]) -> Result<(), SeedError> {
    if entries.is_empty() {
        return Err(SeedError::Empty);
    }

    let mut names = HashSet::new();
    for entry in entries {
        if !names.insert(entry.name.as_str()) {
            return Err(SeedError::DuplicateActivity(entry.name.clone()));
        }
        if entry.description.trim().is_empty() {
            return Err(SeedError::EmptyField { activity: entry.name.clone(), field: "description" });
        }
        if entry.schedule.trim().is_empty() {
            return Err(SeedError::EmptyField { activity: entry.name.clone(), field: "schedule" });
        }
        if entry.max_participants == 0 {
            return Err(SeedError::ZeroCapacity(entry.name.clone()));
        }

        let mut seen = HashSet::new();
        for participant in &entry.participants {
            if !seen.insert(participant.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: entry.name.clone(),
                    participant: participant.clone(),
                });
            }
        }
    }
    Ok(())
}

fn build_unchecked(entries: Vec<SeedActivity>) -> ActivityDirectory {
    ActivityDirectory::new(entries.into_iter().map(|entry| {
        let activity = Activity {
            description: entry.description,
            schedule: entry.schedule,
            max_participants: entry.max_participants,
            participants: entry.participants.into_iter().map(ParticipantId::new).collect(),
        };
        (entry.name, activity)
    }))
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
