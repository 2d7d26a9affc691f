//! Activity routes.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use serde::Serialize;

use crate::error::ApiError;
use crate::services::activity;
use crate::state::{ActivityListing, AppState, ParticipantId};

/// Query string for the roster mutations, kept as raw pairs. A repeated
/// `email` resolves to its last value; an absent one is a validation error.
#[derive(Debug)]
pub struct ParticipantQuery(Vec<(String, String)>);

impl ParticipantQuery {
    fn from_request(query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> Result<Self, ApiError> {
        let Query(pairs) = query.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
        Ok(Self(pairs))
    }

    fn participant(self) -> Result<ParticipantId, ApiError> {
        self.0
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| ParticipantId::new(value))
            .ok_or(ApiError::MissingParameter("email"))
    }
}

fn activity_name(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    let Path(name) = path.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
    Ok(name)
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /activities` — every activity keyed by name.
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityListing> {
    Json(activity::list_activities(&state).await)
}

/// `POST /activities/:name/signup?email=` — add a participant.
pub async fn signup(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = activity_name(path)?;
    let participant = ParticipantQuery::from_request(query)?.participant()?;
    let confirmation = activity::signup(&state, &name, participant).await?;
    Ok(Json(MessageResponse { message: confirmation.to_string() }))
}

/// `POST /activities/:name/unregister?email=` — remove a participant.
pub async fn unregister(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = activity_name(path)?;
    let participant = ParticipantQuery::from_request(query)?.participant()?;
    let confirmation = activity::unregister(&state, &name, participant).await?;
    Ok(Json(MessageResponse { message: confirmation.to_string() }))
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
