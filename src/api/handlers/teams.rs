use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::caller::CallerId;
use crate::domain::team::{Player, Team};

/// Request body for creating a team
///
/// Every field is optional on the wire so that missing values surface as
/// validation errors rather than body rejections.
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: Option<String>,
    pub sport_type: Option<String>,
    pub roster: Option<Vec<Player>>,
}

/// Request body for replacing a roster
#[derive(Debug, Deserialize)]
pub struct UpdateRosterRequest {
    pub roster: Vec<Player>,
}

/// Team as returned by every endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamResponse {
    pub id: String,
    pub owner: CallerId,
    pub name: String,
    pub sport_type: String,
    pub roster: Vec<Player>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().to_string(),
            owner: team.owner(),
            name: team.name().to_string(),
            sport_type: team.sport_type().to_string(),
            roster: team.roster().to_vec(),
            created_at: team.created_at(),
            updated_at: team.updated_at(),
        }
    }
}

/// Create a new team owned by the caller
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    JwtAuth(caller): JwtAuth,
    ApiJson(req): ApiJson<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let team = state.teams.create_team(
        caller,
        req.name.unwrap_or_default(),
        req.sport_type.unwrap_or_default(),
        req.roster,
    )?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.get_team(&id)?;

    Ok(Json(TeamResponse::from(&team)))
}

/// List every team
///
/// GET /api/teams
pub async fn get_all_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.get_all_teams()?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Replace a team's roster
///
/// PUT /api/teams/:id/roster
pub async fn update_team(
    State(state): State<AppState>,
    JwtAuth(caller): JwtAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateRosterRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.update_team(caller, &id, req.roster)?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team, returning its final state
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    JwtAuth(caller): JwtAuth,
    Path(id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.delete_team(caller, &id)?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Append a player to a team's roster
///
/// POST /api/teams/:id/players
pub async fn add_player(
    State(state): State<AppState>,
    JwtAuth(caller): JwtAuth,
    Path(id): Path<String>,
    ApiJson(player): ApiJson<Player>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.add_player_to_team(caller, &id, player)?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Remove every player with the given name from a team's roster
///
/// DELETE /api/teams/:id/players/:name
pub async fn delete_player(
    State(state): State<AppState>,
    JwtAuth(caller): JwtAuth,
    Path((id, name)): Path<(String, String)>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.delete_player_to_team(caller, &id, &name)?;

    Ok(Json(TeamResponse::from(&team)))
}
