//! League table HTTP endpoint.
//!
//! - GET /api/v1/standings?competition=PL

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::{ApiError, ErrorResponse};
use crate::routes::AppState;
use crate::services::football::StandingEntry;

// ---------------------------------------------------------------------------
// Query parameter and response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, IntoParams)]
pub struct StandingsQuery {
    /// Competition code (e.g. "PL", "BL1", "SA")
    pub competition: Option<String>,
}

/// One row of the overall league table.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub position: i64,
    pub team_id: i64,
    pub team_name: String,
    pub team_logo: Option<String>,
    pub played_games: i64,
    pub won: i64,
    pub draw: i64,
    pub lost: i64,
    pub points: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
    /// Recent results string from the feed (e.g. "W,D,L,W,W"), when provided
    pub form: Option<String>,
}

impl From<StandingEntry> for StandingRow {
    fn from(entry: StandingEntry) -> Self {
        Self {
            position: entry.position,
            team_id: entry.team.id,
            team_name: entry.team.name,
            team_logo: entry.team.crest,
            played_games: entry.played_games,
            won: entry.won,
            draw: entry.draw,
            lost: entry.lost,
            points: entry.points,
            goals_for: entry.goals_for,
            goals_against: entry.goals_against,
            goal_difference: entry.goal_difference,
            form: entry.form,
        }
    }
}

/// League table for one competition.
#[derive(Debug, Serialize, ToSchema)]
pub struct StandingsResponse {
    /// Competition display name (e.g. "Premier League")
    pub competition: String,
    /// Season metadata from the feed, passed through untouched
    #[schema(value_type = Object)]
    pub season: serde_json::Value,
    /// Overall table, first place first
    pub standings: Vec<StandingRow>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// Current league table for a competition.
///
/// The feed publishes separate TOTAL, HOME and AWAY groupings; only the
/// overall (TOTAL) table is returned here.
#[utoipa::path(
    get,
    path = "/api/v1/standings",
    tag = "Competitions",
    params(StandingsQuery),
    responses(
        (status = 200, description = "Overall league table", body = StandingsResponse),
        (status = 400, description = "Missing credentials or competition code", body = ErrorResponse),
        (status = 502, description = "Standings fetch failed upstream", body = ErrorResponse),
    )
)]
pub async fn get_standings(
    State(state): State<AppState>,
    Query(params): Query<StandingsQuery>,
) -> Result<Json<StandingsResponse>, ApiError> {
    state.football.ensure_configured()?;

    let competition = params
        .competition
        .filter(|code| !code.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Competition code is required".to_string()))?;

    let payload = state.football.standings(&competition).await?;

    let standings: Vec<StandingRow> = payload
        .standings
        .into_iter()
        .find(|group| group.kind == "TOTAL")
        .map(|group| group.table.into_iter().map(StandingRow::from).collect())
        .unwrap_or_default();

    Ok(Json(StandingsResponse {
        competition: payload.competition.name,
        season: payload.season,
        standings,
    }))
}
