//! Top scorers HTTP endpoint.
//!
//! - GET /api/v1/scorers?competition=PL&limit=10

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::{ApiError, ErrorResponse};
use crate::routes::AppState;
use crate::services::football::ScorerEntry;

/// Scorer count returned when the caller does not ask for a specific limit.
const DEFAULT_SCORER_LIMIT: u32 = 10;

// ---------------------------------------------------------------------------
// Query parameter and response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, IntoParams)]
pub struct ScorersQuery {
    /// Competition code (e.g. "PL", "BL1", "SA")
    pub competition: Option<String>,
    /// Number of scorers to return (defaults to 10)
    pub limit: Option<u32>,
}

/// One row of the top-scorers list.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScorerRow {
    pub player_id: i64,
    pub player_name: String,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub team_id: i64,
    pub team_name: String,
    pub team_logo: Option<String>,
    pub goals: i64,
    /// Zero when the feed has no assist count for the player
    pub assists: i64,
    /// Zero when the feed has no penalty count for the player
    pub penalties: i64,
}

impl From<ScorerEntry> for ScorerRow {
    fn from(entry: ScorerEntry) -> Self {
        Self {
            player_id: entry.player.id,
            player_name: entry.player.name,
            nationality: entry.player.nationality,
            position: entry.player.position,
            team_id: entry.team.id,
            team_name: entry.team.name,
            team_logo: entry.team.crest,
            goals: entry.goals,
            assists: entry.assists.unwrap_or(0),
            penalties: entry.penalties.unwrap_or(0),
        }
    }
}

/// Top scorers for one competition.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScorersResponse {
    /// Competition display name (e.g. "Premier League")
    pub competition: String,
    /// Season metadata from the feed, passed through untouched
    #[schema(value_type = Object)]
    pub season: serde_json::Value,
    /// Scorers ordered by goals, top scorer first
    pub scorers: Vec<ScorerRow>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// Top scorers for a competition.
#[utoipa::path(
    get,
    path = "/api/v1/scorers",
    tag = "Competitions",
    params(ScorersQuery),
    responses(
        (status = 200, description = "Top scorers list", body = ScorersResponse),
        (status = 400, description = "Missing credentials or competition code", body = ErrorResponse),
        (status = 502, description = "Scorers fetch failed upstream", body = ErrorResponse),
    )
)]
pub async fn get_scorers(
    State(state): State<AppState>,
    Query(params): Query<ScorersQuery>,
) -> Result<Json<ScorersResponse>, ApiError> {
    state.football.ensure_configured()?;

    let competition = params
        .competition
        .filter(|code| !code.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Competition code is required".to_string()))?;
    let limit = params.limit.unwrap_or(DEFAULT_SCORER_LIMIT);

    let payload = state.football.scorers(&competition, limit).await?;
    let scorers: Vec<ScorerRow> = payload.scorers.into_iter().map(ScorerRow::from).collect();

    Ok(Json(ScorersResponse {
        competition: payload.competition.name,
        season: payload.season,
        scorers,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::football::FootballClient;
    use crate::services::venues::VenueDirectory;
    use crate::services::weather::WeatherClient;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state_with(football: FootballClient) -> AppState {
        AppState {
            football,
            weather: WeatherClient::new(None),
            venues: VenueDirectory::with_default_table(),
            competitions: "PL".to_string(),
        }
    }

    #[tokio::test]
    async fn test_competition_code_required() {
        let state = state_with(FootballClient::new(Some("token".to_string())));
        let query = ScorersQuery {
            competition: None,
            limit: None,
        };

        let err = get_scorers(State(state), Query(query)).await.unwrap_err();
        match err {
            ApiError::BadRequest(msg) => assert_eq!(msg, "Competition code is required"),
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_counts_default_to_zero() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/PL/scorers"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "competition": { "name": "Premier League" },
                "season": { "id": 2403 },
                "scorers": [
                    {
                        "player": {
                            "id": 3754,
                            "name": "Erling Haaland",
                            "nationality": "Norway",
                            "position": "Centre-Forward"
                        },
                        "team": { "id": 65, "name": "Manchester City FC", "crest": "https://crests.football-data.org/65.png" },
                        "goals": 4,
                        "assists": 1,
                        "penalties": 1
                    },
                    {
                        "player": { "id": 8004, "name": "Alexander Isak", "nationality": null, "position": null },
                        "team": { "id": 67, "name": "Newcastle United FC", "crest": null },
                        "goals": 3,
                        "assists": null,
                        "penalties": null
                    }
                ]
            })))
            .mount(&server)
            .await;

        let state = state_with(FootballClient::with_base_url(
            Some("token".to_string()),
            &server.uri(),
        ));
        let query = ScorersQuery {
            competition: Some("PL".to_string()),
            limit: None,
        };

        let Json(response) = get_scorers(State(state), Query(query)).await.unwrap();
        assert_eq!(response.competition, "Premier League");
        assert_eq!(response.scorers.len(), 2);
        assert_eq!(response.scorers[0].player_name, "Erling Haaland");
        assert_eq!(response.scorers[0].assists, 1);
        assert_eq!(response.scorers[1].assists, 0);
        assert_eq!(response.scorers[1].penalties, 0);
        assert_eq!(response.scorers[1].nationality, None);
    }

    #[tokio::test]
    async fn test_custom_limit_passed_through() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/competitions/BL1/scorers"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "competition": { "name": "Bundesliga" },
                "season": { "id": 2404 },
                "scorers": []
            })))
            .mount(&server)
            .await;

        let state = state_with(FootballClient::with_base_url(
            Some("token".to_string()),
            &server.uri(),
        ));
        let query = ScorersQuery {
            competition: Some("BL1".to_string()),
            limit: Some(5),
        };

        let Json(response) = get_scorers(State(state), Query(query)).await.unwrap();
        assert_eq!(response.competition, "Bundesliga");
        assert!(response.scorers.is_empty());
    }
}
