//! Team form HTTP endpoint.
//!
//! - GET /api/v1/team-form?teamId=64
//! - GET /api/v1/team-form?teamName=Liverpool

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::{ApiError, ErrorResponse};
use crate::routes::AppState;
use crate::services::form::{compute_form, form_string, form_window_start, MatchResult};
use crate::services::teams::resolve_team;

/// Page size for the roster fetched when resolving a team by name.
/// Only the first page is searched; teams beyond it resolve by id.
const ROSTER_PAGE_LIMIT: u32 = 10;

// ---------------------------------------------------------------------------
// Query parameter and response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TeamFormQuery {
    /// Numeric football-data.org team id (e.g. 64 for Liverpool FC)
    pub team_id: Option<i64>,
    /// Team name to search for when the id is unknown (e.g. "Man United")
    pub team_name: Option<String>,
}

/// Recent form for a single team.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamFormResponse {
    /// Resolved football-data.org team id
    pub team_id: i64,
    /// The name the caller searched for, or "Unknown" for id-only lookups
    pub team_name: String,
    /// Most recent finished matches, newest first (at most five)
    pub form: Vec<MatchResult>,
    /// Compact summary such as "W W D L W", newest first
    pub form_string: String,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// Recent form (last five finished matches) for a team.
///
/// The team is identified either by `teamId` or by `teamName`; a name is
/// resolved against the roster with exact, case-insensitive and substring
/// matching, in that order. Matches are taken from the last two months.
#[utoipa::path(
    get,
    path = "/api/v1/team-form",
    tag = "Teams",
    params(TeamFormQuery),
    responses(
        (status = 200, description = "Form for the resolved team", body = TeamFormResponse),
        (status = 400, description = "Missing credentials or team parameters", body = ErrorResponse),
        (status = 404, description = "No roster entry matched the provided name", body = ErrorResponse),
        (status = 502, description = "Team data fetch failed upstream", body = ErrorResponse),
    )
)]
pub async fn get_team_form(
    State(state): State<AppState>,
    Query(params): Query<TeamFormQuery>,
) -> Result<Json<TeamFormResponse>, ApiError> {
    state.football.ensure_configured()?;

    // An empty teamName counts as absent.
    let team_name = params.team_name.filter(|name| !name.is_empty());

    let team_id = match (params.team_id, &team_name) {
        (Some(id), _) => id,
        (None, Some(name)) => {
            let roster = state.football.team_roster(ROSTER_PAGE_LIMIT).await?;
            resolve_team(name, &roster)
                .map(|team| team.id)
                .ok_or_else(|| ApiError::NotFound {
                    message: "Team not found with the provided name".to_string(),
                    details: Some("Please try using a team ID instead".to_string()),
                })?
        }
        (None, None) => {
            return Err(ApiError::BadRequest(
                "Either Team ID or Team Name is required".to_string(),
            ));
        }
    };

    let now = Utc::now();
    let date_from = form_window_start(now).date_naive();
    let date_to = now.date_naive();

    let finished = state
        .football
        .finished_matches(team_id, date_from, date_to)
        .await?;

    let form = compute_form(team_id, &finished);
    let form_string = form_string(&form);

    Ok(Json(TeamFormResponse {
        team_id,
        team_name: team_name.unwrap_or_else(|| "Unknown".to_string()),
        form,
        form_string,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::football::FootballClient;
    use crate::services::form::Outcome;
    use crate::services::venues::VenueDirectory;
    use crate::services::weather::WeatherClient;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
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
    async fn test_requires_team_id_or_name() {
        let state = state_with(FootballClient::new(Some("token".to_string())));
        let query = TeamFormQuery {
            team_id: None,
            team_name: None,
        };

        let err = get_team_form(State(state), Query(query)).await.unwrap_err();
        match err {
            ApiError::BadRequest(msg) => {
                assert_eq!(msg, "Either Team ID or Team Name is required")
            }
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_team_name_counts_as_missing() {
        let state = state_with(FootballClient::new(Some("token".to_string())));
        let query = TeamFormQuery {
            team_id: None,
            team_name: Some(String::new()),
        };

        assert!(matches!(
            get_team_form(State(state), Query(query)).await.unwrap_err(),
            ApiError::BadRequest(_)
        ));
    }

    #[tokio::test]
    async fn test_missing_key_rejected_before_any_request() {
        let state = state_with(FootballClient::new(None));
        let query = TeamFormQuery {
            team_id: Some(64),
            team_name: None,
        };

        let err = get_team_form(State(state), Query(query)).await.unwrap_err();
        match err {
            ApiError::Configuration(msg) => assert_eq!(msg, "Missing API key"),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolves_name_and_computes_form() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teams"))
            .and(query_param("limit", "10"))
            .and(header("X-Auth-Token", "token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "teams": [
                    { "id": 57, "name": "Arsenal FC", "shortName": "Arsenal", "tla": "ARS" },
                    { "id": 64, "name": "Liverpool FC", "shortName": "Liverpool", "tla": "LIV" }
                ]
            })))
            .mount(&server)
            .await;

        // Date bounds depend on the wall clock, so only pin the status filter.
        Mock::given(method("GET"))
            .and(path("/teams/64/matches"))
            .and(query_param("status", "FINISHED"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "matches": [
                    {
                        "id": 501,
                        "competition": { "name": "Premier League" },
                        "utcDate": "2026-08-01T15:00:00Z",
                        "homeTeam": { "id": 64, "name": "Liverpool FC", "crest": "https://crests.football-data.org/64.png" },
                        "awayTeam": { "id": 57, "name": "Arsenal FC", "crest": null },
                        "score": { "fullTime": { "home": 2, "away": 2 } }
                    },
                    {
                        "id": 502,
                        "competition": { "name": "Premier League" },
                        "utcDate": "2026-08-08T15:00:00Z",
                        "homeTeam": { "id": 61, "name": "Chelsea FC", "crest": null },
                        "awayTeam": { "id": 64, "name": "Liverpool FC", "crest": "https://crests.football-data.org/64.png" },
                        "score": { "fullTime": { "home": 0, "away": 3 } }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let state = state_with(FootballClient::with_base_url(
            Some("token".to_string()),
            &server.uri(),
        ));
        let query = TeamFormQuery {
            team_id: None,
            team_name: Some("Liverpool".to_string()),
        };

        let Json(response) = get_team_form(State(state), Query(query)).await.unwrap();
        assert_eq!(response.team_id, 64);
        assert_eq!(response.team_name, "Liverpool");
        assert_eq!(response.form.len(), 2);
        // Newest first: the away win at Chelsea, then the home draw.
        assert_eq!(response.form[0].result, Outcome::Win);
        assert_eq!(response.form[0].opponent, "Chelsea FC");
        assert_eq!(response.form[1].result, Outcome::Draw);
        assert_eq!(response.form_string, "W D");
    }

    #[tokio::test]
    async fn test_unmatched_name_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "teams": [
                    { "id": 57, "name": "Arsenal FC", "shortName": "Arsenal", "tla": "ARS" }
                ]
            })))
            .mount(&server)
            .await;

        let state = state_with(FootballClient::with_base_url(
            Some("token".to_string()),
            &server.uri(),
        ));
        let query = TeamFormQuery {
            team_id: None,
            team_name: Some("Real Sociedad".to_string()),
        };

        let err = get_team_form(State(state), Query(query)).await.unwrap_err();
        match err {
            ApiError::NotFound { message, details } => {
                assert_eq!(message, "Team not found with the provided name");
                assert_eq!(details.as_deref(), Some("Please try using a team ID instead"));
            }
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_id_lookup_reports_unknown_name() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teams/64/matches"))
            .and(query_param("status", "FINISHED"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matches": [] })))
            .mount(&server)
            .await;

        let state = state_with(FootballClient::with_base_url(
            Some("token".to_string()),
            &server.uri(),
        ));
        let query = TeamFormQuery {
            team_id: Some(64),
            team_name: None,
        };

        let Json(response) = get_team_form(State(state), Query(query)).await.unwrap();
        assert_eq!(response.team_id, 64);
        assert_eq!(response.team_name, "Unknown");
        assert!(response.form.is_empty());
        assert_eq!(response.form_string, "");
    }
}
