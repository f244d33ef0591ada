//! Enriched fixture endpoint.
//!
//! - GET /api/v1/matches

use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};

use crate::errors::{ApiError, ErrorResponse};
use crate::routes::AppState;
use crate::services::enrich::{enrich_fixtures, EnrichedFixture};
use crate::services::weather::LeadWindow;

/// Upcoming fixtures for the configured competitions, enriched with venue
/// weather at kickoff.
///
/// Both provider credentials are required: the fixture list comes from
/// football-data.org and the weather from OpenWeatherMap. Per-fixture
/// weather problems degrade that fixture's `weather` field; only a failed
/// fixture fetch or missing credentials fail the request.
#[utoipa::path(
    get,
    path = "/api/v1/matches",
    tag = "Matches",
    responses(
        (status = 200, description = "Upcoming fixtures, sorted by kickoff", body = Vec<EnrichedFixture>),
        (status = 400, description = "Provider credentials missing", body = ErrorResponse),
        (status = 502, description = "Fixture fetch failed upstream", body = ErrorResponse),
    )
)]
pub async fn get_matches(
    State(state): State<AppState>,
) -> Result<Json<Vec<EnrichedFixture>>, ApiError> {
    if !state.football.is_configured() || !state.weather.is_configured() {
        return Err(ApiError::Configuration("Missing API keys".to_string()));
    }

    let now = Utc::now();
    let window = LeadWindow::default();
    let date_from = now.date_naive();
    let date_to = (now + Duration::days(window.days)).date_naive();

    let fixtures = state
        .football
        .scheduled_fixtures(&state.competitions, date_from, date_to)
        .await?;

    let enriched = enrich_fixtures(&state.venues, &state.weather, window, fixtures, now).await;
    Ok(Json(enriched))
}
