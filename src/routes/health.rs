use axum::extract::State;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::routes::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status ("ok" when both providers are configured,
    /// "degraded" otherwise)
    pub status: String,
    /// API version
    pub version: String,
    /// Whether a football-data.org token is configured
    pub football_configured: bool,
    /// Whether an OpenWeatherMap key is configured
    pub weather_configured: bool,
}

/// Health check endpoint.
///
/// Reports the API version and whether provider credentials are present.
/// Returns "degraded" (still 200) when a credential is missing, so load
/// balancers can distinguish partial failures. No upstream calls are made.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let football = state.football.is_configured();
    let weather = state.weather.is_configured();

    Json(HealthResponse {
        status: if football && weather {
            "ok".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        football_configured: football,
        weather_configured: weather,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::football::FootballClient;
    use crate::services::venues::VenueDirectory;
    use crate::services::weather::WeatherClient;

    fn state(football_key: Option<&str>, weather_key: Option<&str>) -> AppState {
        AppState {
            football: FootballClient::new(football_key.map(String::from)),
            weather: WeatherClient::new(weather_key.map(String::from)),
            venues: VenueDirectory::with_default_table(),
            competitions: "PL,PD,BL1,SA,FL1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_healthy_when_both_keys_present() {
        let Json(body) = health_check(State(state(Some("a"), Some("b")))).await;
        assert_eq!(body.status, "ok");
        assert!(body.football_configured);
        assert!(body.weather_configured);
    }

    #[tokio::test]
    async fn test_degraded_when_key_missing() {
        let Json(body) = health_check(State(state(Some("a"), None))).await;
        assert_eq!(body.status, "degraded");
        assert!(body.football_configured);
        assert!(!body.weather_configured);
    }
}
