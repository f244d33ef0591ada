//! OpenWeatherMap 5-day forecast client.
//!
//! Fetches 3-hourly forecast series and matches the sample closest to a
//! match's kickoff time.
//! See: https://openweathermap.org/forecast5

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::errors::ApiError;
use crate::services::venues::Coordinate;

const OWM_API_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Forecasts are attempted only for kickoffs at most this many days ahead;
/// the provider's series does not reach further.
pub const FORECAST_LEAD_DAYS: i64 = 5;

/// Client for the OpenWeatherMap forecast API.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

/// How far ahead forecasts are attempted.
#[derive(Debug, Clone, Copy)]
pub struct LeadWindow {
    pub days: i64,
}

impl Default for LeadWindow {
    fn default() -> Self {
        Self {
            days: FORECAST_LEAD_DAYS,
        }
    }
}

impl LeadWindow {
    /// Whether `kickoff` falls within the window measured from `now`.
    pub fn contains(&self, now: DateTime<Utc>, kickoff: DateTime<Utc>) -> bool {
        kickoff - now <= Duration::days(self.days)
    }
}

// ---------------------------------------------------------------------------
// Weather result types
// ---------------------------------------------------------------------------

/// Weather attached to an enriched fixture.
///
/// Tagged by `status` so clients branch on one field instead of probing
/// for the presence of an `error` key.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchWeather {
    Available(WeatherSummary),
    Unavailable {
        reason: UnavailableReason,
        message: String,
    },
}

/// Why a fixture's weather could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The venue is not in the coordinate table.
    VenueUnresolved,
    /// Kickoff is beyond the forecast lead window.
    NotYetAvailable,
    /// The provider returned an empty series.
    NoForecastData,
    /// The provider call failed; the batch carried on without it.
    FetchFailed,
}

/// Forecast conditions at the sample closest to kickoff.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    /// The time the matched forecast sample is for (ISO 8601)
    pub forecast_time: DateTime<Utc>,
    /// Air temperature in Celsius, one decimal place
    pub temperature: Decimal,
    /// Conditions text (e.g. "light rain")
    pub description: String,
    /// Relative humidity percentage
    pub humidity: i64,
    /// Wind speed in metres per second, one decimal place
    pub wind_speed: Decimal,
    /// Provider icon URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl MatchWeather {
    pub fn venue_unresolved() -> Self {
        MatchWeather::Unavailable {
            reason: UnavailableReason::VenueUnresolved,
            message: "No coordinates found for venue".to_string(),
        }
    }

    pub fn not_yet_available() -> Self {
        MatchWeather::Unavailable {
            reason: UnavailableReason::NotYetAvailable,
            message: "Weather forecast not available yet".to_string(),
        }
    }

    pub fn no_forecast_data() -> Self {
        MatchWeather::Unavailable {
            reason: UnavailableReason::NoForecastData,
            message: "No forecast data available for match time".to_string(),
        }
    }

    pub fn fetch_failed(err: ApiError) -> Self {
        MatchWeather::Unavailable {
            reason: UnavailableReason::FetchFailed,
            message: format!("Failed to fetch weather data: {}", fetch_failure_detail(err)),
        }
    }
}

/// The most useful detail a weather failure carries: the provider's own
/// `message` field when the body has one, otherwise the transport detail.
fn fetch_failure_detail(err: ApiError) -> String {
    match err {
        ApiError::Upstream { status, body, .. } => {
            provider_error_message(&body).unwrap_or_else(|| format!("HTTP {}", status))
        }
        ApiError::Transport { detail, .. } => detail,
        other => other.to_string(),
    }
}

fn provider_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(|s| s.to_string())
}

// --- OpenWeatherMap JSON response types ---

#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmSample>,
}

/// One 3-hourly slot of the forecast series.
#[derive(Debug, Clone, Deserialize)]
pub struct OwmSample {
    /// Slot time as a Unix timestamp (UTC seconds)
    pub dt: i64,
    pub main: OwmMain,
    pub weather: Vec<OwmCondition>,
    pub wind: OwmWind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwmMain {
    /// Temperature in Kelvin
    pub temp: f64,
    pub humidity: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwmCondition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwmWind {
    /// Wind speed in metres per second
    pub speed: f64,
}

fn f64_to_decimal(v: f64) -> Decimal {
    Decimal::from_str(&format!("{:.1}", v)).unwrap_or_default()
}

/// Kelvin → Celsius, rounded to one decimal place.
pub fn kelvin_to_celsius(kelvin: f64) -> Decimal {
    f64_to_decimal(kelvin - 273.15)
}

impl WeatherClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, OWM_API_URL)
    }

    /// Like `new`, but pointed at a custom base URL (used by tests to talk
    /// to a local mock server).
    pub fn with_base_url(api_key: Option<String>, base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            api_key,
            base_url: base_url.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch the 3-hourly forecast series for a coordinate.
    pub async fn fetch_series(&self, coord: Coordinate) -> Result<Vec<OwmSample>, ApiError> {
        let key = match &self.api_key {
            Some(key) => key,
            None => return Err(ApiError::Configuration("Missing API key".to_string())),
        };

        let url = format!(
            "{}/forecast?lat={}&lon={}&appid={}",
            self.base_url, coord.lat, coord.lon, key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                context: "Failed to fetch weather data".to_string(),
                detail: format!("OpenWeatherMap request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Weather API error: {}", body);
            return Err(ApiError::Upstream {
                context: "Failed to fetch weather data".to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let forecast: OwmForecastResponse =
            response.json().await.map_err(|e| ApiError::Transport {
                context: "Failed to fetch weather data".to_string(),
                detail: format!("OpenWeatherMap JSON parse error: {}", e),
            })?;

        Ok(forecast.list)
    }

    /// Weather for a kickoff, degrading to an unavailable marker instead of
    /// erroring. One fixture's weather failure must not fail the batch.
    pub async fn forecast_for(&self, coord: Coordinate, kickoff: DateTime<Utc>) -> MatchWeather {
        match self.fetch_series(coord).await {
            Ok(series) => match closest_sample(&series, kickoff) {
                Some(sample) => MatchWeather::Available(summarize(sample)),
                None => MatchWeather::no_forecast_data(),
            },
            Err(err) => MatchWeather::fetch_failed(err),
        }
    }
}

/// Pick the sample closest in time to `kickoff`.
///
/// Pure selection over an already-fetched series (no I/O).
pub fn closest_sample(series: &[OwmSample], kickoff: DateTime<Utc>) -> Option<&OwmSample> {
    let target_ts = kickoff.timestamp();
    series
        .iter()
        .min_by_key(|sample| (sample.dt - target_ts).unsigned_abs())
}

/// Convert a raw provider sample into the response summary.
pub fn summarize(sample: &OwmSample) -> WeatherSummary {
    let condition = sample.weather.first();
    WeatherSummary {
        forecast_time: DateTime::from_timestamp(sample.dt, 0).unwrap_or(DateTime::UNIX_EPOCH),
        temperature: kelvin_to_celsius(sample.main.temp),
        description: condition
            .map(|c| c.description.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        humidity: sample.main.humidity,
        wind_speed: f64_to_decimal(sample.wind.speed),
        icon: condition.map(|c| format!("https://openweathermap.org/img/wn/{}.png", c.icon)),
    }
}
