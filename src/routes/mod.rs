pub mod health;
pub mod matches;
pub mod scorers;
pub mod standings;
pub mod team_form;

use crate::services::football::FootballClient;
use crate::services::venues::VenueDirectory;
use crate::services::weather::WeatherClient;

/// Shared application state for all endpoints.
#[derive(Clone)]
pub struct AppState {
    pub football: FootballClient,
    pub weather: WeatherClient,
    pub venues: VenueDirectory,
    /// Comma-separated competition codes for the fixture feed.
    pub competitions: String,
}
