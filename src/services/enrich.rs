//! Fixture enrichment pipeline.
//!
//! Takes the upcoming fixture list and attaches venue weather to each
//! entry. Enrichment fans out per fixture and every failure is absorbed
//! into that fixture's weather status; only fetching the fixture list
//! itself can fail the batch (handled by the route, not here).

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use utoipa::ToSchema;

use crate::services::football::{Fixture, FixtureStatus};
use crate::services::venues::VenueDirectory;
use crate::services::weather::{LeadWindow, MatchWeather, WeatherClient};

/// A fixture with its venue weather attached.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedFixture {
    pub id: i64,
    /// Competition name (e.g. "Premier League")
    pub competition: String,
    pub home_team: String,
    pub home_team_logo: Option<String>,
    pub away_team: String,
    pub away_team_logo: Option<String>,
    /// Kickoff time (UTC)
    pub date: DateTime<Utc>,
    pub status: FixtureStatus,
    /// Venue label used for the weather lookup: the feed's venue when
    /// present, otherwise the home team's name
    pub venue: String,
    pub weather: MatchWeather,
}

/// Enrich a batch of fixtures with weather, concurrently.
///
/// Fixtures whose kickoff is already past are dropped. The result is
/// sorted by kickoff, earliest first.
pub async fn enrich_fixtures(
    venues: &VenueDirectory,
    weather: &WeatherClient,
    window: LeadWindow,
    fixtures: Vec<Fixture>,
    now: DateTime<Utc>,
) -> Vec<EnrichedFixture> {
    let upcoming: Vec<Fixture> = fixtures.into_iter().filter(|f| f.utc_date > now).collect();

    let tasks: Vec<_> = upcoming
        .into_iter()
        .map(|fixture| enrich_one(venues, weather, window, fixture, now))
        .collect();
    let mut enriched = join_all(tasks).await;

    enriched.sort_by_key(|m| m.date);
    enriched
}

/// Enrich a single fixture. Never fails: weather problems degrade to an
/// unavailable status on this fixture alone.
async fn enrich_one(
    venues: &VenueDirectory,
    weather: &WeatherClient,
    window: LeadWindow,
    fixture: Fixture,
    now: DateTime<Utc>,
) -> EnrichedFixture {
    let venue = match &fixture.venue {
        Some(v) if !v.is_empty() => v.clone(),
        _ => fixture.home_team.name.clone(),
    };

    let coord = venues.resolve(&venue);
    let weather_data = if !coord.is_resolved() {
        MatchWeather::venue_unresolved()
    } else if !window.contains(now, fixture.utc_date) {
        MatchWeather::not_yet_available()
    } else {
        weather.forecast_for(coord, fixture.utc_date).await
    };

    EnrichedFixture {
        id: fixture.id,
        competition: fixture.competition.name,
        home_team: fixture.home_team.name,
        home_team_logo: fixture.home_team.crest,
        away_team: fixture.away_team.name,
        away_team_logo: fixture.away_team.crest,
        date: fixture.utc_date,
        status: fixture.status,
        venue,
        weather: weather_data,
    }
}
