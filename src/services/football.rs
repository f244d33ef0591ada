//! football-data.org v4 client.
//!
//! Fetches fixtures, team rosters, finished matches, standings and scorers.
//! See: https://docs.football-data.org/general/v4/index.html

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ApiError;

const FOOTBALL_API_URL: &str = "https://api.football-data.org/v4";

/// Client for the football-data.org v4 API.
///
/// The API token is optional: an unconfigured client reports
/// `is_configured() == false` and every request fails with a
/// configuration error before any network call.
#[derive(Debug, Clone)]
pub struct FootballClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Match lifecycle status as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixtureStatus {
    Scheduled,
    Timed,
    InPlay,
    Paused,
    Finished,
    Suspended,
    Postponed,
    Cancelled,
    Awarded,
    #[serde(other)]
    Unknown,
}

impl FixtureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureStatus::Scheduled => "SCHEDULED",
            FixtureStatus::Timed => "TIMED",
            FixtureStatus::InPlay => "IN_PLAY",
            FixtureStatus::Paused => "PAUSED",
            FixtureStatus::Finished => "FINISHED",
            FixtureStatus::Suspended => "SUSPENDED",
            FixtureStatus::Postponed => "POSTPONED",
            FixtureStatus::Cancelled => "CANCELLED",
            FixtureStatus::Awarded => "AWARDED",
            FixtureStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionRef {
    pub name: String,
}

/// A team as embedded in match payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    pub id: i64,
    pub name: String,
    pub crest: Option<String>,
}

/// An upcoming match from the fixture feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: i64,
    pub competition: CompetitionRef,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub utc_date: DateTime<Utc>,
    pub status: FixtureStatus,
    /// Stadium name; the feed frequently omits it.
    pub venue: Option<String>,
}

/// A roster entry from the team search page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: i64,
    pub name: String,
    pub short_name: Option<String>,
    pub tla: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePair {
    pub home: Option<i64>,
    pub away: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub full_time: ScorePair,
}

/// A completed match from a team's match list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishedMatch {
    pub id: i64,
    pub competition: CompetitionRef,
    pub utc_date: DateTime<Utc>,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub score: Score,
}

/// One row of a standings table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingEntry {
    pub position: i64,
    pub team: TeamRef,
    pub played_games: i64,
    pub won: i64,
    pub draw: i64,
    pub lost: i64,
    pub points: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
    pub form: Option<String>,
}

/// A standings grouping ("TOTAL", "HOME", "AWAY").
#[derive(Debug, Clone, Deserialize)]
pub struct StandingGroup {
    #[serde(rename = "type")]
    pub kind: String,
    pub table: Vec<StandingEntry>,
}

/// Standings payload for one competition.
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionStandings {
    pub competition: CompetitionRef,
    /// Season metadata, passed through to clients untouched.
    pub season: serde_json::Value,
    pub standings: Vec<StandingGroup>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRef {
    pub id: i64,
    pub name: String,
    pub nationality: Option<String>,
    pub position: Option<String>,
}

/// One row of a top-scorers list.
#[derive(Debug, Clone, Deserialize)]
pub struct ScorerEntry {
    pub player: PlayerRef,
    pub team: TeamRef,
    pub goals: i64,
    pub assists: Option<i64>,
    pub penalties: Option<i64>,
}

/// Scorers payload for one competition.
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionScorers {
    pub competition: CompetitionRef,
    pub season: serde_json::Value,
    pub scorers: Vec<ScorerEntry>,
}

// --- list wrappers ---

#[derive(Debug, Deserialize)]
struct FixtureList {
    matches: Vec<Fixture>,
}

#[derive(Debug, Deserialize)]
struct FinishedList {
    matches: Vec<FinishedMatch>,
}

#[derive(Debug, Deserialize)]
struct TeamsPage {
    teams: Vec<TeamRecord>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

impl FootballClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, FOOTBALL_API_URL)
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

    pub fn ensure_configured(&self) -> Result<(), ApiError> {
        if self.api_key.is_none() {
            return Err(ApiError::Configuration("Missing API key".to_string()));
        }
        Ok(())
    }

    /// Scheduled fixtures for the given competitions in a date range.
    pub async fn scheduled_fixtures(
        &self,
        competitions: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<Fixture>, ApiError> {
        let url = format!(
            "{}/matches?competitions={}&dateFrom={}&dateTo={}&status={}",
            self.base_url,
            competitions,
            date_from,
            date_to,
            FixtureStatus::Scheduled.as_str()
        );
        let list: FixtureList = self
            .get_json(&url, "Failed to fetch data", "Server error")
            .await?;
        Ok(list.matches)
    }

    /// One page of the provider's team index, used for name resolution.
    pub async fn team_roster(&self, limit: u32) -> Result<Vec<TeamRecord>, ApiError> {
        let url = format!("{}/teams?limit={}", self.base_url, limit);
        let page: TeamsPage = self
            .get_json(
                &url,
                "Failed to search for team",
                "Server error fetching team form",
            )
            .await?;
        Ok(page.teams)
    }

    /// Finished matches for a team in a date range.
    pub async fn finished_matches(
        &self,
        team_id: i64,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<FinishedMatch>, ApiError> {
        let url = format!(
            "{}/teams/{}/matches?dateFrom={}&dateTo={}&status={}",
            self.base_url,
            team_id,
            date_from,
            date_to,
            FixtureStatus::Finished.as_str()
        );
        let list: FinishedList = self
            .get_json(
                &url,
                "Failed to fetch team form data",
                "Server error fetching team form",
            )
            .await?;
        Ok(list.matches)
    }

    /// Current standings for a competition.
    pub async fn standings(&self, competition: &str) -> Result<CompetitionStandings, ApiError> {
        let url = format!("{}/competitions/{}/standings", self.base_url, competition);
        self.get_json(
            &url,
            "Failed to fetch standings data",
            "Server error fetching standings",
        )
        .await
    }

    /// Top scorers for a competition.
    pub async fn scorers(
        &self,
        competition: &str,
        limit: u32,
    ) -> Result<CompetitionScorers, ApiError> {
        let url = format!(
            "{}/competitions/{}/scorers?limit={}",
            self.base_url, competition, limit
        );
        self.get_json(
            &url,
            "Failed to fetch scorers data",
            "Server error fetching scorers",
        )
        .await
    }

    /// Shared GET + decode path. Non-success responses become upstream
    /// errors carrying the provider's status and body; network and decode
    /// failures become transport errors.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        upstream_context: &str,
        transport_context: &str,
    ) -> Result<T, ApiError> {
        let token = match &self.api_key {
            Some(key) => key,
            None => return Err(ApiError::Configuration("Missing API key".to_string())),
        };

        let response = self
            .client
            .get(url)
            .header("X-Auth-Token", token)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                context: transport_context.to_string(),
                detail: format!("football-data request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Upstream {
                context: upstream_context.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::Transport {
            context: transport_context.to_string(),
            detail: format!("football-data JSON parse error: {}", e),
        })
    }
}
