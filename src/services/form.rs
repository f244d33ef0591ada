//! Recent-form computation.
//!
//! Turns a team's finished matches from the last two months into W/L/D
//! outcomes, most recent first, capped at five.

use chrono::{DateTime, Months, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::services::football::FinishedMatch;

/// Number of outcomes a form summary holds.
pub const FORM_LENGTH: usize = 5;

/// Finished matches are considered this many calendar months back.
pub const FORM_WINDOW_MONTHS: u32 = 2;

/// Start of the form window, counted back from `now`.
pub fn form_window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(FORM_WINDOW_MONTHS))
        .unwrap_or(now)
}

/// Outcome of one match from the subject team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "D")]
    Draw,
}

impl Outcome {
    pub fn code(&self) -> &'static str {
        match self {
            Outcome::Win => "W",
            Outcome::Loss => "L",
            Outcome::Draw => "D",
        }
    }
}

/// One processed match in a form summary.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_id: i64,
    pub competition: String,
    /// Kickoff time of the finished match
    pub date: DateTime<Utc>,
    pub opponent: String,
    pub opponent_logo: Option<String>,
    /// Whether the subject team played at home
    pub home: bool,
    pub result: Outcome,
    /// Full-time score, home side first (e.g. "2 - 1")
    pub score: String,
}

/// Compute the subject team's recent form from its finished matches.
///
/// Matches without a full-time score are skipped. The rest are sorted most
/// recent first and truncated to `FORM_LENGTH`.
pub fn compute_form(team_id: i64, matches: &[FinishedMatch]) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = matches
        .iter()
        .filter_map(|m| {
            let (home_score, away_score) = match (m.score.full_time.home, m.score.full_time.away)
            {
                (Some(home), Some(away)) => (home, away),
                _ => {
                    tracing::debug!("Skipping match {} without a full-time score", m.id);
                    return None;
                }
            };

            let is_home = m.home_team.id == team_id;
            let result = if home_score == away_score {
                Outcome::Draw
            } else if (is_home && home_score > away_score)
                || (!is_home && away_score > home_score)
            {
                Outcome::Win
            } else {
                Outcome::Loss
            };

            let opponent = if is_home { &m.away_team } else { &m.home_team };

            Some(MatchResult {
                match_id: m.id,
                competition: m.competition.name.clone(),
                date: m.utc_date,
                opponent: opponent.name.clone(),
                opponent_logo: opponent.crest.clone(),
                home: is_home,
                result,
                score: format!("{} - {}", home_score, away_score),
            })
        })
        .collect();

    results.sort_by(|a, b| b.date.cmp(&a.date));
    results.truncate(FORM_LENGTH);
    results
}

/// Outcome letters joined by single spaces, most recent first.
pub fn form_string(results: &[MatchResult]) -> String {
    results
        .iter()
        .map(|r| r.result.code())
        .collect::<Vec<_>>()
        .join(" ")
}
