//! Team identity resolution.
//!
//! Free-text team names ("Man United", "arsenal", "MUN") are resolved
//! against a provider roster page by running a fixed cascade of matching
//! strategies, strictest first. The first stage with any hit wins; within
//! a stage the first roster record wins.

use crate::services::football::TeamRecord;

/// A single matching strategy, applied to one roster record at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Byte-exact match on name, short name or TLA.
    Exact,
    /// Case-insensitive match on name, short name or TLA.
    NormalizedExact,
    /// Case-insensitive containment between query and canonical name,
    /// in either direction.
    Substring,
}

/// Cascade order, strictest first.
pub const STRATEGY_ORDER: [MatchStrategy; 3] = [
    MatchStrategy::Exact,
    MatchStrategy::NormalizedExact,
    MatchStrategy::Substring,
];

impl MatchStrategy {
    fn matches(&self, query: &str, team: &TeamRecord) -> bool {
        match self {
            MatchStrategy::Exact => {
                team.name == query
                    || team.short_name.as_deref() == Some(query)
                    || team.tla.as_deref() == Some(query)
            }
            MatchStrategy::NormalizedExact => {
                let query = query.to_lowercase();
                team.name.to_lowercase() == query
                    || team
                        .short_name
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase() == query)
                    || team.tla.as_deref().is_some_and(|t| t.to_lowercase() == query)
            }
            MatchStrategy::Substring => {
                let query = query.to_lowercase();
                let name = team.name.to_lowercase();
                name.contains(&query) || query.contains(&name)
            }
        }
    }
}

/// Resolve a free-text name against a roster.
///
/// Returns the first record the earliest-succeeding strategy accepts, or
/// `None` when every stage comes up empty (the HTTP surface turns that
/// into a 404 with an id hint).
pub fn resolve_team<'a>(query: &str, roster: &'a [TeamRecord]) -> Option<&'a TeamRecord> {
    STRATEGY_ORDER.iter().find_map(|strategy| {
        let hit = roster.iter().find(|team| strategy.matches(query, team))?;
        tracing::debug!(
            "Resolved team '{}' to '{}' (id {}) via {:?}",
            query,
            hit.name,
            hit.id,
            strategy
        );
        Some(hit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<TeamRecord> {
        serde_json::from_value(serde_json::json!([
            { "id": 66, "name": "Manchester United FC", "shortName": "Man United", "tla": "MUN" },
            { "id": 65, "name": "Manchester City FC", "shortName": "Man City", "tla": "MCI" },
            { "id": 57, "name": "Arsenal FC", "shortName": "Arsenal", "tla": "ARS" },
            { "id": 64, "name": "Liverpool FC", "shortName": null, "tla": null }
        ]))
        .unwrap()
    }

    #[test]
    fn test_exact_name_wins() {
        let roster = roster();
        let team = resolve_team("Arsenal FC", &roster).unwrap();
        assert_eq!(team.id, 57);
    }

    #[test]
    fn test_exact_tla() {
        let roster = roster();
        let team = resolve_team("MUN", &roster).unwrap();
        assert_eq!(team.id, 66);
    }

    #[test]
    fn test_short_name_resolves_colloquial_query() {
        let roster = roster();
        let team = resolve_team("Man United", &roster).unwrap();
        assert_eq!(team.name, "Manchester United FC");
    }

    #[test]
    fn test_normalized_match_ignores_case() {
        let roster = roster();
        let team = resolve_team("arsenal fc", &roster).unwrap();
        assert_eq!(team.id, 57);
        let team = resolve_team("man city", &roster).unwrap();
        assert_eq!(team.id, 65);
    }

    #[test]
    fn test_substring_query_within_name() {
        let roster = roster();
        let team = resolve_team("Manchester United", &roster).unwrap();
        assert_eq!(team.id, 66);
    }

    #[test]
    fn test_substring_name_within_query() {
        let roster = roster();
        let team = resolve_team("Liverpool FC (2026)", &roster).unwrap();
        assert_eq!(team.id, 64);
    }

    #[test]
    fn test_earlier_stage_beats_record_order() {
        // The first record only matches by substring; the exact short-name
        // hit on the later record must win.
        let roster: Vec<TeamRecord> = serde_json::from_value(serde_json::json!([
            { "id": 1, "name": "Arsenal Reserves FC", "shortName": null, "tla": null },
            { "id": 57, "name": "Arsenal FC", "shortName": "Arsenal", "tla": "ARS" }
        ]))
        .unwrap();
        let team = resolve_team("Arsenal", &roster).unwrap();
        assert_eq!(team.id, 57);
    }

    #[test]
    fn test_first_record_wins_within_stage() {
        let roster = roster();
        // Both Manchester records contain "manchester"; roster order decides
        let team = resolve_team("Manchester", &roster).unwrap();
        assert_eq!(team.id, 66);
    }

    #[test]
    fn test_no_match_is_none() {
        let roster = roster();
        assert!(resolve_team("Real Madrid CF", &roster).is_none());
    }

    #[test]
    fn test_records_without_short_name_or_tla() {
        let roster = roster();
        let team = resolve_team("liverpool fc", &roster).unwrap();
        assert_eq!(team.id, 64);
    }
}
