//! Category-by-category head-to-head results
//!
//! Every pair of teams is compared in every week where both have a stat
//! line, whether or not they actually played each other that week.

use crate::data::{StatSnapshot, StatTable};
use crate::engine::series::Series;
use crate::{HoopsError, Outcome, Result, Stat};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Categories won by each side of a matchup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupScore {
    pub first: u32,
    pub second: u32,
}

impl MatchupScore {
    pub fn new(first: u32, second: u32) -> Self {
        MatchupScore { first, second }
    }

    /// Same result seen from the other side
    pub fn swapped(self) -> Self {
        MatchupScore {
            first: self.second,
            second: self.first,
        }
    }

    /// Result for the first side
    pub fn outcome(&self) -> Outcome {
        Outcome::from_counts(self.first, self.second)
    }

    /// Categories that went to either side (ties excluded)
    pub fn decided(&self) -> u32 {
        self.first + self.second
    }
}

/// Unordered team pair, stored with names in lexicographic order
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeamPair {
    first: String,
    second: String,
}

impl TeamPair {
    /// Canonical pair for `a` and `b`, plus whether the query order was
    /// reversed to get there. `None` when both names are the same team.
    pub fn canonical(a: &str, b: &str) -> Option<(TeamPair, bool)> {
        match a.cmp(b) {
            Ordering::Less => Some((
                TeamPair {
                    first: a.to_string(),
                    second: b.to_string(),
                },
                false,
            )),
            Ordering::Greater => Some((
                TeamPair {
                    first: b.to_string(),
                    second: a.to_string(),
                },
                true,
            )),
            Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn contains(&self, team: &str) -> bool {
        self.first == team || self.second == team
    }
}

/// Compare two stat lines category by category.
///
/// A statistic missing from either side is not contested.
pub fn compare_snapshots(ours: &StatSnapshot, theirs: &StatSnapshot, stats: &[Stat]) -> MatchupScore {
    let mut score = MatchupScore::default();
    for stat in stats {
        let (Some(a), Some(b)) = (ours.get(*stat), theirs.get(*stat)) else {
            continue;
        };
        match stat.compare(a, b) {
            Ordering::Greater => score.first += 1,
            Ordering::Less => score.second += 1,
            Ordering::Equal => {}
        }
    }
    score
}

/// All head-to-head results for a season, derived from a [`StatTable`]
#[derive(Debug, Clone, PartialEq)]
pub struct HeadToHead {
    teams: Vec<String>,
    weeks: u32,
    categories: usize,
    records: BTreeMap<(TeamPair, u32), MatchupScore>,
}

impl HeadToHead {
    /// Compare every pair of teams in every week both have data
    pub fn compute(table: &StatTable) -> Self {
        let teams: Vec<String> = table.teams().map(str::to_string).collect();
        let mut records = BTreeMap::new();

        for (i, a) in teams.iter().enumerate() {
            for b in &teams[i + 1..] {
                for week in table.weeks() {
                    let (Some(sa), Some(sb)) = (table.snapshot(a, week), table.snapshot(b, week))
                    else {
                        continue;
                    };
                    let pair = TeamPair {
                        first: a.clone(),
                        second: b.clone(),
                    };
                    records.insert((pair, week), compare_snapshots(sa, sb, table.stats()));
                }
            }
        }

        log::debug!(
            "Computed {} head-to-head records for {} teams",
            records.len(),
            teams.len()
        );

        HeadToHead {
            teams,
            weeks: table.week_count(),
            categories: table.stats().len(),
            records,
        }
    }

    /// Result of `a` against `b` in `week`, oriented to the query order.
    ///
    /// `Ok(None)` means at least one of them has no stat line that week.
    pub fn lookup(&self, a: &str, b: &str, week: u32) -> Result<Option<MatchupScore>> {
        self.check_team(a)?;
        self.check_team(b)?;
        self.check_week(week)?;
        let (pair, reversed) = TeamPair::canonical(a, b).ok_or_else(|| {
            HoopsError::InvalidConfiguration(format!("{} cannot be compared against itself", a))
        })?;
        Ok(self
            .records
            .get(&(pair, week))
            .map(|score| if reversed { score.swapped() } else { *score }))
    }

    /// Every opponent `team` has a result against in `week`, with the score
    /// oriented to `team`. Opponents come in lexicographic order.
    pub fn records_for(&self, team: &str, week: u32) -> Vec<(&str, MatchupScore)> {
        self.teams
            .iter()
            .filter(|opponent| opponent.as_str() != team)
            .filter_map(|opponent| {
                let (pair, reversed) = TeamPair::canonical(team, opponent)?;
                let score = self.records.get(&(pair, week))?;
                let score = if reversed { score.swapped() } else { *score };
                Some((opponent.as_str(), score))
            })
            .collect()
    }

    /// Week-by-week series between two teams
    pub fn series(&self, team: &str, opponent: &str) -> Result<Series> {
        let mut series = Series::new(team, opponent);
        for week in 1..=self.weeks {
            if let Some(score) = self.lookup(team, opponent, week)? {
                series.update(week, score);
            }
        }
        Ok(series)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TeamPair, u32, MatchupScore)> + '_ {
        self.records
            .iter()
            .map(|((pair, week), score)| (pair, *week, *score))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    /// Number of tracked statistics
    pub fn categories(&self) -> usize {
        self.categories
    }

    pub fn check_team(&self, team: &str) -> Result<()> {
        if self.teams.iter().any(|t| t == team) {
            Ok(())
        } else {
            Err(HoopsError::UnknownTeam(team.to_string()))
        }
    }

    pub fn check_week(&self, week: u32) -> Result<()> {
        if (1..=self.weeks).contains(&week) {
            Ok(())
        } else {
            Err(HoopsError::UnknownWeek {
                week,
                weeks: self.weeks,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{FOUR_TEAM_CSV, TOY_CSV};
    use crate::data::read_matchups;
    use crate::{Config, LeagueConfig};

    fn four_team() -> HeadToHead {
        let table = read_matchups(FOUR_TEAM_CSV.as_bytes(), &Config::default().league).unwrap();
        HeadToHead::compute(&table)
    }

    fn toy_table() -> StatTable {
        let league = LeagueConfig {
            weeks: None,
            stats: vec!["PTS".to_string(), "TO".to_string()],
        };
        read_matchups(TOY_CSV.as_bytes(), &league).unwrap()
    }

    #[test]
    fn test_points_and_turnovers_sweep() {
        let h2h = HeadToHead::compute(&toy_table());
        // A: 100 PTS, 10 TO vs B: 90 PTS, 15 TO
        assert_eq!(h2h.lookup("A", "B", 1).unwrap(), Some(MatchupScore::new(2, 0)));
    }

    #[test]
    fn test_tied_category_counts_for_nobody() {
        let h2h = HeadToHead::compute(&toy_table());
        // Week 1: C and D both scored 95, D had fewer turnovers
        let score = h2h.lookup("C", "D", 1).unwrap().unwrap();
        assert_eq!(score, MatchupScore::new(0, 1));
        assert!((score.decided() as usize) < h2h.categories());
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let h2h = four_team();
        for a in h2h.teams() {
            for b in h2h.teams() {
                if a == b {
                    continue;
                }
                for week in 1..=6 {
                    let ab = h2h.lookup(a, b, week).unwrap().unwrap();
                    let ba = h2h.lookup(b, a, week).unwrap().unwrap();
                    assert_eq!(ab, ba.swapped());
                    assert!(ab.decided() as usize <= h2h.categories());
                }
            }
        }
    }

    #[test]
    fn test_four_team_records() {
        let h2h = four_team();
        let expected: [(&str, &str, [(u32, u32); 6]); 6] = [
            ("Team A", "Team B", [(4, 5), (8, 1), (8, 1), (8, 1), (8, 1), (8, 1)]),
            ("Team A", "Team C", [(8, 1), (7, 2), (8, 1), (8, 1), (8, 1), (8, 1)]),
            ("Team A", "Team D", [(7, 1), (8, 1), (8, 1), (8, 1), (8, 0), (8, 1)]),
            ("Team B", "Team C", [(7, 1), (1, 8), (2, 7), (7, 2), (2, 7), (3, 5)]),
            ("Team B", "Team D", [(7, 2), (1, 8), (1, 7), (2, 6), (1, 8), (2, 2)]),
            ("Team C", "Team D", [(2, 7), (8, 1), (3, 5), (2, 7), (2, 3), (5, 2)]),
        ];

        for (a, b, weeks) in expected {
            for (i, (first, second)) in weeks.iter().enumerate() {
                let week = i as u32 + 1;
                assert_eq!(
                    h2h.lookup(a, b, week).unwrap(),
                    Some(MatchupScore::new(*first, *second)),
                    "{} vs {} week {}",
                    a,
                    b,
                    week
                );
            }
        }
        assert_eq!(h2h.len(), 6 * 6);
    }

    #[test]
    fn test_absent_week_has_no_record() {
        let h2h = HeadToHead::compute(&toy_table());
        // C and D are out by week 4
        assert_eq!(h2h.lookup("A", "C", 4).unwrap(), None);
        assert_eq!(h2h.lookup("C", "D", 4).unwrap(), None);
        assert_eq!(h2h.lookup("A", "B", 4).unwrap(), Some(MatchupScore::new(1, 1)));
        assert!(h2h.records_for("C", 4).is_empty());
    }

    #[test]
    fn test_lookup_errors() {
        let h2h = HeadToHead::compute(&toy_table());
        assert!(h2h.lookup("A", "Nobody", 1).unwrap_err().is_not_found());
        assert!(h2h.lookup("A", "B", 5).unwrap_err().is_not_found());
        assert!(h2h.lookup("A", "A", 1).unwrap_err().is_invalid_configuration());
    }

    #[test]
    fn test_records_for_orientation() {
        let h2h = HeadToHead::compute(&toy_table());
        let records = h2h.records_for("D", 1);
        assert_eq!(
            records,
            vec![
                ("A", MatchupScore::new(0, 2)),
                ("B", MatchupScore::new(2, 0)),
                ("C", MatchupScore::new(1, 0)),
            ]
        );
    }

    #[test]
    fn test_compute_is_idempotent() {
        let table = toy_table();
        assert_eq!(HeadToHead::compute(&table), HeadToHead::compute(&table));
    }

    #[test]
    fn test_canonical_pair() {
        let (pair, reversed) = TeamPair::canonical("B", "A").unwrap();
        assert_eq!((pair.first(), pair.second()), ("A", "B"));
        assert!(reversed);
        assert!(pair.contains("B"));
        assert!(TeamPair::canonical("A", "A").is_none());
    }
}
