//! Rankings built on head-to-head results
//!
//! Teams are always visited in lexicographic order and every sort is stable,
//! so equal scores keep that order.

use crate::data::StatTable;
use crate::engine::head_to_head::HeadToHead;
use crate::{Outcome, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// A team and its score in one ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamScore {
    pub team: String,
    pub score: f64,
}

/// A team's score for one particular week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamWeekScore {
    pub team: String,
    pub week: u32,
    pub score: f64,
}

/// Season aggregate of weekly scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonScore {
    pub team: String,
    pub score: f64,
    /// Weeks that went into the average
    pub weeks: u32,
}

/// Matchups won, lost and tied in one week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinCount {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

/// Categories won against the whole field in one week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub team: String,
    pub won: u32,
    /// Opponents times tracked statistics
    pub available: u32,
    pub share: f64,
}

/// Ranking strategies over a stat table and its head-to-head results
pub struct Rankings<'a> {
    table: &'a StatTable,
    h2h: &'a HeadToHead,
}

impl<'a> Rankings<'a> {
    pub fn new(table: &'a StatTable, h2h: &'a HeadToHead) -> Self {
        Rankings { table, h2h }
    }

    /// Mean categories won per matchup, or `None` when the team has no
    /// result that week
    fn average_for(&self, team: &str, week: u32) -> Option<f64> {
        let records = self.h2h.records_for(team, week);
        if records.is_empty() {
            return None;
        }
        let total: u32 = records.iter().map(|(_, score)| score.first).sum();
        Some(total as f64 / records.len() as f64)
    }

    /// Average-margin ranking for one week, best first
    pub fn rank_by_average_margin(&self, week: u32) -> Result<Vec<TeamScore>> {
        self.table.check_week(week)?;
        let mut ranking: Vec<TeamScore> = self
            .table
            .teams()
            .filter_map(|team| {
                self.average_for(team, week).map(|score| TeamScore {
                    team: team.to_string(),
                    score,
                })
            })
            .collect();
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(ranking)
    }

    /// One entry per team per week with a result, best first
    pub fn rank_by_average_margin_all_weeks(&self) -> Vec<TeamWeekScore> {
        let mut ranking = Vec::new();
        for team in self.table.teams() {
            for week in self.table.weeks() {
                if let Some(score) = self.average_for(team, week) {
                    ranking.push(TeamWeekScore {
                        team: team.to_string(),
                        week,
                        score,
                    });
                }
            }
        }
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranking
    }

    /// Season average of each team's weekly average-margin scores
    pub fn season_average_margin(&self) -> Vec<SeasonScore> {
        let mut totals: BTreeMap<String, (f64, u32)> = BTreeMap::new();
        for entry in self.rank_by_average_margin_all_weeks() {
            let slot = totals.entry(entry.team).or_insert((0.0, 0));
            slot.0 += entry.score;
            slot.1 += 1;
        }

        let mut ranking: Vec<SeasonScore> = totals
            .into_iter()
            .map(|(team, (sum, weeks))| SeasonScore {
                team,
                score: sum / weeks as f64,
                weeks,
            })
            .collect();
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranking
    }

    /// Opponents beaten on a majority of categories in one week, most first.
    ///
    /// Every team with a stat line that week appears, even when no opponent
    /// had one.
    pub fn rank_by_win_count(&self, week: u32) -> Result<Vec<WinCount>> {
        self.table.check_week(week)?;
        let mut ranking: Vec<WinCount> = self
            .table
            .teams_in_week(week)
            .into_iter()
            .map(|team| {
                let mut count = WinCount {
                    team: team.to_string(),
                    wins: 0,
                    losses: 0,
                    ties: 0,
                };
                for (_, score) in self.h2h.records_for(team, week) {
                    match score.outcome() {
                        Outcome::Win => count.wins += 1,
                        Outcome::Loss => count.losses += 1,
                        Outcome::Tie => count.ties += 1,
                    }
                }
                count
            })
            .collect();
        ranking.sort_by(|a, b| b.wins.cmp(&a.wins));
        Ok(ranking)
    }

    /// Share of all categories a team won against the rest of the field in
    /// one week. The divisor is the number of opponents with data times the
    /// number of tracked statistics.
    pub fn weekly_category_share(&self, week: u32) -> Result<Vec<CategoryShare>> {
        self.table.check_week(week)?;
        let categories = self.h2h.categories() as u32;
        let mut ranking: Vec<CategoryShare> = self
            .table
            .teams()
            .filter_map(|team| {
                let records = self.h2h.records_for(team, week);
                if records.is_empty() {
                    return None;
                }
                let won: u32 = records.iter().map(|(_, score)| score.first).sum();
                let available = records.len() as u32 * categories;
                Some(CategoryShare {
                    team: team.to_string(),
                    won,
                    available,
                    share: won as f64 / available as f64,
                })
            })
            .collect();
        ranking.sort_by(|a, b| b.share.total_cmp(&a.share));
        Ok(ranking)
    }
}
