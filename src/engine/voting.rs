//! Category-rank voting
//!
//! Instead of comparing two stat lines directly, every team is ranked within
//! each category across the whole league for the week. Team X beats team Y
//! when X sits above Y in more category rankings than the other way round.
//! This reads the stat table only and never touches head-to-head records.

use crate::data::StatTable;
use crate::engine::head_to_head::compare_snapshots;
use crate::{Result, Stat};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-category ordering of teams for one week, best first
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRankings {
    week: u32,
    orders: Vec<(Stat, Vec<String>)>,
}

/// Which side of a pairing comes out ahead in category positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    First,
    Second,
    Tie,
}

/// Teams beaten through category-rank voting in one week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    pub team: String,
    pub total_wins: usize,
}

/// Season-long average of categories won per opponent per week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonWins {
    pub team: String,
    /// Categories won against every opponent, summed over the season
    pub categories_won: u32,
    pub average: f64,
}

impl CategoryRankings {
    /// Rank every team with a stat line in `week`, category by category.
    ///
    /// Equal values keep lexicographic team order.
    pub fn compute(table: &StatTable, week: u32) -> Result<Self> {
        table.check_week(week)?;
        let teams = table.teams_in_week(week);

        let orders = table
            .stats()
            .iter()
            .map(|&stat| {
                let mut values: Vec<(&str, f64)> = teams
                    .iter()
                    .filter_map(|team| {
                        let value = table.snapshot(team, week)?.get(stat)?;
                        Some((*team, value))
                    })
                    .collect();
                values.sort_by(|a, b| stat.compare(b.1, a.1));
                let order = values.into_iter().map(|(team, _)| team.to_string()).collect();
                (stat, order)
            })
            .collect();

        Ok(CategoryRankings { week, orders })
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    /// Teams best to worst in one category
    pub fn order(&self, stat: Stat) -> Option<&[String]> {
        self.orders
            .iter()
            .find(|(s, _)| *s == stat)
            .map(|(_, order)| order.as_slice())
    }

    /// Teams present in the rankings, lexicographic
    pub fn teams(&self) -> Vec<&str> {
        let mut teams: Vec<&str> = self
            .orders
            .iter()
            .flat_map(|(_, order)| order.iter().map(String::as_str))
            .collect();
        teams.sort_unstable();
        teams.dedup();
        teams
    }

    /// Compare two teams' positions across every category.
    ///
    /// A category where either team is unranked is skipped.
    pub fn dominates(&self, x: &str, y: &str) -> Dominance {
        let mut x_better = 0;
        let mut y_better = 0;
        for (_, order) in &self.orders {
            let px = order.iter().position(|t| t == x);
            let py = order.iter().position(|t| t == y);
            if let (Some(px), Some(py)) = (px, py) {
                if px < py {
                    x_better += 1;
                } else if py < px {
                    y_better += 1;
                }
            }
        }
        match x_better.cmp(&y_better) {
            std::cmp::Ordering::Greater => Dominance::First,
            std::cmp::Ordering::Less => Dominance::Second,
            std::cmp::Ordering::Equal => Dominance::Tie,
        }
    }

    /// Number of teams each team dominates, most first
    pub fn tally(&self) -> Vec<VoteTally> {
        let teams = self.teams();
        let mut tally: Vec<VoteTally> = teams
            .iter()
            .map(|team| VoteTally {
                team: team.to_string(),
                total_wins: teams
                    .iter()
                    .filter(|other| *other != team)
                    .filter(|other| self.dominates(team, other) == Dominance::First)
                    .count(),
            })
            .collect();
        tally.sort_by(|a, b| b.total_wins.cmp(&a.total_wins));
        tally
    }
}

/// Category-rank voting ranking for one week
pub fn rank_by_category_votes(table: &StatTable, week: u32) -> Result<Vec<VoteTally>> {
    Ok(CategoryRankings::compute(table, week)?.tally())
}

/// Categories won against every opponent in every week, divided by
/// `teams x active weeks`.
///
/// Weeks where nobody has a stat line do not count towards the divisor.
pub fn season_average_wins(table: &StatTable) -> Vec<SeasonWins> {
    let teams: Vec<&str> = table.teams().collect();
    let active_weeks = table.active_weeks();
    let divisor = (teams.len() * active_weeks.len()) as f64;

    let mut totals: BTreeMap<&str, u32> = teams.iter().map(|t| (*t, 0)).collect();
    for &week in &active_weeks {
        for team in &teams {
            let Some(ours) = table.snapshot(team, week) else {
                continue;
            };
            for opponent in teams.iter().filter(|o| *o != team) {
                if let Some(theirs) = table.snapshot(opponent, week) {
                    let score = compare_snapshots(ours, theirs, table.stats());
                    if let Some(total) = totals.get_mut(team) {
                        *total += score.first;
                    }
                }
            }
        }
    }

    let mut ranking: Vec<SeasonWins> = totals
        .into_iter()
        .map(|(team, categories_won)| SeasonWins {
            team: team.to_string(),
            categories_won,
            average: if divisor > 0.0 {
                categories_won as f64 / divisor
            } else {
                0.0
            },
        })
        .collect();
    ranking.sort_by(|a, b| b.average.total_cmp(&a.average));
    ranking
}
