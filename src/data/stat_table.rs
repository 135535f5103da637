//! Per-team, per-week stat lines
//!
//! A sparse table: a team that did not play in a week (e.g. knocked out of
//! the playoffs) simply has no snapshot there, which is not the same thing as
//! a stat line full of zeros.

use crate::{HoopsError, Result, Stat};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Stat values for one team in one week
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatSnapshot {
    values: BTreeMap<Stat, f64>,
}

impl StatSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used while assembling a row
    pub fn with(mut self, stat: Stat, value: f64) -> Self {
        self.values.insert(stat, value);
        self
    }

    pub fn get(&self, stat: Stat) -> Option<f64> {
        self.values.get(&stat).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        self.values.iter().map(|(s, v)| (*s, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Stat, f64)> for StatSnapshot {
    fn from_iter<I: IntoIterator<Item = (Stat, f64)>>(iter: I) -> Self {
        StatSnapshot {
            values: iter.into_iter().collect(),
        }
    }
}

/// Every team's snapshots across a season of `1..=weeks`
#[derive(Debug, Clone)]
pub struct StatTable {
    weeks: u32,
    stats: Vec<Stat>,
    /// Team name -> week -> snapshot. BTreeMap keeps team order lexicographic.
    teams: BTreeMap<String, BTreeMap<u32, StatSnapshot>>,
}

impl StatTable {
    /// Create an empty table tracking `stats` over weeks `1..=weeks`
    pub fn new(weeks: u32, stats: Vec<Stat>) -> Result<Self> {
        if weeks == 0 {
            return Err(HoopsError::InvalidConfiguration(
                "a season needs at least one week".to_string(),
            ));
        }
        if stats.is_empty() {
            return Err(HoopsError::InvalidConfiguration(
                "at least one statistic must be tracked".to_string(),
            ));
        }
        for (i, stat) in stats.iter().enumerate() {
            if stats[..i].contains(stat) {
                return Err(HoopsError::InvalidConfiguration(format!(
                    "statistic {} listed twice",
                    stat
                )));
            }
        }
        Ok(StatTable {
            weeks,
            stats,
            teams: BTreeMap::new(),
        })
    }

    /// Record a single value, creating the team and snapshot as needed
    pub fn set(&mut self, team: &str, week: u32, stat: Stat, value: f64) -> Result<()> {
        self.check_stat(stat)?;
        self.check_week_in_range(week)?;
        self.teams
            .entry(team.to_string())
            .or_default()
            .entry(week)
            .or_default()
            .values
            .insert(stat, value);
        Ok(())
    }

    /// Store a whole snapshot at once. A previous snapshot for the same
    /// team and week is replaced.
    pub fn insert_snapshot(&mut self, team: &str, week: u32, snapshot: StatSnapshot) -> Result<()> {
        self.check_week_in_range(week)?;
        for (stat, _) in snapshot.iter() {
            self.check_stat(stat)?;
        }
        let previous = self
            .teams
            .entry(team.to_string())
            .or_default()
            .insert(week, snapshot);
        if previous.is_some() {
            log::warn!("Replacing stat line for {} in week {}", team, week);
        }
        Ok(())
    }

    pub fn get(&self, team: &str, week: u32, stat: Stat) -> Result<f64> {
        self.check_stat(stat)?;
        let snapshot = self.snapshot_or_err(team, week)?;
        snapshot.get(stat).ok_or_else(|| HoopsError::MissingStat {
            team: team.to_string(),
            week,
            stat,
        })
    }

    pub fn has_snapshot(&self, team: &str, week: u32) -> bool {
        self.snapshot(team, week).is_some()
    }

    pub fn snapshot(&self, team: &str, week: u32) -> Option<&StatSnapshot> {
        self.teams.get(team).and_then(|weeks| weeks.get(&week))
    }

    /// Like [`StatTable::snapshot`] but distinguishes why nothing came back
    pub fn snapshot_or_err(&self, team: &str, week: u32) -> Result<&StatSnapshot> {
        self.check_team(team)?;
        self.check_week(week)?;
        self.snapshot(team, week).ok_or_else(|| HoopsError::NoSnapshot {
            team: team.to_string(),
            week,
        })
    }

    /// All known teams, lexicographic
    pub fn teams(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.keys().map(String::as_str)
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn contains_team(&self, team: &str) -> bool {
        self.teams.contains_key(team)
    }

    /// Teams with a snapshot in `week`, lexicographic
    pub fn teams_in_week(&self, week: u32) -> Vec<&str> {
        self.teams
            .iter()
            .filter(|(_, weeks)| weeks.contains_key(&week))
            .map(|(team, _)| team.as_str())
            .collect()
    }

    pub fn weeks(&self) -> RangeInclusive<u32> {
        1..=self.weeks
    }

    pub fn week_count(&self) -> u32 {
        self.weeks
    }

    /// Weeks in which at least one team has a snapshot
    pub fn active_weeks(&self) -> Vec<u32> {
        self.weeks()
            .filter(|week| self.teams.values().any(|weeks| weeks.contains_key(week)))
            .collect()
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    pub fn check_team(&self, team: &str) -> Result<()> {
        if self.contains_team(team) {
            Ok(())
        } else {
            Err(HoopsError::UnknownTeam(team.to_string()))
        }
    }

    /// Week lookup: out of range is a NotFound
    pub fn check_week(&self, week: u32) -> Result<()> {
        if self.weeks().contains(&week) {
            Ok(())
        } else {
            Err(HoopsError::UnknownWeek {
                week,
                weeks: self.weeks,
            })
        }
    }

    /// Week on write: out of range is a configuration error
    fn check_week_in_range(&self, week: u32) -> Result<()> {
        if self.weeks().contains(&week) {
            Ok(())
        } else {
            Err(HoopsError::InvalidConfiguration(format!(
                "week {} is outside the league range 1..={}",
                week, self.weeks
            )))
        }
    }

    fn check_stat(&self, stat: Stat) -> Result<()> {
        if self.stats.contains(&stat) {
            Ok(())
        } else {
            Err(HoopsError::UntrackedStat(stat))
        }
    }
}
