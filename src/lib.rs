//! Fantasy basketball head-to-head rankings
//!
//! Category-by-category comparison of every team against every other team,
//! week by week, and the rankings derived from those comparisons.

pub mod data;
pub mod engine;
pub mod report;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// A tracked statistical category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stat {
    FieldGoalPct,
    FreeThrowPct,
    ThreePointersMade,
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
}

impl Stat {
    /// Every statistic, in matchup-file column order
    pub const ALL: [Stat; 9] = [
        Stat::FieldGoalPct,
        Stat::FreeThrowPct,
        Stat::ThreePointersMade,
        Stat::Points,
        Stat::Rebounds,
        Stat::Assists,
        Stat::Steals,
        Stat::Blocks,
        Stat::Turnovers,
    ];

    /// Column label used in matchup files
    pub fn label(&self) -> &'static str {
        match self {
            Stat::FieldGoalPct => "FG%",
            Stat::FreeThrowPct => "FT%",
            Stat::ThreePointersMade => "3PTM",
            Stat::Points => "PTS",
            Stat::Rebounds => "REB",
            Stat::Assists => "AST",
            Stat::Steals => "ST",
            Stat::Blocks => "BLK",
            Stat::Turnovers => "TO",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "FG%" => Some(Stat::FieldGoalPct),
            "FT%" => Some(Stat::FreeThrowPct),
            "3PTM" => Some(Stat::ThreePointersMade),
            "PTS" => Some(Stat::Points),
            "REB" => Some(Stat::Rebounds),
            "AST" => Some(Stat::Assists),
            "ST" | "STL" => Some(Stat::Steals),
            "BLK" => Some(Stat::Blocks),
            "TO" => Some(Stat::Turnovers),
            _ => None,
        }
    }

    /// Turnovers are the only category where the smaller number wins
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Stat::Turnovers)
    }

    /// Compare two values from the point of view of `ours`.
    ///
    /// `Greater` means `ours` wins the category, `Equal` is a tie.
    pub fn compare(&self, ours: f64, theirs: f64) -> Ordering {
        let ord = ours.total_cmp(&theirs);
        if self.lower_is_better() {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one head-to-head matchup from one side's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    pub fn from_counts(ours: u32, theirs: u32) -> Self {
        match ours.cmp(&theirs) {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "W"),
            Outcome::Loss => write!(f, "L"),
            Outcome::Tie => write!(f, "T"),
        }
    }
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum HoopsError {
    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Week {week} is outside the league range 1..={weeks}")]
    UnknownWeek { week: u32, weeks: u32 },

    #[error("No stat line for {team} in week {week}")]
    NoSnapshot { team: String, week: u32 },

    #[error("Stat line for {team} in week {week} has no {stat}")]
    MissingStat { team: String, week: u32, stat: Stat },

    #[error("{0} is not a tracked statistic")]
    UntrackedStat(Stat),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HoopsError {
    /// Query for a team, week or stat line the table does not hold
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HoopsError::UnknownTeam(_)
                | HoopsError::UnknownWeek { .. }
                | HoopsError::NoSnapshot { .. }
                | HoopsError::MissingStat { .. }
        )
    }

    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            HoopsError::InvalidConfiguration(_) | HoopsError::UntrackedStat(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HoopsError>;

/// Application configuration loaded from hoops.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub league: LeagueConfig,
    pub data: DataConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// Number of weeks in the season; taken from the data when absent
    pub weeks: Option<u32>,
    /// Tracked statistic labels, e.g. "FG%" or "TO"
    pub stats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub matchups_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Decimal places for fractional scores
    pub precision: usize,
}

impl LeagueConfig {
    /// Resolve the configured labels into statistics.
    ///
    /// Rejects unknown labels, duplicates and an empty list.
    pub fn tracked_stats(&self) -> Result<Vec<Stat>> {
        if self.stats.is_empty() {
            return Err(HoopsError::InvalidConfiguration(
                "at least one statistic must be tracked".to_string(),
            ));
        }
        let mut stats = Vec::with_capacity(self.stats.len());
        for label in &self.stats {
            let stat = Stat::from_label(label).ok_or_else(|| {
                HoopsError::InvalidConfiguration(format!("unknown statistic '{}'", label))
            })?;
            if stats.contains(&stat) {
                return Err(HoopsError::InvalidConfiguration(format!(
                    "statistic '{}' listed twice",
                    label
                )));
            }
            stats.push(stat);
        }
        Ok(stats)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            league: LeagueConfig {
                weeks: None,
                stats: Stat::ALL.iter().map(|s| s.label().to_string()).collect(),
            },
            data: DataConfig {
                matchups_path: "data/matchups.csv".to_string(),
            },
            report: ReportConfig { precision: 2 },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HoopsError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| HoopsError::Config(format!("Failed to parse config: {}", e)))?;
        config.league.tracked_stats()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HoopsError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
