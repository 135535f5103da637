//! Matchup file ingestion
//!
//! One row per real matchup: `Week`, `Team 1 Name`, `Team 2 Name`, then a
//! `Team 1 <stat>` and `Team 2 <stat>` column for every tracked statistic.

use crate::data::stat_table::{StatSnapshot, StatTable};
use crate::{HoopsError, LeagueConfig, Result, Stat};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

/// A parsed matchup row, both sides
#[derive(Debug, Clone)]
pub struct MatchupRow {
    pub week: u32,
    pub team1: String,
    pub team2: String,
    pub team1_stats: StatSnapshot,
    pub team2_stats: StatSnapshot,
}

/// Column positions resolved from the header row
struct Columns {
    week: usize,
    team1: usize,
    team2: usize,
    /// (stat, team 1 column, team 2 column)
    stats: Vec<(Stat, usize, usize)>,
}

impl Columns {
    fn resolve(headers: &StringRecord, stats: &[Stat]) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| HoopsError::Parse(format!("missing column '{}'", name)))
        };

        let mut stat_columns = Vec::with_capacity(stats.len());
        for stat in stats {
            let first = find(&format!("Team 1 {}", stat.label()))?;
            let second = find(&format!("Team 2 {}", stat.label()))?;
            stat_columns.push((*stat, first, second));
        }

        Ok(Columns {
            week: find("Week")?,
            team1: find("Team 1 Name")?,
            team2: find("Team 2 Name")?,
            stats: stat_columns,
        })
    }

    fn parse_row(&self, record: &StringRecord, line: u64) -> Result<MatchupRow> {
        let cell = |idx: usize| {
            record
                .get(idx)
                .map(str::trim)
                .ok_or_else(|| HoopsError::Parse(format!("row {}: too few fields", line)))
        };

        let week_cell = cell(self.week)?;
        let week = week_cell.parse::<u32>().map_err(|_| {
            HoopsError::Parse(format!("row {}: invalid week '{}'", line, week_cell))
        })?;

        let number = |idx: usize, stat: Stat| -> Result<f64> {
            let raw = cell(idx)?;
            match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(HoopsError::Parse(format!(
                    "row {}: invalid {} value '{}'",
                    line, stat, raw
                ))),
            }
        };

        let mut team1_stats = StatSnapshot::new();
        let mut team2_stats = StatSnapshot::new();
        for &(stat, first, second) in &self.stats {
            team1_stats = team1_stats.with(stat, number(first, stat)?);
            team2_stats = team2_stats.with(stat, number(second, stat)?);
        }

        Ok(MatchupRow {
            week,
            team1: cell(self.team1)?.to_string(),
            team2: cell(self.team2)?.to_string(),
            team1_stats,
            team2_stats,
        })
    }
}

/// Parse every matchup row for the given statistics
pub fn parse_rows<R: Read>(reader: R, stats: &[Stat]) -> Result<Vec<MatchupRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::resolve(csv_reader.headers()?, stats)?;

    let mut rows = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Header is line 1
        let line = record.position().map(|p| p.line()).unwrap_or(i as u64 + 2);
        let row = columns.parse_row(&record, line)?;
        log::debug!("Week {}: {} vs {}", row.week, row.team1, row.team2);
        rows.push(row);
    }
    Ok(rows)
}

/// Build a stat table from already-parsed rows
pub fn build_table(rows: Vec<MatchupRow>, weeks: u32, stats: Vec<Stat>) -> Result<StatTable> {
    let mut table = StatTable::new(weeks, stats)?;
    for row in rows {
        table.insert_snapshot(&row.team1, row.week, row.team1_stats)?;
        table.insert_snapshot(&row.team2, row.week, row.team2_stats)?;
    }
    Ok(table)
}

/// Read a matchup file into a stat table.
///
/// When the league config leaves `weeks` unset, the season length is the
/// highest week number found in the data.
pub fn read_matchups<R: Read>(reader: R, league: &LeagueConfig) -> Result<StatTable> {
    let stats = league.tracked_stats()?;
    let rows = parse_rows(reader, &stats)?;

    let weeks = match league.weeks {
        Some(weeks) => weeks,
        None => rows.iter().map(|r| r.week).max().ok_or_else(|| {
            HoopsError::Parse("matchup file has no rows to infer the week count from".to_string())
        })?,
    };

    let row_count = rows.len();
    let table = build_table(rows, weeks, stats)?;
    log::info!(
        "Loaded {} matchups: {} teams over {} weeks",
        row_count,
        table.team_count(),
        table.week_count()
    );
    Ok(table)
}

pub fn load_matchups<P: AsRef<Path>>(path: P, league: &LeagueConfig) -> Result<StatTable> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        HoopsError::Parse(format!("Failed to open matchup file {}: {}", path.display(), e))
    })?;
    read_matchups(file, league)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{FOUR_TEAM_CSV, TOY_CSV};
    use crate::Config;

    fn league(weeks: Option<u32>) -> LeagueConfig {
        LeagueConfig {
            weeks,
            ..Config::default().league
        }
    }

    #[test]
    fn test_four_team_import() {
        let table = read_matchups(FOUR_TEAM_CSV.as_bytes(), &league(None)).unwrap();

        assert_eq!(
            table.teams().collect::<Vec<_>>(),
            vec!["Team A", "Team B", "Team C", "Team D"]
        );
        assert_eq!(table.weeks(), 1..=6);
        for team in ["Team A", "Team B", "Team C", "Team D"] {
            for week in 1..=6 {
                assert!(table.has_snapshot(team, week));
            }
        }

        // Team 1 side of the first row and Team 2 side of the last
        let team_a_week1 = [0.45, 0.75, 10.0, 95.0, 35.0, 18.0, 7.0, 5.0, 12.0];
        let team_d_week6 = [0.43, 0.74, 12.0, 97.0, 38.0, 20.0, 9.0, 7.0, 16.0];
        for (i, stat) in Stat::ALL.into_iter().enumerate() {
            assert_eq!(table.get("Team A", 1, stat).unwrap(), team_a_week1[i], "{}", stat);
            assert_eq!(table.get("Team D", 6, stat).unwrap(), team_d_week6[i], "{}", stat);
        }

        assert_eq!(table.get("Team B", 2, Stat::Points).unwrap(), 72.0);
        assert_eq!(table.get("Team C", 4, Stat::ThreePointersMade).unwrap(), 10.0);
        assert_eq!(table.get("Team A", 6, Stat::FreeThrowPct).unwrap(), 0.8);
    }

    #[test]
    fn test_configured_weeks_exceed_data() {
        let table = read_matchups(FOUR_TEAM_CSV.as_bytes(), &league(Some(8))).unwrap();
        assert_eq!(table.week_count(), 8);
        assert_eq!(table.active_weeks(), vec![1, 2, 3, 4, 5, 6]);
        assert!(!table.has_snapshot("Team A", 7));
    }

    #[test]
    fn test_week_beyond_configured_range() {
        let err = read_matchups(FOUR_TEAM_CSV.as_bytes(), &league(Some(3))).unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_subset_of_stats() {
        let league = LeagueConfig {
            weeks: None,
            stats: vec!["PTS".to_string(), "TO".to_string()],
        };
        let table = read_matchups(TOY_CSV.as_bytes(), &league).unwrap();
        assert_eq!(table.stats(), &[Stat::Points, Stat::Turnovers]);
        assert_eq!(table.get("A", 1, Stat::Points).unwrap(), 100.0);
        assert!(table.get("A", 1, Stat::Rebounds).is_err());
    }

    #[test]
    fn test_missing_column() {
        let csv = "Week,Team 1 Name,Team 2 Name,Team 1 PTS\n1,A,B,100\n";
        let league = LeagueConfig {
            weeks: None,
            stats: vec!["PTS".to_string()],
        };
        let err = read_matchups(csv.as_bytes(), &league).unwrap_err();
        assert!(err.to_string().contains("Team 2 PTS"));
    }

    #[test]
    fn test_bad_value_reports_row() {
        let csv = "Week,Team 1 Name,Team 2 Name,Team 1 PTS,Team 2 PTS\n\
                   1,A,B,100,90\n\
                   2,A,B,abc,90\n";
        let league = LeagueConfig {
            weeks: None,
            stats: vec!["PTS".to_string()],
        };
        let err = read_matchups(csv.as_bytes(), &league).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("row 3"), "{}", message);
        assert!(message.contains("abc"));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let league = LeagueConfig {
            weeks: None,
            stats: vec!["PTS".to_string(), "TO".to_string()],
        };
        for bad in ["NaN", "nan", "inf", "-inf"] {
            let csv = format!(
                "Week,Team 1 Name,Team 2 Name,Team 1 PTS,Team 2 PTS,Team 1 TO,Team 2 TO\n\
                 1,A,B,100,90,10,15\n\
                 2,A,B,{},90,12,15\n",
                bad
            );
            let err = read_matchups(csv.as_bytes(), &league).unwrap_err();
            let message = err.to_string();
            assert!(matches!(err, HoopsError::Parse(_)), "{}", message);
            assert!(message.contains("row 3"), "{}", message);
            assert!(message.contains(bad), "{}", message);
        }
    }

    #[test]
    fn test_empty_file_needs_weeks() {
        let csv = "Week,Team 1 Name,Team 2 Name,Team 1 PTS,Team 2 PTS\n";
        let mut league = LeagueConfig {
            weeks: None,
            stats: vec!["PTS".to_string()],
        };
        assert!(read_matchups(csv.as_bytes(), &league).is_err());

        league.weeks = Some(2);
        let table = read_matchups(csv.as_bytes(), &league).unwrap();
        assert_eq!(table.team_count(), 0);
    }
}
