//! Ranking and series formatting

use crate::engine::{
    CategoryShare, SeasonScore, SeasonWins, Series, TeamScore, TeamWeekScore, VoteTally, WinCount,
};
use crate::report::OutputFormat;
use crate::{HoopsError, Result};
use serde::Serialize;

/// A row that can appear in a ranked report
pub trait ReportRow: Serialize {
    /// CSV column names after the leading `rank` column
    fn header() -> &'static [&'static str];

    /// CSV cells matching [`ReportRow::header`]
    fn cells(&self, precision: usize) -> Vec<String>;

    /// Text after the `"{rank}. "` prefix
    fn line(&self, precision: usize) -> String;
}

impl ReportRow for TeamScore {
    fn header() -> &'static [&'static str] {
        &["team", "score"]
    }

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![self.team.clone(), format!("{:.*}", precision, self.score)]
    }

    fn line(&self, precision: usize) -> String {
        format!("{}: {:.*}", self.team, precision, self.score)
    }
}

impl ReportRow for TeamWeekScore {
    fn header() -> &'static [&'static str] {
        &["team", "week", "score"]
    }

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![
            self.team.clone(),
            self.week.to_string(),
            format!("{:.*}", precision, self.score),
        ]
    }

    fn line(&self, precision: usize) -> String {
        format!("{}, week {}: {:.*}", self.team, self.week, precision, self.score)
    }
}

impl ReportRow for SeasonScore {
    fn header() -> &'static [&'static str] {
        &["team", "score", "weeks"]
    }

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![
            self.team.clone(),
            format!("{:.*}", precision, self.score),
            self.weeks.to_string(),
        ]
    }

    fn line(&self, precision: usize) -> String {
        format!(
            "{}: Total Average: {:.*} ({} weeks)",
            self.team, precision, self.score, self.weeks
        )
    }
}

impl ReportRow for WinCount {
    fn header() -> &'static [&'static str] {
        &["team", "wins", "losses", "ties"]
    }

    fn cells(&self, _precision: usize) -> Vec<String> {
        vec![
            self.team.clone(),
            self.wins.to_string(),
            self.losses.to_string(),
            self.ties.to_string(),
        ]
    }

    fn line(&self, _precision: usize) -> String {
        format!(
            "{}: {} ({}-{}-{})",
            self.team, self.wins, self.wins, self.losses, self.ties
        )
    }
}

impl ReportRow for VoteTally {
    fn header() -> &'static [&'static str] {
        &["team", "total_wins"]
    }

    fn cells(&self, _precision: usize) -> Vec<String> {
        vec![self.team.clone(), self.total_wins.to_string()]
    }

    fn line(&self, _precision: usize) -> String {
        format!("{}: {}", self.team, self.total_wins)
    }
}

impl ReportRow for SeasonWins {
    fn header() -> &'static [&'static str] {
        &["team", "categories_won", "average"]
    }

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![
            self.team.clone(),
            self.categories_won.to_string(),
            format!("{:.*}", precision, self.average),
        ]
    }

    fn line(&self, precision: usize) -> String {
        format!("{}: {:.*}", self.team, precision, self.average)
    }
}

impl ReportRow for CategoryShare {
    fn header() -> &'static [&'static str] {
        &["team", "won", "available", "share"]
    }

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![
            self.team.clone(),
            self.won.to_string(),
            self.available.to_string(),
            format!("{:.*}", precision, self.share),
        ]
    }

    fn line(&self, precision: usize) -> String {
        format!(
            "{}: {:.*} ({}/{})",
            self.team, precision, self.share, self.won, self.available
        )
    }
}

#[derive(Serialize)]
struct RankedJson<'a, R> {
    title: &'a str,
    rows: Vec<RankedEntry<'a, R>>,
}

#[derive(Serialize)]
struct RankedEntry<'a, R> {
    rank: usize,
    #[serde(flatten)]
    row: &'a R,
}

/// Renders engine output as text, CSV or JSON
#[derive(Debug, Clone, Copy)]
pub struct ReportPrinter {
    format: OutputFormat,
    precision: usize,
}

impl ReportPrinter {
    pub fn new(format: OutputFormat, precision: usize) -> Self {
        ReportPrinter { format, precision }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render a ranking with 1-indexed ranks
    pub fn ranking<R: ReportRow>(&self, title: &str, rows: &[R]) -> Result<String> {
        match self.format {
            OutputFormat::Table => {
                let mut out = format!("{}\n", title);
                for (i, row) in rows.iter().enumerate() {
                    out.push_str(&format!("{}. {}\n", i + 1, row.line(self.precision)));
                }
                Ok(out)
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                let mut header = vec!["rank"];
                header.extend_from_slice(R::header());
                writer.write_record(&header)?;
                for (i, row) in rows.iter().enumerate() {
                    let mut record = vec![(i + 1).to_string()];
                    record.extend(row.cells(self.precision));
                    writer.write_record(&record)?;
                }
                csv_to_string(writer)
            }
            OutputFormat::Json => {
                let report = RankedJson {
                    title,
                    rows: rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| RankedEntry { rank: i + 1, row })
                        .collect(),
                };
                Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
            }
        }
    }

    /// Week-by-week scores between two teams and the running tally
    pub fn series(&self, series: &Series) -> Result<String> {
        match self.format {
            OutputFormat::Table => {
                let mut out = format!("{} VS {}\n", series.team, series.opponent);
                out.push_str(&"-".repeat(20));
                out.push('\n');
                for week in &series.weeks {
                    out.push_str(&format!(
                        "Week {}: {}-{}\n",
                        week.week, week.score.first, week.score.second
                    ));
                }
                out.push_str(&format!(
                    "Total: {} {}  {} {}  {} ties\n",
                    series.team, series.wins, series.opponent, series.losses, series.ties
                ));
                Ok(out)
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                writer.write_record([
                    "week",
                    series.team.as_str(),
                    series.opponent.as_str(),
                ])?;
                for week in &series.weeks {
                    writer.write_record([
                        week.week.to_string(),
                        week.score.first.to_string(),
                        week.score.second.to_string(),
                    ])?;
                }
                csv_to_string(writer)
            }
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(series)?)),
        }
    }
}

fn csv_to_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| HoopsError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| HoopsError::Parse(e.to_string()))
}
