//! Season series between two teams

use crate::engine::head_to_head::MatchupScore;
use crate::Outcome;
use serde::Serialize;

/// One week of a series, oriented to the series' team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesWeek {
    pub week: u32,
    pub score: MatchupScore,
}

/// Running tally of one team against one opponent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub team: String,
    pub opponent: String,
    pub weeks: Vec<SeriesWeek>,
    /// Weeks won by `team`
    pub wins: usize,
    /// Weeks won by `opponent`
    pub losses: usize,
    pub ties: usize,
    /// Categories won by `team` across the series
    pub categories_for: u32,
    /// Categories won by `opponent` across the series
    pub categories_against: u32,
}

impl Series {
    pub fn new(team: &str, opponent: &str) -> Self {
        Series {
            team: team.to_string(),
            opponent: opponent.to_string(),
            weeks: Vec::new(),
            wins: 0,
            losses: 0,
            ties: 0,
            categories_for: 0,
            categories_against: 0,
        }
    }

    /// Add one week's result, already oriented to `team`
    pub fn update(&mut self, week: u32, score: MatchupScore) {
        self.weeks.push(SeriesWeek { week, score });
        self.categories_for += score.first;
        self.categories_against += score.second;

        match score.outcome() {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn weeks_played(&self) -> usize {
        self.weeks.len()
    }

    /// Same series seen from the opponent's side
    pub fn reversed(&self) -> Series {
        Series {
            team: self.opponent.clone(),
            opponent: self.team.clone(),
            weeks: self
                .weeks
                .iter()
                .map(|w| SeriesWeek {
                    week: w.week,
                    score: w.score.swapped(),
                })
                .collect(),
            wins: self.losses,
            losses: self.wins,
            ties: self.ties,
            categories_for: self.categories_against,
            categories_against: self.categories_for,
        }
    }
}
