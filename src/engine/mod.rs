//! Head-to-head comparison and ranking
//!
//! Pairwise category results, the rankings derived from them, and the
//! separate category-rank voting scheme.

pub mod head_to_head;
pub mod ranking;
pub mod series;
pub mod voting;

pub use head_to_head::{compare_snapshots, HeadToHead, MatchupScore, TeamPair};
pub use ranking::{CategoryShare, Rankings, SeasonScore, TeamScore, TeamWeekScore, WinCount};
pub use series::{Series, SeriesWeek};
pub use voting::{
    rank_by_category_votes, season_average_wins, CategoryRankings, Dominance, SeasonWins,
    VoteTally,
};
