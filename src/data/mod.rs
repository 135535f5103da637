//! Data ingestion and storage
//!
//! Matchup file parsing and the per-team, per-week stat table.

pub mod ingest;
pub mod stat_table;

#[cfg(test)]
pub(crate) mod fixtures;

pub use ingest::{load_matchups, read_matchups, MatchupRow};
pub use stat_table::{StatSnapshot, StatTable};
