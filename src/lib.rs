//! Round-robin league scheduling.
//!
//! Assigns every pair of teams to a distinct (day, time) slot, honoring each
//! team's Preferred / Avoid / Blacklist choices through a four-tier fallback
//! search. Pairs that cannot be placed are reported, never dropped.

pub mod config;
pub mod demo;
pub mod display;
pub mod error;
pub mod logging;
pub mod parser;
pub mod schedule;
pub mod web;

pub use error::{LeagueError, Result};
