//! Fight tactics for League of Legends champions: the fastest ability
//! rotation for one champion to slay another, plus the champion data
//! plumbing around it.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod matchup;
pub mod parallel;
pub mod report;
pub mod tactics;

pub use error::{Result, TacticsError};
