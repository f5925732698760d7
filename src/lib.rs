//! # Connect N
//!
//! A generalized connect-N board: columns that fill from the bottom, and
//! detection of runs of any length through a cell in the vertical,
//! horizontal and both diagonal directions.
//!
//! ## Modules
//!
//! - [`game`] — Core model: tokens, columns, board and sequence detection
//! - [`ai`] — Strategy trait and the random, greedy, sequence and minimax players
//! - [`arena`] — Headless games and match tallies between two strategies
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
