//! # Four in a Row
//!
//! Four in a row on a 4×4 grid: any full row, column or diagonal wins. Two
//! people can play each other, or one person can play a random-move opponent.
//! Features a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, marks, win detection, state machine
//! - [`ai`] — Opponent trait and the uniform random opponent
//! - [`session`] — Game modes, move submission, opponent turns, scoring
//! - [`score`] — Session score tally
//! - [`ui`] — Terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod score;
pub mod session;
pub mod ui;
