//! # Connect Four
//!
//! Rules engine for Connect Four with a terminal front end built on Ratatui.
//! Two players drop pieces into the columns of a grid; four in a row
//! horizontally, vertically, or diagonally wins, and a full grid without a
//! winner is a tie.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, state machine
//! - [`ui`]: Terminal UI: board view, key handling
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
