//! # Console Connect Four
//!
//! A two-player Connect Four game for the terminal. Boards are configurable
//! between 5x5 and 9x9, and a session can run several games with the opening
//! player swapping each game and scores carried across games.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, session state machine
//! - [`ui`] — Console front end: prompts, board and score rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
