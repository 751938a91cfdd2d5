//! Console front end: prompt parsing, the line-oriented console that drives a
//! session, and the text rendering of boards and scores.

pub mod board_view;
mod console;
pub mod prompt;

pub use board_view::{score_line, BoardView, Glyphs};
pub use console::{Answer, Console, SessionSetup};
