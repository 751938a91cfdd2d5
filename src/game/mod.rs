//! Core Connect Four game logic: the board, the two players, and the session
//! state machine that sequences games and keeps score.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, DEFAULT_COLUMNS, DEFAULT_ROWS, MIN_DIMENSION};
pub use player::{Player, Seat};
pub use session::{
    Frontend, GameOutcome, MoveOutcome, MoveRequest, Session, SessionEnd, SessionState,
    DRAW_POINTS, WIN_POINTS,
};
