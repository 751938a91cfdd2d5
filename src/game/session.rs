use tracing::{debug, info};

use super::board::Board;
use super::player::{Player, Seat};
use crate::error::{ConfigError, MoveError};

/// Points for winning a game.
pub const WIN_POINTS: u32 = 2;
/// Points each player receives for a drawn game.
pub const DRAW_POINTS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Seat),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingMove(Seat),
    GameOver(GameOutcome),
    SessionComplete,
}

/// Result of a move that was accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    NextTurn(Seat),
    GameOver(GameOutcome),
}

/// What the front end answered when asked for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRequest {
    /// 1-based column number.
    Column(usize),
    /// Stop the whole session right now.
    EndSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Completed,
    Aborted,
}

/// The input/output collaborator driving a [`Session`].
///
/// Only `request_column` is required; the notification hooks default to doing
/// nothing so headless drivers stay small.
pub trait Frontend {
    type Error;

    /// Ask `player` for a column in `1..=max_column`.
    fn request_column(
        &mut self,
        player: &Player,
        max_column: usize,
    ) -> Result<MoveRequest, Self::Error>;

    fn game_started(&mut self, _session: &Session) -> Result<(), Self::Error> {
        Ok(())
    }

    fn move_rejected(&mut self, _player: &Player, _error: &MoveError) -> Result<(), Self::Error> {
        Ok(())
    }

    fn board_changed(&mut self, _board: &Board) -> Result<(), Self::Error> {
        Ok(())
    }

    fn game_finished(
        &mut self,
        _session: &Session,
        _outcome: GameOutcome,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn session_finished(&mut self, _session: &Session) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// One or more games between two players on a shared board.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    players: [Player; 2],
    total_games: usize,
    game_number: usize,
    moves_played: usize,
    state: SessionState,
}

impl Session {
    pub fn new(
        board: Board,
        names: [String; 2],
        total_games: usize,
    ) -> Result<Self, ConfigError> {
        if total_games == 0 {
            return Err(ConfigError::Validation(
                "a session needs at least one game".into(),
            ));
        }
        let [first, second] = names;
        Ok(Session {
            board,
            players: [Player::new(first, Seat::One), Player::new(second, Seat::Two)],
            total_games,
            game_number: 1,
            moves_played: 0,
            state: SessionState::AwaitingMove(Self::starting_seat(1)),
        })
    }

    /// Seat that opens game `game` (1-based): odd games go to seat one.
    pub fn starting_seat(game: usize) -> Seat {
        if game % 2 == 1 {
            Seat::One
        } else {
            Seat::Two
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// 1-based number of the game in progress (or just finished).
    pub fn game_number(&self) -> usize {
        self.game_number
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }

    /// Moves accepted in the current game.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Play a 1-based column for the player whose turn it is.
    ///
    /// Rejected moves leave the session untouched.
    pub fn submit_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        let SessionState::AwaitingMove(seat) = self.state else {
            return Err(MoveError::NotAwaitingMove);
        };
        let max = self.board.columns();
        if column == 0 || column > max {
            return Err(MoveError::OutOfRange { column, max });
        }

        let marker = self.player(seat).marker();
        let row = self.board.drop_piece(column - 1, marker)?;
        self.moves_played += 1;
        debug!(
            game = self.game_number,
            player = self.player(seat).name(),
            column,
            row,
            "piece dropped"
        );

        let outcome = if self.board.check_win(marker) {
            GameOutcome::Winner(seat)
        } else if self.board.is_full() {
            GameOutcome::Draw
        } else {
            let next = seat.other();
            self.state = SessionState::AwaitingMove(next);
            return Ok(MoveOutcome::NextTurn(next));
        };

        self.finish_game(outcome);
        Ok(MoveOutcome::GameOver(outcome))
    }

    fn finish_game(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Winner(seat) => self.players[seat.index()].award(WIN_POINTS),
            GameOutcome::Draw => {
                for player in &mut self.players {
                    player.award(DRAW_POINTS);
                }
            }
        }
        info!(
            game = self.game_number,
            moves = self.moves_played,
            ?outcome,
            "game over"
        );
        self.state = SessionState::GameOver(outcome);
    }

    /// Leave a finished game: start the next one with the other player
    /// opening, or complete the session. No-op in any other state.
    pub fn advance(&mut self) -> SessionState {
        if let SessionState::GameOver(_) = self.state {
            if self.game_number < self.total_games {
                self.game_number += 1;
                self.moves_played = 0;
                self.board.reset();
                self.state = SessionState::AwaitingMove(Self::starting_seat(self.game_number));
            } else {
                self.state = SessionState::SessionComplete;
            }
        }
        self.state
    }

    /// Drive the session to completion through `frontend`.
    ///
    /// The front end's answer is checked for [`MoveRequest::EndSession`]
    /// before every drop; that stops the session on the spot.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<SessionEnd, F::Error> {
        if let SessionState::AwaitingMove(_) = self.state {
            frontend.game_started(self)?;
        }

        loop {
            match self.state {
                SessionState::AwaitingMove(seat) => {
                    let player = &self.players[seat.index()];
                    let column = match frontend.request_column(player, self.board.columns())? {
                        MoveRequest::Column(column) => column,
                        MoveRequest::EndSession => {
                            info!(game = self.game_number, "session ended by player");
                            return Ok(SessionEnd::Aborted);
                        }
                    };

                    match self.submit_move(column) {
                        Ok(MoveOutcome::NextTurn(_)) => frontend.board_changed(&self.board)?,
                        Ok(MoveOutcome::GameOver(outcome)) => {
                            frontend.game_finished(self, outcome)?
                        }
                        Err(err) => {
                            debug!(column, %err, "move rejected");
                            frontend.move_rejected(&self.players[seat.index()], &err)?;
                        }
                    }
                }
                SessionState::GameOver(_) => {
                    if let SessionState::AwaitingMove(_) = self.advance() {
                        frontend.game_started(self)?;
                    }
                }
                SessionState::SessionComplete => {
                    let scores: Vec<u32> = self.players.iter().map(Player::score).collect();
                    info!(games = self.total_games, ?scores, "session complete");
                    frontend.session_finished(self)?;
                    return Ok(SessionEnd::Completed);
                }
            }
        }
    }
}
