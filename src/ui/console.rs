use std::io::{self, BufRead, Write};

use crate::config::AppConfig;
use crate::error::{InputError, MoveError};
use crate::game::{Board, Frontend, GameOutcome, MoveRequest, Player, Session};

use super::board_view::{score_line, Glyphs};
use super::prompt::{
    is_end_session, parse_column, parse_dimensions, parse_game_count, parse_name,
};

/// A prompt either produced a value or the player asked to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    EndSession,
}

/// Everything asked before the first game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSetup {
    pub rows: usize,
    pub columns: usize,
    pub games: usize,
    pub names: [String; 2],
}

/// Line-oriented console front end. Generic over its streams so tests can
/// drive it with in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
    glyphs: Glyphs,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, glyphs: Glyphs) -> Self {
        Console {
            input,
            output,
            glyphs,
        }
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompt until `parse` accepts the line or the player ends the session.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<Answer<T>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(Answer::EndSession);
            };
            if is_end_session(&line) {
                return Ok(Answer::EndSession);
            }
            match parse(&line) {
                Ok(value) => return Ok(Answer::Value(value)),
                Err(err) => writeln!(self.output, "{err}, please try again.")?,
            }
        }
    }

    pub fn request_board_dimensions(
        &mut self,
        default: (usize, usize),
    ) -> io::Result<Answer<(usize, usize)>> {
        let prompt = format!(
            "Board size as '<rows> <columns>', each 5-9 [{} {}]: ",
            default.0, default.1
        );
        self.ask(&prompt, |line| parse_dimensions(line, default))
    }

    pub fn request_game_count(&mut self, default: usize) -> io::Result<Answer<usize>> {
        let prompt = format!("Number of games [{default}]: ");
        self.ask(&prompt, |line| parse_game_count(line, default))
    }

    /// `ordinal` is 1 or 2.
    pub fn request_player_name(
        &mut self,
        ordinal: usize,
        default: &str,
    ) -> io::Result<Answer<String>> {
        let prompt = format!("Name of player {ordinal} [{default}]: ");
        self.ask(&prompt, |line| Ok(parse_name(line, default)))
    }

    /// Ask every setup question, using `config` for the empty-line defaults.
    pub fn request_setup(&mut self, config: &AppConfig) -> io::Result<Answer<SessionSetup>> {
        writeln!(self.output, "Connect Four. Type 'q' at any prompt to quit.")?;

        let default = (config.board.rows, config.board.columns);
        let Answer::Value((rows, columns)) = self.request_board_dimensions(default)? else {
            return Ok(Answer::EndSession);
        };
        let Answer::Value(games) = self.request_game_count(config.session.games)? else {
            return Ok(Answer::EndSession);
        };
        let [first_default, second_default] = &config.players.names;
        let Answer::Value(first) = self.request_player_name(1, first_default)? else {
            return Ok(Answer::EndSession);
        };
        let Answer::Value(second) = self.request_player_name(2, second_default)? else {
            return Ok(Answer::EndSession);
        };

        Ok(Answer::Value(SessionSetup {
            rows,
            columns,
            games,
            names: [first, second],
        }))
    }

    fn print_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "{}", board.render().with_glyphs(self.glyphs))
    }
}

impl<R: BufRead, W: Write> Frontend for Console<R, W> {
    type Error = io::Error;

    fn request_column(&mut self, player: &Player, max_column: usize) -> io::Result<MoveRequest> {
        let prompt = format!("{}, choose a column (1-{max_column}): ", player.name());
        let answer = self.ask(&prompt, |line| parse_column(line, max_column))?;
        Ok(match answer {
            Answer::Value(column) => MoveRequest::Column(column),
            Answer::EndSession => MoveRequest::EndSession,
        })
    }

    fn game_started(&mut self, session: &Session) -> io::Result<()> {
        if session.total_games() > 1 {
            writeln!(
                self.output,
                "\nGame {} of {}",
                session.game_number(),
                session.total_games()
            )?;
        }
        self.print_board(session.board())
    }

    fn move_rejected(&mut self, player: &Player, error: &MoveError) -> io::Result<()> {
        writeln!(self.output, "{error}, try again {}.", player.name())
    }

    fn board_changed(&mut self, board: &Board) -> io::Result<()> {
        self.print_board(board)
    }

    fn game_finished(&mut self, session: &Session, outcome: GameOutcome) -> io::Result<()> {
        self.print_board(session.board())?;
        match outcome {
            GameOutcome::Winner(seat) => {
                writeln!(self.output, "{} wins!", session.player(seat).name())?
            }
            GameOutcome::Draw => writeln!(self.output, "It's a draw!")?,
        }
        if session.total_games() > 1 {
            writeln!(self.output, "{}", score_line(session.players()))?;
        }
        Ok(())
    }

    fn session_finished(&mut self, session: &Session) -> io::Result<()> {
        if session.total_games() > 1 {
            writeln!(self.output, "\nFinal score: {}", score_line(session.players()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Seat;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Glyphs::default(),
        )
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_dimensions_retry_until_valid() {
        let mut console = console("abc\n4 7\n7 8\n");
        let answer = console.request_board_dimensions((6, 7)).unwrap();
        assert_eq!(answer, Answer::Value((7, 8)));

        let text = output(console);
        assert!(text.contains("could not understand 'abc'"));
        assert!(text.contains("4 is out of range (expected 5..=9)"));
    }

    #[test]
    fn test_empty_lines_use_defaults() {
        let mut console = console("\n\n\n\n");
        let setup = console.request_setup(&AppConfig::default()).unwrap();
        assert_eq!(
            setup,
            Answer::Value(SessionSetup {
                rows: 6,
                columns: 7,
                games: 1,
                names: ["Player 1".to_string(), "Player 2".to_string()],
            })
        );
    }

    #[test]
    fn test_quit_during_setup() {
        let mut console = console("6 7\nquit\n");
        let setup = console.request_setup(&AppConfig::default()).unwrap();
        assert_eq!(setup, Answer::EndSession);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let mut console = console("");
        let player = Player::new("Alice", Seat::One);
        assert_eq!(
            console.request_column(&player, 7).unwrap(),
            MoveRequest::EndSession
        );
    }

    #[test]
    fn test_request_column_reprompts_same_player() {
        let mut console = console("9\nx\n3\n");
        let player = Player::new("Alice", Seat::One);
        assert_eq!(
            console.request_column(&player, 7).unwrap(),
            MoveRequest::Column(3)
        );
        let text = output(console);
        assert_eq!(text.matches("Alice, choose a column (1-7): ").count(), 3);
    }
}
