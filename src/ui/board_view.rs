use std::fmt;

use crossterm::style::Stylize;

use crate::game::{Board, Cell, Player};

/// Characters used to draw the two markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub player_one: char,
    pub player_two: char,
    /// Paint markers red/yellow with ANSI colour codes.
    pub color: bool,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            player_one: 'X',
            player_two: 'O',
            color: false,
        }
    }
}

impl Glyphs {
    fn symbol(&self, cell: Cell) -> String {
        let ch = match cell {
            Cell::Empty => return " ".to_string(),
            Cell::PlayerOne => self.player_one,
            Cell::PlayerTwo => self.player_two,
        };
        if !self.color {
            return ch.to_string();
        }
        let styled = match cell {
            Cell::PlayerOne => ch.red(),
            _ => ch.yellow(),
        };
        styled.bold().to_string()
    }
}

/// Borrowed text view of a board.
///
/// Layout, for a 5-column board:
///
/// ```text
///   1   2   3   4   5
/// |   |   |   |   |   |
/// | X | O |   |   |   |
/// +---+---+---+---+---+
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    glyphs: Glyphs,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board) -> Self {
        BoardView {
            board,
            glyphs: Glyphs::default(),
        }
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// The rendered grid, one text line at a time.
    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        let board = self.board;
        let glyphs = self.glyphs;
        let header = std::iter::once_with(move || {
            (1..=board.columns())
                .map(|col| format!("{col:>3} "))
                .collect::<String>()
                .trim_end()
                .to_string()
        });
        let rows = (0..board.rows()).map(move |row| {
            let mut line: String = board
                .cells_in_row(row)
                .map(|cell| format!("| {} ", glyphs.symbol(cell)))
                .collect();
            line.push('|');
            line
        });
        let border = std::iter::once_with(move || {
            let mut line = "+---".repeat(board.columns());
            line.push('+');
            line
        });
        header.chain(rows).chain(border)
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// `"<name1>: <score1> <name2>: <score2>"`
pub fn score_line(players: &[Player; 2]) -> String {
    let [first, second] = players;
    format!(
        "{}: {} {}: {}",
        first.name(),
        first.score(),
        second.name(),
        second.score()
    )
}
