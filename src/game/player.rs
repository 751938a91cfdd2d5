use super::board::Cell;

/// Which of the two chairs at the table a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Convert seat to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Seat::One => Cell::PlayerOne,
            Seat::Two => Cell::PlayerTwo,
        }
    }

    /// Position in the session's player pair.
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    seat: Seat,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, seat: Seat) -> Self {
        Player {
            name: name.into(),
            seat,
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Cell {
        self.seat.to_cell()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Scores only ever grow within a session.
    pub(crate) fn award(&mut self, points: u32) {
        self.score += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::One.other(), Seat::Two);
        assert_eq!(Seat::Two.other(), Seat::One);
    }

    #[test]
    fn test_markers_are_distinct() {
        assert_eq!(Seat::One.to_cell(), Cell::PlayerOne);
        assert_eq!(Seat::Two.to_cell(), Cell::PlayerTwo);
        assert_ne!(Seat::One.to_cell(), Seat::Two.to_cell());
    }

    #[test]
    fn test_award_accumulates() {
        let mut player = Player::new("Alice", Seat::One);
        assert_eq!(player.score(), 0);
        player.award(2);
        player.award(1);
        assert_eq!(player.score(), 3);
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.marker(), Cell::PlayerOne);
    }
}
