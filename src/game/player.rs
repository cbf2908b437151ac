use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Player to move on a 0-indexed turn: Red on even turns, Yellow on odd
    pub fn for_turn(turn_index: usize) -> Player {
        if turn_index % 2 == 0 {
            Player::Red
        } else {
            Player::Yellow
        }
    }

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Numeric id: 1 for the first player, 2 for the second
    pub fn id(self) -> u8 {
        match self {
            Player::Red => 1,
            Player::Yellow => 2,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }

    /// Label used when addressing a model, e.g. `Player 1 (X)`
    pub fn label(self) -> String {
        format!("Player {} ({})", self.id(), self.to_cell().symbol())
    }
}
