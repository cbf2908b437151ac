use super::player::Player;
use super::rotation::Rotation;

/// One placed piece. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// 1-based turn number
    pub turn: usize,
    pub player: Player,
    /// 0-based column on the board as it was when the move was made
    pub column: usize,
    pub rotation: Rotation,
}

impl Move {
    /// Compact `turn-player-column` form with a 1-indexed column
    pub fn summary(&self) -> String {
        format!("{}-{}-{}", self.turn, self.player.id(), self.column + 1)
    }
}

/// Append-only record of the moves in one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }
}
