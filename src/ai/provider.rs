use crate::error::ProviderError;
use crate::game::{Board, Move, Player, Rotation};

/// Everything a provider may look at when choosing a column.
#[derive(Debug, Clone, Copy)]
pub struct MoveRequest<'a> {
    pub board: &'a Board,
    pub player: Player,
    /// 1-based turn number
    pub turn_number: usize,
    pub rotation: Rotation,
    /// Moves between rotations, `None` when the board never rotates
    pub rotation_interval: Option<usize>,
    pub history: &'a [Move],
}

impl MoveRequest<'_> {
    /// Playable columns, 1-indexed
    pub fn valid_moves(&self) -> Vec<usize> {
        self.board.valid_columns().into_iter().map(|c| c + 1).collect()
    }

    /// True when the board turns right after this move lands
    pub fn rotates_after_this_move(&self) -> bool {
        self.rotation_interval
            .is_some_and(|interval| interval > 0 && self.turn_number % interval == 0)
    }
}

/// Source of moves for one seat at the table.
///
/// Returns a 1-indexed column. The caller validates it, so a provider may
/// return anything; failures and bad columns are handled the same way.
pub trait MoveProvider {
    /// Display name used in logs and the UI
    fn name(&self) -> &str;

    fn suggest_move(&mut self, request: &MoveRequest<'_>) -> Result<usize, ProviderError>;
}

impl<P: MoveProvider + ?Sized> MoveProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn suggest_move(&mut self, request: &MoveRequest<'_>) -> Result<usize, ProviderError> {
        (**self).suggest_move(request)
    }
}
