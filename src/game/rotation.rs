use std::fmt;

use super::board::Board;
use super::gravity;
use crate::error::GameError;

/// Number of quarter turns clockwise applied so far, modulo 4.
///
/// Purely descriptive: gravity never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rotation(u8);

impl Rotation {
    pub const ORIGINAL: Rotation = Rotation(0);

    pub fn new(quarter_turns: u32) -> Self {
        Rotation((quarter_turns % 4) as u8)
    }

    pub fn quarter_turns(self) -> u8 {
        self.0
    }

    /// The state after one more clockwise quarter turn
    pub fn next(self) -> Self {
        Rotation((self.0 + 1) % 4)
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "Original orientation",
            1 => "Rotated 90° clockwise",
            2 => "Rotated 180°",
            _ => "Rotated 270° clockwise",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rotate 90° clockwise. The cell at `(r, c)` moves to `(c, rows - 1 - r)`
/// and the result has shape `(cols, rows)`.
pub fn rotate_clockwise(board: &Board) -> Board {
    let (rows, cols) = board.shape();
    let mut rotated = Board::new(cols, rows);
    for r in 0..rows {
        for c in 0..cols {
            rotated.place(c, rows - 1 - r, board.get(r, c));
        }
    }
    rotated
}

/// Rotate clockwise, let every column settle, and advance the rotation state.
pub fn rotate_and_settle(board: &Board, rotation: Rotation) -> (Board, Rotation) {
    let mut rotated = rotate_clockwise(board);
    gravity::settle(&mut rotated);
    (rotated, rotation.next())
}

/// Check that `after` is a plausible rotation of `before`: swapped shape and
/// the same number of pieces.
pub fn verify_rotation(before: &Board, after: &Board) -> Result<(), GameError> {
    let expected = (before.cols(), before.rows());
    if after.shape() != expected {
        return Err(GameError::RotationShapeMismatch {
            expected,
            actual: after.shape(),
        });
    }
    if after.piece_count() != before.piece_count() {
        return Err(GameError::RotationPieceCount {
            before: before.piece_count(),
            after: after.piece_count(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_board(rng: &mut StdRng, rows: usize, cols: usize) -> Board {
        let mut board = Board::new(rows, cols);
        let moves = rng.random_range(0..=rows * cols);
        for i in 0..moves {
            let valid = board.valid_columns();
            if valid.is_empty() {
                break;
            }
            let col = valid[rng.random_range(0..valid.len())];
            let cell = if i % 2 == 0 { Cell::Red } else { Cell::Yellow };
            board.drop_piece(col, cell);
        }
        board
    }

    #[test]
    fn test_rotation_state_wraps() {
        let mut rotation = Rotation::ORIGINAL;
        for expected in [1, 2, 3, 0, 1] {
            rotation = rotation.next();
            assert_eq!(rotation.quarter_turns(), expected);
        }
        assert_eq!(Rotation::new(6), Rotation::new(2));
    }

    #[test]
    fn test_rotation_labels() {
        assert_eq!(Rotation::new(0).label(), "Original orientation");
        assert_eq!(Rotation::new(1).label(), "Rotated 90° clockwise");
        assert_eq!(Rotation::new(2).label(), "Rotated 180°");
        assert_eq!(Rotation::new(3).label(), "Rotated 270° clockwise");
    }

    #[test]
    fn test_rotate_clockwise_swaps_dimensions() {
        let board = Board::new(8, 9);
        let rotated = rotate_clockwise(&board);
        assert_eq!(rotated.rows(), board.cols());
        assert_eq!(rotated.cols(), board.rows());
    }

    #[test]
    fn test_rotate_clockwise_coordinates() {
        // floor first: (0,0)=1 (0,1)=2 (0,2)=0 / (1,0)=0 (1,1)=1 (1,2)=2
        let board = Board::from_rows(&[&[1, 2, 0], &[0, 1, 2]]);
        let rotated = rotate_clockwise(&board);
        assert_eq!(rotated.shape(), (3, 2));
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(rotated.get(c, 1 - r), board.get(r, c));
            }
        }
    }

    #[test]
    fn test_four_rotations_restore_board() {
        let board = Board::from_rows(&[&[1, 2, 0, 0], &[0, 1, 0, 2], &[2, 0, 0, 0]]);
        let mut rotated = board.clone();
        for _ in 0..4 {
            rotated = rotate_clockwise(&rotated);
        }
        assert_eq!(rotated, board);
    }

    #[test]
    fn test_rotate_empty_board_only_swaps_shape() {
        let (rotated, rotation) = rotate_and_settle(&Board::new(8, 9), Rotation::ORIGINAL);
        assert_eq!(rotated, Board::new(9, 8));
        assert_eq!(rotation, Rotation::new(1));
    }

    #[test]
    fn test_single_piece_rotation() {
        let mut board = Board::new(8, 9);
        board.place(0, 0, Cell::Red);

        let (rotated, rotation) = rotate_and_settle(&board, Rotation::ORIGINAL);
        assert_eq!(rotated.shape(), (9, 8));
        assert_eq!(rotated.piece_count(), 1);
        assert_eq!(rotated.get(0, 7), Cell::Red);
        assert_eq!(rotation.quarter_turns(), 1);
    }

    #[test]
    fn test_settle_after_rotation_drops_pieces() {
        // A row along the floor becomes the last column.
        let mut board = Board::new(3, 4);
        for col in 0..4 {
            board.drop_piece(col, Cell::Yellow);
        }
        let (rotated, _) = rotate_and_settle(&board, Rotation::ORIGINAL);
        assert_eq!(rotated.shape(), (4, 3));
        assert_eq!(rotated.column(2), vec![Cell::Yellow; 4]);
        assert!(gravity::is_settled(&rotated));

        // Rotated again it lands in the top row and has to fall back down.
        let (again, _) = rotate_and_settle(&rotated, Rotation::new(1));
        assert_eq!(again.shape(), (3, 4));
        for col in 0..4 {
            assert_eq!(again.get(0, col), Cell::Yellow);
        }
    }

    #[test]
    fn test_rotation_preserves_piece_count() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let rows = rng.random_range(1..10);
            let cols = rng.random_range(1..10);
            let board = random_board(&mut rng, rows, cols);
            let (rotated, _) = rotate_and_settle(&board, Rotation::ORIGINAL);
            assert_eq!(rotated.piece_count(), board.piece_count());
            assert_eq!(rotated.shape(), (cols, rows));
            assert!(gravity::is_settled(&rotated));
            assert!(verify_rotation(&board, &rotated).is_ok());
        }
    }

    #[test]
    fn test_verify_rotation_rejects_wrong_shape() {
        let board = Board::new(8, 9);
        let err = verify_rotation(&board, &Board::new(8, 9)).unwrap_err();
        assert!(matches!(
            err,
            GameError::RotationShapeMismatch {
                expected: (9, 8),
                actual: (8, 9)
            }
        ));
    }

    #[test]
    fn test_verify_rotation_rejects_lost_piece() {
        let mut board = Board::new(2, 3);
        board.place(0, 0, Cell::Red);
        let err = verify_rotation(&board, &Board::new(3, 2)).unwrap_err();
        assert!(matches!(err, GameError::RotationPieceCount { before: 1, after: 0 }));
    }
}
