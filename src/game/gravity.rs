//! Gravity always pulls toward row 0. Rotation changes which edge of the
//! original board is "down" for display, never the direction pieces fall.

use super::board::{Board, Cell};

/// Lowest empty row in `col`, or `None` when the column is full.
pub fn landing_row(board: &Board, col: usize) -> Option<usize> {
    (0..board.rows()).find(|&row| board.get(row, col).is_empty())
}

/// Compact a column's pieces toward row 0, keeping their relative order and
/// padding the rest with `Empty`.
pub fn settle_column(column: &[Cell]) -> Vec<Cell> {
    let mut settled: Vec<Cell> = column.iter().copied().filter(|c| !c.is_empty()).collect();
    settled.resize(column.len(), Cell::Empty);
    settled
}

/// Settle every column of the board independently.
pub fn settle(board: &mut Board) {
    for col in 0..board.cols() {
        let settled = settle_column(&board.column(col));
        board.set_column(col, &settled);
    }
}

/// True when no column has an empty cell below an occupied one.
pub fn is_settled(board: &Board) -> bool {
    (0..board.cols()).all(|col| {
        let column = board.column(col);
        column.windows(2).all(|pair| !(pair[0].is_empty() && !pair[1].is_empty()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_landing_row_empty_column() {
        let board = Board::new(8, 9);
        assert_eq!(landing_row(&board, 0), Some(0));
    }

    #[test]
    fn test_landing_row_full_column() {
        let mut board = Board::new(3, 2);
        for _ in 0..3 {
            board.drop_piece(1, Cell::Red);
        }
        assert_eq!(landing_row(&board, 1), None);
        assert_eq!(landing_row(&board, 0), Some(0));
    }

    #[test]
    fn test_landing_row_matches_lowest_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut board = Board::new(6, 5);
            for col in 0..5 {
                let height = rng.random_range(0..=6);
                for _ in 0..height {
                    board.drop_piece(col, Cell::Yellow);
                }
                let expected = (height < 6).then_some(height);
                assert_eq!(landing_row(&board, col), expected);
            }
        }
    }

    #[test]
    fn test_settle_column_preserves_order() {
        let column = [Cell::Empty, Cell::Red, Cell::Empty, Cell::Yellow, Cell::Red];
        assert_eq!(
            settle_column(&column),
            vec![Cell::Red, Cell::Yellow, Cell::Red, Cell::Empty, Cell::Empty]
        );
    }

    #[test]
    fn test_settle_column_all_empty() {
        let column = [Cell::Empty; 4];
        assert_eq!(settle_column(&column), vec![Cell::Empty; 4]);
    }

    #[test]
    fn test_settle_board() {
        let mut board = Board::from_rows(&[&[0, 1], &[2, 0], &[0, 2]]);
        assert!(!is_settled(&board));
        settle(&mut board);
        assert!(is_settled(&board));
        assert_eq!(board.column(0), vec![Cell::Yellow, Cell::Empty, Cell::Empty]);
        assert_eq!(board.column(1), vec![Cell::Red, Cell::Yellow, Cell::Empty]);
    }
}
