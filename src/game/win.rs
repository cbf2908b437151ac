use super::board::Board;
use super::player::Player;

/// Number of consecutive pieces needed to win
pub const WIN_LENGTH: usize = 5;

/// Scan directions as `(d_row, d_col)`: horizontal, vertical, diagonal ↗,
/// diagonal ↘.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Check whether `player` owns five consecutive cells anywhere on the board.
pub fn has_five_in_row(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// First run of five cells owned by `player`, as `(row, col)` positions.
///
/// Bounds come from the board's current shape, so rotated boards need no
/// special handling.
pub fn winning_line(board: &Board, player: Player) -> Option<[(usize, usize); WIN_LENGTH]> {
    let (rows, cols) = board.shape();
    if rows < WIN_LENGTH && cols < WIN_LENGTH {
        return None;
    }

    let target = player.to_cell();
    let span = (WIN_LENGTH - 1) as isize;

    for (dr, dc) in DIRECTIONS {
        for row in 0..rows as isize {
            let end_row = row + dr * span;
            if end_row < 0 || end_row >= rows as isize {
                continue;
            }
            for col in 0..cols as isize {
                if col + dc * span >= cols as isize {
                    break;
                }
                let owned = (0..WIN_LENGTH as isize)
                    .all(|i| board.try_get(row + dr * i, col + dc * i) == Some(target));
                if owned {
                    let mut line = [(0, 0); WIN_LENGTH];
                    for (i, cell) in line.iter_mut().enumerate() {
                        let i = i as isize;
                        *cell = ((row + dr * i) as usize, (col + dc * i) as usize);
                    }
                    return Some(line);
                }
            }
        }
    }

    None
}
