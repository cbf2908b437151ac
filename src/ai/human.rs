use std::io::{BufRead, Write};

use super::provider::{MoveProvider, MoveRequest};
use crate::error::ProviderError;

/// Reads a 1-indexed column per turn from a line-oriented input.
pub struct HumanProvider<R: BufRead, W: Write> {
    name: String,
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> HumanProvider<R, W> {
    pub fn new(name: impl Into<String>, input: R, prompt: W) -> Self {
        HumanProvider {
            name: name.into(),
            input,
            prompt,
        }
    }
}

impl<R: BufRead, W: Write> MoveProvider for HumanProvider<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    /// Keeps asking until the line names a playable column. Only a closed
    /// input ends the turn without one.
    fn suggest_move(&mut self, request: &MoveRequest<'_>) -> Result<usize, ProviderError> {
        let valid = request.valid_moves();
        loop {
            write!(
                self.prompt,
                "{} ({}), choose a column {:?}: ",
                self.name,
                request.player.label(),
                valid
            )?;
            self.prompt.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ProviderError::InputClosed);
            }
            match line.trim().parse::<usize>() {
                Ok(column) if valid.contains(&column) => return Ok(column),
                _ => writeln!(self.prompt, "Invalid move. Please try again.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Game, GameRules, Player, Rotation};
    use std::io::Cursor;

    fn request(board: &Board) -> MoveRequest<'_> {
        MoveRequest {
            board,
            player: Player::Red,
            turn_number: 1,
            rotation: Rotation::ORIGINAL,
            rotation_interval: Some(6),
            history: &[],
        }
    }

    #[test]
    fn test_reads_columns_line_by_line() {
        let board = Board::new(1, 3);
        let mut human = HumanProvider::new("Alice", Cursor::new("2\n 3 \n"), Vec::new());
        assert_eq!(human.suggest_move(&request(&board)).unwrap(), 2);
        assert_eq!(human.suggest_move(&request(&board)).unwrap(), 3);
        assert!(matches!(
            human.suggest_move(&request(&board)),
            Err(ProviderError::InputClosed)
        ));
    }

    #[test]
    fn test_prompt_lists_valid_moves() {
        let board = Board::new(1, 3);
        let mut out = Vec::new();
        {
            let mut human = HumanProvider::new("Alice", Cursor::new("1\n"), &mut out);
            human.suggest_move(&request(&board)).unwrap();
        }
        let prompt = String::from_utf8(out).unwrap();
        assert_eq!(prompt, "Alice (Player 1 (X)), choose a column [1, 2, 3]: ");
    }

    #[test]
    fn test_typo_asks_again() {
        let board = Board::new(1, 9);
        let mut out = Vec::new();
        {
            let mut human = HumanProvider::new("Bob", Cursor::new("5o\n5\n"), &mut out);
            assert_eq!(human.suggest_move(&request(&board)).unwrap(), 5);
        }
        let prompt = String::from_utf8(out).unwrap();
        assert_eq!(prompt.matches("choose a column").count(), 2);
        assert!(prompt.contains("Invalid move. Please try again."));
    }

    #[test]
    fn test_unplayable_columns_ask_again() {
        let mut board = Board::new(1, 3);
        board.place(0, 1, crate::game::Cell::Red);
        let mut human = HumanProvider::new("Bob", Cursor::new("0\n4\n2\n3\n"), Vec::new());
        assert_eq!(human.suggest_move(&request(&board)).unwrap(), 3);
    }

    #[test]
    fn test_eof_after_bad_input_is_input_closed() {
        let board = Board::new(1, 3);
        let mut human = HumanProvider::new("Bob", Cursor::new("left\n"), Vec::new());
        assert!(matches!(
            human.suggest_move(&request(&board)),
            Err(ProviderError::InputClosed)
        ));
    }

    #[test]
    fn test_typo_does_not_trigger_fallback() {
        let mut game = Game::with_seed(GameRules::default(), 11);
        let mut human = HumanProvider::new("Bob", Cursor::new("5o\n5\n"), Vec::new());
        let report = game.play_turn(&mut human).unwrap();
        assert!(report.fallback.is_none());
        assert_eq!(report.placement, Some((0, 4)));
    }
}
