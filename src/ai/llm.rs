use log::{debug, info};

use super::parse::parse_move;
use super::provider::{MoveProvider, MoveRequest};
use crate::error::ProviderError;
use crate::game::WIN_LENGTH;
use crate::ui::board_to_string;

/// One blocking chat round trip: system prompt and user prompt in, reply
/// text out.
pub trait ChatBackend {
    fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}

/// Move provider that asks a language model for a column.
pub struct LlmProvider<B: ChatBackend> {
    name: String,
    backend: B,
}

impl<B: ChatBackend> LlmProvider<B> {
    pub fn new(name: impl Into<String>, backend: B) -> Self {
        LlmProvider {
            name: name.into(),
            backend,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChatBackend> MoveProvider for LlmProvider<B> {
    fn name(&self) -> &str {
        &self.name
    }

    fn suggest_move(&mut self, request: &MoveRequest<'_>) -> Result<usize, ProviderError> {
        info!("{} is thinking...", self.name);
        let reply = self.backend.complete(SYSTEM_PROMPT, &user_prompt(request))?;
        debug!("{} replied: {reply}", self.name);
        parse_move(&reply)
    }
}

pub const SYSTEM_PROMPT: &str = "You are an expert Connect 5 AI. Analyze the current board state \
     and choose the best move. Respond with a JSON object containing a 'move' field with an \
     integer value from the valid moves provided.";

/// Rules paragraph, worded for the board's rotation schedule
pub fn rules_text(rotation_interval: Option<usize>) -> String {
    let mut rules = String::from(
        "Rules: This is Connect 5 with rotation. Players take turns dropping pieces. \
         A piece always falls downward (gravity pulls down). ",
    );
    match rotation_interval {
        Some(interval) => rules.push_str(&format!(
            "Every {interval} moves the board rotates 90 degrees clockwise, \
             and pieces fall to realign with gravity. "
        )),
        None => rules.push_str("The board never rotates in this game. "),
    }
    rules.push_str(&format!(
        "The goal is to connect {WIN_LENGTH} of your pieces in a row horizontally, \
         vertically, or diagonally."
    ));
    rules
}

/// Full user prompt for one move
pub fn user_prompt(request: &MoveRequest<'_>) -> String {
    let mut prompt = rules_text(request.rotation_interval);
    prompt.push_str("\n\n");

    prompt.push_str(&format!(
        "Current board state (Turn {}, Rotation: {}):\n{}\n\n",
        request.turn_number,
        request.rotation,
        board_to_string(request.board, request.rotation)
    ));

    if request.rotates_after_this_move() {
        prompt.push_str("Board will rotate after this move!\n\n");
    }

    if !request.history.is_empty() {
        prompt.push_str("Move history (format: turn_number-player-column):\n");
        let lines: Vec<String> = request.history.iter().map(|m| m.summary()).collect();
        prompt.push_str(&lines.join("\n"));
        prompt.push_str("\n\n");
    }

    prompt.push_str(&format!("Valid moves: {:?}\n\n", request.valid_moves()));
    prompt.push_str(&format!(
        "You are playing as {}. Analyze the board and choose the best valid column to drop \
         your piece. Respond with a JSON object containing a 'move' field with an integer \
         value representing your chosen column number.",
        request.player.label()
    ));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::game::{Board, Cell, Move, Player, Rotation};

    /// Backend that returns a canned reply and remembers the prompts.
    struct Canned {
        reply: Result<String, ()>,
        seen: RefCell<Vec<(String, String)>>,
    }

    impl Canned {
        fn ok(reply: &str) -> Self {
            Canned {
                reply: Ok(reply.to_string()),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Canned {
                reply: Err(()),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl ChatBackend for Canned {
        fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
            self.seen
                .borrow_mut()
                .push((system.to_string(), user.to_string()));
            self.reply.clone().map_err(|_| ProviderError::Timeout)
        }
    }

    fn history() -> Vec<Move> {
        vec![
            Move {
                turn: 1,
                player: Player::Red,
                column: 4,
                rotation: Rotation::ORIGINAL,
            },
            Move {
                turn: 2,
                player: Player::Yellow,
                column: 0,
                rotation: Rotation::ORIGINAL,
            },
        ]
    }

    fn board() -> Board {
        let mut board = Board::new(8, 9);
        board.drop_piece(4, Cell::Red);
        board.drop_piece(0, Cell::Yellow);
        board
    }

    #[test]
    fn test_prompt_contents() {
        let board = board();
        let history = history();
        let request = MoveRequest {
            board: &board,
            player: Player::Red,
            turn_number: 3,
            rotation: Rotation::ORIGINAL,
            rotation_interval: Some(6),
            history: &history,
        };
        let prompt = user_prompt(&request);

        assert!(prompt.contains("Every 6 moves the board rotates 90 degrees clockwise"));
        assert!(prompt.contains("Current board state (Turn 3, Rotation: 0):"));
        assert!(prompt.contains("O . . . X . . . ."));
        assert!(prompt.contains("Move history (format: turn_number-player-column):\n1-1-5\n2-2-1"));
        assert!(prompt.contains("Valid moves: [1, 2, 3, 4, 5, 6, 7, 8, 9]"));
        assert!(prompt.contains("You are playing as Player 1 (X)."));
        assert!(!prompt.contains("Board will rotate after this move!"));
    }

    #[test]
    fn test_prompt_warns_before_rotation() {
        let board = Board::new(8, 9);
        let request = MoveRequest {
            board: &board,
            player: Player::Yellow,
            turn_number: 6,
            rotation: Rotation::new(1),
            rotation_interval: Some(6),
            history: &[],
        };
        let prompt = user_prompt(&request);
        assert!(prompt.contains("Board will rotate after this move!"));
        assert!(prompt.contains("Player 2 (O)"));
        assert!(!prompt.contains("Move history"));
    }

    #[test]
    fn test_prompt_without_rotation() {
        assert!(rules_text(None).contains("never rotates"));
    }

    #[test]
    fn test_llm_provider_parses_reply() {
        let board = board();
        let mut provider = LlmProvider::new("Model", Canned::ok("Sure! {\"move\": 5}"));
        let request = MoveRequest {
            board: &board,
            player: Player::Red,
            turn_number: 3,
            rotation: Rotation::ORIGINAL,
            rotation_interval: Some(6),
            history: &[],
        };

        assert_eq!(provider.suggest_move(&request).unwrap(), 5);
        assert_eq!(provider.name(), "Model");

        let seen = provider.backend().seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, SYSTEM_PROMPT);
        assert!(seen[0].1.contains("Turn 3"));
    }

    #[test]
    fn test_llm_provider_propagates_failures() {
        let board = Board::new(8, 9);
        let request = MoveRequest {
            board: &board,
            player: Player::Red,
            turn_number: 1,
            rotation: Rotation::ORIGINAL,
            rotation_interval: None,
            history: &[],
        };

        let mut timeout = LlmProvider::new("Slow", Canned::failing());
        assert!(matches!(
            timeout.suggest_move(&request),
            Err(ProviderError::Timeout)
        ));

        let mut chatty = LlmProvider::new("Chatty", Canned::ok("column four, definitely"));
        assert!(matches!(
            chatty.suggest_move(&request),
            Err(ProviderError::Malformed(_))
        ));
    }
}
