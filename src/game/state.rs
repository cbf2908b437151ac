use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::board::{Board, DEFAULT_COLS, DEFAULT_ROWS};
use super::gravity;
use super::history::{Move, MoveLog};
use super::player::Player;
use super::rotation::{rotate_and_settle, verify_rotation, Rotation};
use super::win::has_five_in_row;
use crate::ai::{random_valid_column, MoveProvider, MoveRequest};
use crate::error::{GameError, ProviderError};

/// Moves between rotations: three turns per player.
pub const DEFAULT_ROTATION_INTERVAL: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Derive the outcome from the board right after `mover` placed a piece.
    /// The mover's win is checked before the full-board draw.
    pub fn after_move(board: &Board, mover: Player) -> Self {
        if has_five_in_row(board, mover) {
            GameOutcome::Winner(mover)
        } else if board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Player),
    Terminal(GameOutcome),
}

/// Board shape and rotation schedule for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub rows: usize,
    pub cols: usize,
    pub rotation_enabled: bool,
    pub rotation_interval: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            rotation_enabled: true,
            rotation_interval: DEFAULT_ROTATION_INTERVAL,
        }
    }
}

/// Why a provider's suggestion was replaced with a random column.
#[derive(Debug, thiserror::Error)]
pub enum FallbackReason {
    #[error("provider failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("suggested column {suggested} is out of range 1..={cols}")]
    OutOfRange { suggested: usize, cols: usize },

    #[error("suggested column {suggested} is full")]
    ColumnFull { suggested: usize },
}

/// What happened during one turn.
#[derive(Debug)]
pub struct TurnReport {
    /// 1-based turn number
    pub turn: usize,
    pub player: Player,
    /// `(row, col)` of the placed piece; `None` if no column was available
    pub placement: Option<(usize, usize)>,
    pub fallback: Option<FallbackReason>,
    pub rotated: bool,
    pub outcome: GameOutcome,
}

/// Owns the board, rotation state and move log for a single game and runs
/// the turn sequence: suggest, validate, place, check, maybe rotate.
pub struct Game {
    rules: GameRules,
    board: Board,
    rotation: Rotation,
    history: MoveLog,
    turn_index: usize,
    outcome: GameOutcome,
    rng: StdRng,
}

impl Game {
    pub fn new(rules: GameRules) -> Self {
        Self::with_rng(rules, StdRng::from_os_rng())
    }

    /// Deterministic fallback choices, for tests and replays
    pub fn with_seed(rules: GameRules, seed: u64) -> Self {
        Self::with_rng(rules, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rules: GameRules, rng: StdRng) -> Self {
        Game {
            rules,
            board: Board::new(rules.rows, rules.cols),
            rotation: Rotation::ORIGINAL,
            history: MoveLog::new(),
            turn_index: 0,
            outcome: GameOutcome::InProgress,
            rng,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn history(&self) -> &MoveLog {
        &self.history
    }

    /// 0-based index of the turn about to be played
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub fn current_player(&self) -> Player {
        Player::for_turn(self.turn_index)
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn phase(&self) -> Phase {
        if self.is_terminal() {
            Phase::Terminal(self.outcome)
        } else {
            Phase::AwaitingMove(self.current_player())
        }
    }

    /// Moves left, counting the next one, until the board rotates.
    /// `None` when rotation is disabled.
    pub fn moves_until_rotation(&self) -> Option<usize> {
        if !self.rotation_active() {
            return None;
        }
        let interval = self.rules.rotation_interval;
        Some(interval - self.turn_index % interval)
    }

    fn rotation_active(&self) -> bool {
        self.rules.rotation_enabled && self.rules.rotation_interval > 0
    }

    /// Snapshot handed to a move provider for the upcoming turn
    pub fn request(&self) -> MoveRequest<'_> {
        MoveRequest {
            board: &self.board,
            player: self.current_player(),
            turn_number: self.turn_index + 1,
            rotation: self.rotation,
            rotation_interval: self
                .rotation_active()
                .then_some(self.rules.rotation_interval),
            history: self.history.moves(),
        }
    }

    /// Play one turn with a column from `provider`. Invalid or failed
    /// suggestions are replaced by a uniformly random valid column.
    pub fn play_turn(&mut self, provider: &mut dyn MoveProvider) -> Result<TurnReport, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let player = self.current_player();
        let suggestion = provider.suggest_move(&self.request());

        let mut fallback = None;
        let column = match self.validate_suggestion(suggestion) {
            Ok(column) => column,
            Err(reason) => {
                warn!(
                    "{} ({}): {reason}; using a random valid move",
                    provider.name(),
                    player.name()
                );
                fallback = Some(reason);
                match random_valid_column(&self.board, &mut self.rng) {
                    Some(column) => column,
                    None => {
                        info!("no valid moves left, game is a draw");
                        self.outcome = GameOutcome::Draw;
                        return Ok(TurnReport {
                            turn: self.turn_index + 1,
                            player,
                            placement: None,
                            fallback,
                            rotated: false,
                            outcome: self.outcome,
                        });
                    }
                }
            }
        };

        let mut report = self.commit(player, column)?;
        report.fallback = fallback;
        Ok(report)
    }

    /// Play the current player's piece into a 0-based column, without any
    /// fallback. Used for direct human input.
    pub fn apply_move(&mut self, column: usize) -> Result<TurnReport, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.check_column(column)?;
        let player = self.current_player();
        self.commit(player, column)
    }

    fn check_column(&self, column: usize) -> Result<(), GameError> {
        if column >= self.board.cols() {
            return Err(GameError::InvalidColumn {
                column,
                cols: self.board.cols(),
            });
        }
        if !self.board.is_valid_column(column) {
            return Err(GameError::ColumnFull(column));
        }
        Ok(())
    }

    /// Turn a 1-indexed suggestion into a playable 0-based column.
    fn validate_suggestion(
        &self,
        suggestion: Result<usize, ProviderError>,
    ) -> Result<usize, FallbackReason> {
        let suggested = suggestion?;
        let cols = self.board.cols();
        if suggested == 0 || suggested > cols {
            return Err(FallbackReason::OutOfRange { suggested, cols });
        }
        let column = suggested - 1;
        if !self.board.is_valid_column(column) {
            return Err(FallbackReason::ColumnFull { suggested });
        }
        Ok(column)
    }

    fn commit(&mut self, player: Player, column: usize) -> Result<TurnReport, GameError> {
        let row = gravity::landing_row(&self.board, column).ok_or(GameError::ColumnFull(column))?;
        self.board.place(row, column, player.to_cell());

        let turn = self.turn_index + 1;
        self.history.record(Move {
            turn,
            player,
            column,
            rotation: self.rotation,
        });
        debug!("turn {turn}: {} drops into column {}", player.name(), column + 1);

        self.outcome = GameOutcome::after_move(&self.board, player);

        let rotated = !self.is_terminal()
            && self.rotation_active()
            && turn % self.rules.rotation_interval == 0
            && self.rotate();

        self.turn_index += 1;

        Ok(TurnReport {
            turn,
            player,
            placement: Some((row, column)),
            fallback: None,
            rotated,
            outcome: self.outcome,
        })
    }

    /// Rotate clockwise and settle. A result that fails verification is
    /// discarded and the board stays as it was for this cycle.
    fn rotate(&mut self) -> bool {
        let (rotated, rotation) = rotate_and_settle(&self.board, self.rotation);
        match verify_rotation(&self.board, &rotated) {
            Ok(()) => {
                self.board = rotated;
                self.rotation = rotation;
                info!(
                    "board rotated 90° clockwise: now {}x{}, rotation {}",
                    self.board.rows(),
                    self.board.cols(),
                    self.rotation
                );
                true
            }
            Err(err) => {
                error!("{err}; skipping rotation this cycle");
                false
            }
        }
    }
}
