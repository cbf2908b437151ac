use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::provider::{MoveProvider, MoveRequest};
use crate::error::ProviderError;
use crate::game::Board;

/// Uniformly random valid column (0-based), or `None` if every column is full.
pub fn random_valid_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.valid_columns().choose(rng).copied()
}

/// A provider that picks uniformly among the valid columns.
pub struct RandomProvider {
    rng: StdRng,
}

impl RandomProvider {
    pub fn new() -> Self {
        RandomProvider {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomProvider {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveProvider for RandomProvider {
    fn name(&self) -> &str {
        "Random"
    }

    fn suggest_move(&mut self, request: &MoveRequest<'_>) -> Result<usize, ProviderError> {
        random_valid_column(request.board, &mut self.rng)
            .map(|col| col + 1)
            .ok_or_else(|| ProviderError::Malformed("no valid columns".into()))
    }
}
