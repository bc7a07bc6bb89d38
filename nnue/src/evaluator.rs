use std::path::Path;

use chess::{Board, ChessMove};
use evaluation::{terminal_score, Score};
use utils::Position;

use crate::error::NnueError;
use crate::network::{Accumulator, Network};

/// Neural network evaluator kept in sync with the search through the
/// `refresh`/`on_make`/`on_unmake` hooks.
pub struct Evaluator {
    network: Network,
    accumulator: Accumulator,
}

impl Evaluator {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            accumulator: Accumulator::new(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, NnueError> {
        Ok(Self::new(Network::load(path)?))
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }
}

impl evaluation::Evaluator for Evaluator {
    fn name(&self) -> String {
        "NNUE".to_string()
    }

    #[inline(always)]
    fn evaluate(&mut self, position: &Position, ply: usize) -> Score {
        let board = position.board();
        if let Some(score) = terminal_score(board, ply) {
            return score;
        }

        debug_assert_eq!(
            self.accumulator.state().side_to_move(),
            board.side_to_move(),
            "accumulator out of sync with the position"
        );
        self.network.forward(&self.accumulator)
    }

    fn refresh(&mut self, board: &Board) {
        self.accumulator.reset(&self.network, board);
    }

    #[inline(always)]
    fn on_make(&mut self, before: &Board, mv: ChessMove, after: &Board) {
        self.accumulator.make_move(&self.network, before, mv, after);
    }

    #[inline(always)]
    fn on_unmake(&mut self) {
        self.accumulator.unmake();
    }
}
