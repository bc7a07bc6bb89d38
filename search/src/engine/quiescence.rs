use evaluation::Score;

use crate::move_ordering::tactical_moves;
use crate::MAX_PLY;

use super::Engine;

impl Engine {
    /// Fail-hard search over captures, promotions and checks.
    /// Ends when no tactical move improves on standing pat.
    pub(super) fn quiescence(&mut self, mut alpha: Score, beta: Score, ply: usize) -> Score {
        self.nodes += 1;
        self.seldepth = self.seldepth.max(ply);

        let stand_pat = self.evaluator.evaluate(&self.position, ply);
        if stand_pat >= beta {
            return beta;
        }
        alpha = alpha.max(stand_pat);

        if ply >= MAX_PLY {
            return alpha;
        }

        for mv in tactical_moves(self.position.board()) {
            self.make_move(mv);
            let score = -self.quiescence(-beta, -alpha, ply + 1);
            self.unmake_move();

            alpha = alpha.max(score);
            if alpha >= beta {
                return beta;
            }
        }

        alpha
    }
}
