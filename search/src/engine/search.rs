use std::time::{Duration, Instant};

use chess::{Board, ChessMove};
use evaluation::scores::{format_score, NEG_INFINITY, POS_INFINITY};
use evaluation::Score;
use log::{debug, info, warn};
use utils::legal_moves;

use crate::move_ordering::order_moves;
use crate::transposition::Bound;
use crate::MAX_PLY;

use super::pv::format_pv;
use super::Engine;

/// Iterative deepening limits.
///
/// The clock is only checked between completed depths, once `min_depth` is
/// done, so a single iteration can overrun `time_limit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    pub time_limit: Duration,
    pub min_depth: usize,
    pub max_depth: usize,
}

impl SearchLimits {
    /// Searches exactly `depth` plies regardless of time.
    pub fn depth(depth: usize) -> Self {
        Self {
            time_limit: Duration::MAX,
            min_depth: depth,
            max_depth: depth,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveSource {
    Book,
    Search,
    /// Search produced nothing; first legal move instead
    Fallback,
    /// No legal moves
    None,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Option<ChessMove>,
    /// Root score of the last completed depth, side to move's perspective
    pub score: Option<Score>,
    /// Last completed depth
    pub depth: usize,
    pub nodes: u64,
    pub seldepth: usize,
    pub pv: Vec<ChessMove>,
    pub source: MoveSource,
}

impl SearchOutcome {
    fn immediate(best_move: Option<ChessMove>, source: MoveSource) -> Self {
        Self {
            best_move,
            score: None,
            depth: 0,
            nodes: 0,
            seldepth: 0,
            pv: best_move.into_iter().collect(),
            source,
        }
    }
}

impl Engine {
    /// Best move for `board` within roughly `time_limit`, using the configured depths.
    /// `None` only when there are no legal moves.
    pub fn best_move(&mut self, board: &Board, time_limit: Duration) -> Option<ChessMove> {
        let limits = SearchLimits {
            time_limit,
            min_depth: self.config.min_depth.value,
            max_depth: self.config.max_depth.value,
        };
        self.think(board, &limits).best_move
    }

    pub fn best_move_with_depths(
        &mut self,
        board: &Board,
        time_limit: Duration,
        min_depth: usize,
        max_depth: usize,
    ) -> Option<ChessMove> {
        let limits = SearchLimits {
            time_limit,
            min_depth,
            max_depth,
        };
        self.think(board, &limits).best_move
    }

    /// Book lookup, then iterative deepening, then the first-legal-move fallback.
    pub fn think(&mut self, board: &Board, limits: &SearchLimits) -> SearchOutcome {
        let moves = legal_moves(board);
        let Some(&first_legal) = moves.first() else {
            return SearchOutcome::immediate(None, MoveSource::None);
        };

        if let Some(mv) = self.book_move(board) {
            info!("Book move {}", mv);
            return SearchOutcome::immediate(Some(mv), MoveSource::Book);
        }

        self.set_root(board);
        let root_key = board.get_hash();
        let max_depth = limits.max_depth.clamp(1, MAX_PLY - 1);
        let min_depth = limits.min_depth.clamp(1, max_depth);

        let start = Instant::now();
        let mut best: Option<(ChessMove, Score)> = None;
        let mut completed = 0;

        for depth in 1..=max_depth {
            let score = self.negamax(depth, NEG_INFINITY, POS_INFINITY, 0);
            completed = depth;

            if let Some(mv) = self.tt.best_move(root_key).filter(|mv| board.legal(*mv)) {
                best = Some((mv, score));
            }

            debug!(
                "depth {} score {} nodes {} seldepth {} time {}ms hashfull {} pv {}",
                depth,
                format_score(score),
                self.nodes,
                self.seldepth,
                start.elapsed().as_millis(),
                self.tt.hashfull(),
                format_pv(&self.principal_variation(board)),
            );

            if depth >= min_depth && start.elapsed() >= limits.time_limit {
                break;
            }
        }

        let (best_move, score, source) = match best {
            Some((mv, score)) => (mv, Some(score), MoveSource::Search),
            None => {
                warn!("Search found no move, playing {}", first_legal);
                (first_legal, None, MoveSource::Fallback)
            }
        };

        SearchOutcome {
            best_move: Some(best_move),
            score,
            depth: completed,
            nodes: self.nodes,
            seldepth: self.seldepth,
            pv: self.principal_variation(board),
            source,
        }
    }

    /// Fixed-depth, full-window search of `board`. Bypasses the book.
    pub fn search(&mut self, board: &Board, depth: usize) -> Score {
        self.set_root(board);
        self.negamax(depth.min(MAX_PLY - 1), NEG_INFINITY, POS_INFINITY, 0)
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Negamax alpha-beta with a check extension.
    /// Returns a score from the side to move's perspective.
    pub(super) fn negamax(
        &mut self,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
        ply: usize,
    ) -> Score {
        if depth == 0 || ply >= MAX_PLY {
            return self.quiescence(alpha, beta, ply);
        }

        self.nodes += 1;
        self.seldepth = self.seldepth.max(ply);

        let key = self.position.key();

        if let Some(entry) = self.tt.probe(key, ply) {
            if entry.depth >= depth {
                match entry.bound {
                    Bound::Exact => return entry.score,
                    Bound::Lower => alpha = alpha.max(entry.score),
                    Bound::Upper => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return entry.score;
                }
            }
        }

        let alpha_orig = alpha;
        let moves = order_moves(self.position.board());

        // Checkmate or stalemate above the horizon
        if moves.is_empty() {
            let score = self.evaluator.evaluate(&self.position, ply);
            self.tt.store(key, depth, score, Bound::Exact, None, ply);
            return score;
        }

        let mut best_score = NEG_INFINITY;
        let mut best_move = None;

        for mv in moves {
            self.make_move(mv);
            let extension = usize::from(self.position.in_check());
            let score = -self.negamax(depth - 1 + extension, -beta, -alpha, ply + 1);
            self.unmake_move();

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }

            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        let bound = if best_score <= alpha_orig {
            Bound::Upper
        } else if best_score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(key, depth, best_score, bound, best_move, ply);

        best_score
    }
}
