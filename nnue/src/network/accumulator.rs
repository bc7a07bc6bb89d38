use chess::{Board, ChessMove, Color, Piece, Square, ALL_PIECES};
use utils::captured_piece;

use crate::encoding::feature_index;

use super::model::Network;
use super::H1;

/// First-layer sums for one position.
///
/// `sum` holds the white pieces' weight rows minus the black pieces' rows,
/// without the bias. The side to move reads it as is (white) or negated
/// (black), so a single array serves both perspectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccumulatorState {
    sum: [i32; H1],
    side_to_move: Color,
}

impl AccumulatorState {
    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
}

impl Default for AccumulatorState {
    fn default() -> Self {
        Self {
            sum: [0; H1],
            side_to_move: Color::White,
        }
    }
}

/// The stateful first layer of the network.
///
/// Instead of summing every active feature on each evaluation, moves add
/// and subtract the weight rows of the pieces they touch. Each update
/// pushes a snapshot so `unmake` restores the previous state exactly.
#[derive(Default)]
pub struct Accumulator {
    state: AccumulatorState,
    stack: Vec<AccumulatorState>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            state: AccumulatorState::default(),
            stack: Vec::with_capacity(128),
        }
    }

    #[inline(always)]
    pub fn state(&self) -> &AccumulatorState {
        &self.state
    }

    /// Number of snapshots waiting to be restored.
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Rebuilds the sums from scratch and drops the undo stack.
    pub fn reset(&mut self, network: &Network, board: &Board) {
        self.stack.clear();
        self.refresh(network, board);
    }

    /// Rebuilds the sums from scratch, keeping the undo stack.
    pub fn refresh(&mut self, network: &Network, board: &Board) {
        self.state = compute(network, board);
    }

    /// Applies `mv`, played from `before` and resulting in `after`.
    pub fn make_move(&mut self, network: &Network, before: &Board, mv: ChessMove, after: &Board) {
        self.stack.push(self.state);

        let mover = before.side_to_move();
        let source = mv.get_source();
        let piece = match before.piece_on(source) {
            // A king move changes every feature of that color
            Some(Piece::King) | None => {
                self.refresh(network, after);
                return;
            }
            Some(piece) => piece,
        };

        let own_king = before.king_square(mover);
        remove(&mut self.state.sum, network, piece, source, mover, own_king);

        if let Some((captured, square)) = captured_piece(before, mv) {
            let their_king = before.king_square(!mover);
            remove(&mut self.state.sum, network, captured, square, !mover, their_king);
        }

        let placed = mv.get_promotion().unwrap_or(piece);
        add(&mut self.state.sum, network, placed, mv.get_dest(), mover, own_king);

        self.state.side_to_move = after.side_to_move();
    }

    /// Restores the state from before the last `make_move`.
    /// Returns false if there was nothing to restore.
    pub fn unmake(&mut self) -> bool {
        match self.stack.pop() {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    /// First-layer pre-activations from the side to move's perspective.
    #[inline(always)]
    pub(crate) fn activations(&self, network: &Network) -> [i32; H1] {
        let sign = color_sign(self.state.side_to_move);
        let mut out = [0i32; H1];
        for ((o, &bias), &sum) in out.iter_mut().zip(network.b1.iter()).zip(self.state.sum.iter()) {
            *o = bias as i32 + sign * sum;
        }
        out
    }
}

fn compute(network: &Network, board: &Board) -> AccumulatorState {
    let mut sum = [0i32; H1];

    for color in [Color::White, Color::Black] {
        let king = board.king_square(color);
        let ours = board.color_combined(color);
        for piece in ALL_PIECES {
            for square in board.pieces(piece) & ours {
                add(&mut sum, network, piece, square, color, king);
            }
        }
    }

    AccumulatorState {
        sum,
        side_to_move: board.side_to_move(),
    }
}

#[inline(always)]
fn color_sign(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

#[inline(always)]
fn add(
    sum: &mut [i32; H1],
    network: &Network,
    piece: Piece,
    square: Square,
    color: Color,
    king: Square,
) {
    apply(sum, network, feature_index(piece, square, color, king), color_sign(color));
}

#[inline(always)]
fn remove(
    sum: &mut [i32; H1],
    network: &Network,
    piece: Piece,
    square: Square,
    color: Color,
    king: Square,
) {
    apply(sum, network, feature_index(piece, square, color, king), -color_sign(color));
}

#[inline(always)]
fn apply(sum: &mut [i32; H1], network: &Network, feature: usize, sign: i32) {
    for (s, &w) in sum.iter_mut().zip(network.feature_weights(feature)) {
        *s += sign * w as i32;
    }
}
