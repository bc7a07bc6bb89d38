use evaluation::scores::MAX_EVAL;
use evaluation::Score;

use super::accumulator::Accumulator;
use super::model::Network;
use super::{H2, SCALE};

impl Network {
    /// Centipawn value of the accumulated position for the side to move.
    ///
    /// `relu(acc) -> W2 + B2 -> relu -> W3 + B3`, divided by `SCALE`
    /// (truncating toward zero) and clamped to `MAX_EVAL`.
    pub fn forward(&self, accumulator: &Accumulator) -> Score {
        let mut hidden = [0i64; H2];
        for (h, &b) in hidden.iter_mut().zip(self.b2.iter()) {
            *h = b as i64;
        }

        for (i, &a) in accumulator.activations(self).iter().enumerate() {
            if a <= 0 {
                continue;
            }
            let row = &self.w2[i * H2..(i + 1) * H2];
            for (h, &w) in hidden.iter_mut().zip(row) {
                *h += a as i64 * w as i64;
            }
        }

        let mut output = self.b3 as i64;
        for (&h, &w) in hidden.iter().zip(self.w3.iter()) {
            output += h.max(0) * w as i64;
        }

        (output / SCALE).clamp(-(MAX_EVAL as i64), MAX_EVAL as i64) as Score
    }
}
