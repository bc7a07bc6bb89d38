// Score bounds and special values for alpha-beta search.

/// Centipawns from the perspective of the side to move.
pub type Score = i32;

/// Sentinel bound, strictly outside every reachable score.
pub const POS_INFINITY: Score = 1_000_000;
pub const NEG_INFINITY: Score = -POS_INFINITY;

/// Base value for checkmate. A mate `ply` half-moves from the root scores
/// `MATE_VALUE - ply`, so faster mates compare higher.
pub const MATE_VALUE: Score = 100_000;

/// Scores at or beyond this magnitude encode a forced mate.
pub const MATE_SCORE_BOUND: Score = MATE_VALUE - 1_000;

/// Largest magnitude a static (non-terminal) evaluation may take.
pub const MAX_EVAL: Score = 10_000;

#[inline(always)]
pub fn is_mate_score(score: Score) -> bool {
    score.abs() >= MATE_SCORE_BOUND && score.abs() <= MATE_VALUE
}

/// Number of moves (not plies) until mate, positive when the side to move mates.
pub fn mate_in(score: Score) -> i32 {
    let plies = (MATE_VALUE - score.abs()).max(0);
    let moves = (plies + 1) / 2;
    if score > 0 {
        moves
    } else {
        -moves
    }
}

/// Formats a score the way engines report it: `cp 35` or `mate 3`.
pub fn format_score(score: Score) -> String {
    if is_mate_score(score) {
        format!("mate {}", mate_in(score))
    } else {
        format!("cp {}", score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mate_band_is_outside_eval_range() {
        assert!(MAX_EVAL < MATE_SCORE_BOUND);
        assert!(MATE_VALUE < POS_INFINITY);
        assert_eq!(-NEG_INFINITY, POS_INFINITY);
    }

    #[test]
    fn test_mate_in_one() {
        assert_eq!(mate_in(MATE_VALUE - 1), 1);
        assert_eq!(mate_in(-(MATE_VALUE - 2)), -1);
    }

    #[test]
    fn test_mate_in_two() {
        // We move, they move, we mate
        assert_eq!(mate_in(MATE_VALUE - 3), 2);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(35), "cp 35");
        assert_eq!(format_score(-120), "cp -120");
        assert_eq!(format_score(MATE_VALUE - 5), "mate 3");
        assert!(!is_mate_score(MAX_EVAL));
    }
}
