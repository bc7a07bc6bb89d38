use std::str::FromStr;

use chess::{Board, ChessMove};
use evaluation::scores::format_score;
use search::{Engine, MoveSource, SearchLimits};
use utils::{is_game_over, parse_uci_move};

/// The position to start from: `fen` (or the start position) with `moves` played.
pub fn starting_board(fen: Option<&str>, moves: &[String]) -> Result<Board, String> {
    let mut board = match fen {
        Some(fen) => Board::from_str(fen).map_err(|_| format!("Invalid FEN: {}", fen))?,
        None => Board::default(),
    };

    for text in moves {
        let mv = parse_uci_move(&board, text)
            .ok_or_else(|| format!("Illegal move '{}' in {}", text, board))?;
        board = board.make_move_new(mv);
    }

    Ok(board)
}

/// Prints the engine's move for `board`, or `(none)` in a finished game.
pub fn one_shot(engine: &mut Engine, board: &Board, limits: &SearchLimits) -> Option<ChessMove> {
    let outcome = engine.think(board, limits);
    match outcome.best_move {
        Some(mv) => println!("bestmove {}", mv),
        None => println!("bestmove (none)"),
    }
    outcome.best_move
}

/// Lets the engine play both sides for up to `plies` half-moves.
/// The transposition table carries over from one move to the next.
pub fn self_play(
    engine: &mut Engine,
    mut board: Board,
    plies: usize,
    limits: &SearchLimits,
) -> Vec<ChessMove> {
    let mut played = Vec::with_capacity(plies);

    for ply in 1..=plies {
        if is_game_over(&board) {
            break;
        }

        let outcome = engine.think(&board, limits);
        let Some(mv) = outcome.best_move else {
            break;
        };

        let score = match (outcome.source, outcome.score) {
            (MoveSource::Book, _) => "book".to_string(),
            (_, Some(score)) => format_score(score),
            (_, None) => "-".to_string(),
        };
        println!("{:>3}. {} ({}, depth {})", ply, mv, score, outcome.depth);

        played.push(mv);
        board = board.make_move_new(mv);
    }

    played
}

#[cfg(test)]
mod tests {
    use super::*;
    use search::EngineConfig;

    fn engine() -> Engine {
        let mut config = EngineConfig::default();
        config.update("Hash", "4").unwrap();
        Engine::new(&config, Box::new(hce::Evaluator::default()))
    }

    #[test]
    fn test_starting_board_applies_moves() {
        let moves = vec!["e2e4".to_string(), "c7c5".to_string()];
        let board = starting_board(None, &moves).unwrap();
        assert_eq!(
            board,
            Board::from_str("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2").unwrap()
        );
    }

    #[test]
    fn test_starting_board_rejects_bad_input() {
        assert!(starting_board(Some("garbage"), &[]).is_err());
        assert!(starting_board(None, &["e2e5".to_string()]).is_err());
    }

    #[test]
    fn test_self_play_stops_at_game_over() {
        // White mates on the first move
        let board = Board::from_str("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let played = self_play(&mut engine(), board, 10, &SearchLimits::depth(2));
        assert_eq!(played.len(), 1);
    }

    #[test]
    fn test_self_play_plays_legal_moves() {
        let mut board = Board::default();
        let played = self_play(&mut engine(), board, 4, &SearchLimits::depth(2));
        assert_eq!(played.len(), 4);
        for mv in played {
            assert!(board.legal(mv));
            board = board.make_move_new(mv);
        }
    }
}
