use chess::{Board, ChessMove};
use evaluation::Evaluator;
use utils::Position;

use crate::book::{select_book_move, OpeningBook};
use crate::transposition::TranspositionTable;
use crate::EngineConfig;

mod pv;
mod quiescence;
mod search;

pub use search::{MoveSource, SearchLimits, SearchOutcome};


pub struct Engine {
    /// Configuration for the engine
    config: EngineConfig,

    /// Static evaluation backend
    evaluator: Box<dyn Evaluator>,
    /// Prepared moves consulted before searching
    book: Option<Box<dyn OpeningBook>>,

    /// Position on the current search path
    position: Position,
    /// Persists across searches until `new_game`
    tt: TranspositionTable,

    /// Number of nodes searched
    nodes: u64,
    /// Deepest ply reached, including quiescence
    seldepth: usize,
}

impl Engine {
    pub fn new(config: &EngineConfig, evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            config: config.clone(),
            evaluator,
            book: None,
            position: Position::default(),
            tt: TranspositionTable::new(config.hash_size.value),
            nodes: 0,
            seldepth: 0,
        }
    }

    pub fn configure(&mut self, config: &EngineConfig) {
        if config.hash_size.value != self.config.hash_size.value {
            self.tt = TranspositionTable::new(config.hash_size.value);
        }
        self.config = config.clone();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn name(&self) -> String {
        format!("Negamax ({})", self.evaluator.name())
    }

    pub fn set_book(&mut self, book: Option<Box<dyn OpeningBook>>) {
        self.book = book;
    }

    pub fn new_game(&mut self) {
        self.tt.clear();
    }

    /// Transposition table fill rate in permille.
    pub fn hashfull(&self) -> u16 {
        self.tt.hashfull()
    }

    fn book_move(&self, board: &Board) -> Option<ChessMove> {
        if !self.config.own_book.value {
            return None;
        }
        let book = self.book.as_ref()?;
        select_book_move(board, &book.lookup(board))
    }

    /// Starts a new search path at `board`.
    fn set_root(&mut self, board: &Board) {
        self.position.reset(*board);
        self.evaluator.refresh(board);
        self.nodes = 0;
        self.seldepth = 0;
    }

    // Board and evaluator must move in lockstep
    #[inline(always)]
    fn make_move(&mut self, mv: ChessMove) {
        let before = *self.position.board();
        self.position.make_move(mv);
        self.evaluator.on_make(&before, mv, self.position.board());
    }

    #[inline(always)]
    fn unmake_move(&mut self) {
        self.position.unmake_move();
        self.evaluator.on_unmake();
    }
}
