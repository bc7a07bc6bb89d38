use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use ahash::AHashMap;
use chess::{Board, ChessMove};
use log::info;
use thiserror::Error;
use utils::parse_uci_move;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("failed to read book: {0}")]
    Io(#[from] io::Error),

    #[error("book line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookEntry {
    pub mv: ChessMove,
    pub weight: u32,
}

/// Source of prepared moves consulted before searching.
pub trait OpeningBook: Send {
    /// Candidate moves for `board`, possibly none.
    fn lookup(&self, board: &Board) -> Vec<BookEntry>;
}

/// Picks the heaviest legal candidate. On equal weights the first listed wins.
pub fn select_book_move(board: &Board, entries: &[BookEntry]) -> Option<ChessMove> {
    let mut best: Option<&BookEntry> = None;

    for entry in entries.iter().filter(|e| board.legal(e.mv)) {
        if best.map_or(true, |b| entry.weight > b.weight) {
            best = Some(entry);
        }
    }

    best.map(|entry| entry.mv)
}

/// Book held in memory, keyed by position hash.
///
/// Text format, one entry per line: `FEN;uci-move;weight`.
/// Blank lines and lines starting with `#` are ignored.
#[derive(Default)]
pub struct MemoryBook {
    positions: AHashMap<u64, Vec<BookEntry>>,
}

impl MemoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, board: &Board, mv: ChessMove, weight: u32) {
        self.positions
            .entry(board.get_hash())
            .or_default()
            .push(BookEntry { mv, weight });
    }

    /// Number of positions in the book.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BookError> {
        let path = path.as_ref();
        let book = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!("Loaded {} book positions from {}", book.len(), path.display());
        Ok(book)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, BookError> {
        let mut book = Self::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parse_error = |reason: &str| BookError::Parse {
                line: idx + 1,
                reason: reason.to_string(),
            };

            let mut fields = line.split(';').map(str::trim);
            let (Some(fen), Some(mv), Some(weight), None) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            else {
                return Err(parse_error("expected FEN;move;weight"));
            };

            let board = Board::from_str(fen).map_err(|_| parse_error("invalid FEN"))?;
            let mv = parse_uci_move(&board, mv)
                .ok_or_else(|| parse_error("malformed or illegal move"))?;
            let weight = weight
                .parse::<u32>()
                .map_err(|e| parse_error(&format!("invalid weight: {}", e)))?;

            book.insert(&board, mv, weight);
        }

        Ok(book)
    }
}

impl OpeningBook for MemoryBook {
    fn lookup(&self, board: &Board) -> Vec<BookEntry> {
        self.positions
            .get(&board.get_hash())
            .cloned()
            .unwrap_or_default()
    }
}
