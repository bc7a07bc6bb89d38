use std::mem::size_of;

use chess::ChessMove;
use evaluation::scores::MATE_SCORE_BOUND;
use evaluation::Score;

/// Indicates whether the stored value is exact or a bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Bound {
    /// True minimax value (alpha < value < beta)
    #[default]
    Exact,
    /// Value >= beta (beta cutoff)
    Lower,
    /// Value <= alpha (all moves failed low)
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    /// Full Zobrist key for verification
    pub key: u64,
    /// Remaining depth that produced this result
    pub depth: usize,
    /// Score, with mate scores stored as distance from this node
    pub score: Score,
    pub bound: Bound,
    pub best_move: Option<ChessMove>,
}

const MIN_SLOTS: usize = 1024;

/// Fixed-size hash table of search results.
///
/// One entry per slot, indexed by `key % slots`. Every store overwrites its
/// slot, so the most recent result for a key always wins and colliding
/// keys evict each other.
///
/// <https://www.chessprogramming.org/Transposition_Table>
pub struct TranspositionTable {
    slots: Vec<Option<TTEntry>>,
}

impl TranspositionTable {
    /// Creates a new TT with the given size in megabytes.
    pub fn new(mb: usize) -> Self {
        let bytes = mb.saturating_mul(1024 * 1024);
        let slot_size = size_of::<Option<TTEntry>>().max(1);
        let slots = (bytes / slot_size).max(MIN_SLOTS);

        Self {
            slots: vec![None; slots],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Returns hash table fill rate in permille (0-1000).
    ///
    /// Samples the first 1000 slots rather than scanning the whole table.
    pub fn hashfull(&self) -> u16 {
        const MAX_SAMPLE: usize = 1000;

        let sample = &self.slots[..self.slots.len().min(MAX_SAMPLE)];
        let filled = sample.iter().filter(|slot| slot.is_some()).count();

        ((filled * 1000) / sample.len()) as u16
    }

    #[inline(always)]
    fn index(&self, key: u64) -> usize {
        (key % self.slots.len() as u64) as usize
    }

    /// Raw entry for `key`, if its slot holds that key.
    #[inline(always)]
    pub fn get(&self, key: u64) -> Option<&TTEntry> {
        self.slots[self.index(key)]
            .as_ref()
            .filter(|entry| entry.key == key)
    }

    /// Writes `entry` into its slot, replacing whatever was there.
    #[inline(always)]
    pub fn put(&mut self, entry: TTEntry) {
        let idx = self.index(entry.key);
        self.slots[idx] = Some(entry);
    }

    /// Looks up `key` and converts a stored mate score to be relative to the root,
    /// for a node `ply` half-moves from it.
    #[inline(always)]
    pub fn probe(&self, key: u64, ply: usize) -> Option<TTEntry> {
        let mut entry = *self.get(key)?;
        entry.score = score_from_tt(entry.score, ply);
        Some(entry)
    }

    /// Stores a search result for a node `ply` half-moves from the root.
    #[inline(always)]
    pub fn store(
        &mut self,
        key: u64,
        depth: usize,
        score: Score,
        bound: Bound,
        best_move: Option<ChessMove>,
        ply: usize,
    ) {
        self.put(TTEntry {
            key,
            depth,
            score: score_to_tt(score, ply),
            bound,
            best_move,
        });
    }

    #[inline(always)]
    pub fn best_move(&self, key: u64) -> Option<ChessMove> {
        self.get(key).and_then(|entry| entry.best_move)
    }
}

// Store mate scores relative to the node so they remain valid from different plies
#[inline(always)]
fn score_to_tt(score: Score, ply: usize) -> Score {
    if score >= MATE_SCORE_BOUND {
        score + ply as Score
    } else if score <= -MATE_SCORE_BOUND {
        score - ply as Score
    } else {
        score
    }
}

#[inline(always)]
fn score_from_tt(score: Score, ply: usize) -> Score {
    if score >= MATE_SCORE_BOUND {
        score - ply as Score
    } else if score <= -MATE_SCORE_BOUND {
        score + ply as Score
    } else {
        score
    }
}
