//! Brick sequencer - weighted, streak-limited piece generation
//!
//! Produces the stream of future pieces under the catalog's weighted
//! distribution, with one constraint: the I piece can never be generated a
//! third consecutive time. Pending pieces live in a fixed-capacity ring
//! buffer so callers can peek ahead before consuming.
//!
//! The randomness source is injected at construction and seedable, so draw
//! sequences are reproducible in tests while production sessions seed from
//! entropy.

use crate::core::catalog::PieceCatalog;
use crate::types::{PieceKind, HISTORY_LEN, LOOKAHEAD_CAP, LOOKAHEAD_MIN};
use arrayvec::ArrayVec;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::trace;

/// Weighted piece sequencer with lookahead.
///
/// The lookahead ring always holds at least [`LOOKAHEAD_MIN`] pieces after
/// any consuming or peeking operation completes; it is refilled lazily,
/// never proactively beyond what a peek requests.
#[derive(Debug, Clone)]
pub struct BrickSequencer<R: RngCore> {
    catalog: PieceCatalog,
    /// Lookahead ring buffer, valid slots are `head..head+len` (mod cap).
    queue: [PieceKind; LOOKAHEAD_CAP],
    head: usize,
    len: usize,
    /// Sliding window over the last two generated pieces. The ring is FIFO,
    /// so generation order equals dispatch order and the streak rule holds
    /// for the dispatched stream as well.
    history: [Option<PieceKind>; HISTORY_LEN],
    rng: R,
}

impl BrickSequencer<Xoshiro256PlusPlus> {
    /// Create a sequencer with the standard catalog and a deterministic seed.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(PieceCatalog::standard(), Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    /// Create a sequencer seeded from OS entropy (production sessions).
    pub fn from_entropy() -> Self {
        Self::with_rng(PieceCatalog::standard(), Xoshiro256PlusPlus::from_entropy())
    }
}

impl<R: RngCore> BrickSequencer<R> {
    /// Create a sequencer with an explicit catalog and randomness source.
    pub fn with_rng(catalog: PieceCatalog, rng: R) -> Self {
        let mut sequencer = Self {
            catalog,
            queue: [PieceKind::I; LOOKAHEAD_CAP],
            head: 0,
            len: 0,
            history: [None; HISTORY_LEN],
            rng,
        };
        sequencer.fill_to(LOOKAHEAD_MIN);
        sequencer
    }

    /// The catalog this sequencer draws from.
    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    /// Number of pieces currently buffered.
    pub fn lookahead_len(&self) -> usize {
        self.len
    }

    /// Remove and return the next piece.
    ///
    /// Total: the ring is topped back up to [`LOOKAHEAD_MIN`] before
    /// returning, so a head always exists for the next call.
    pub fn next_piece(&mut self) -> PieceKind {
        let piece = self.pop_front();
        if self.len < LOOKAHEAD_MIN {
            self.fill_to(LOOKAHEAD_MIN);
        }
        piece
    }

    /// The next piece, without consuming it.
    pub fn peek_next(&self) -> PieceKind {
        self.queue[self.head]
    }

    /// The piece at zero-based `index` in the lookahead, without consuming
    /// anything. Grows the ring by sampling until the element exists.
    /// `peek_at(0)` is equivalent to [`peek_next`](Self::peek_next).
    ///
    /// Indices are clamped to the ring capacity.
    pub fn peek_at(&mut self, index: usize) -> PieceKind {
        let index = index.min(LOOKAHEAD_CAP - 1);
        if self.len <= index {
            self.fill_to(index + 1);
        }
        self.queue[(self.head + index) % LOOKAHEAD_CAP]
    }

    /// Bounded preview of the upcoming pieces, in dispatch order.
    pub fn preview(&mut self, count: usize) -> ArrayVec<PieceKind, LOOKAHEAD_CAP> {
        let count = count.min(LOOKAHEAD_CAP);
        if self.len < count {
            self.fill_to(count);
        }
        let mut out = ArrayVec::new();
        for i in 0..count {
            out.push(self.queue[(self.head + i) % LOOKAHEAD_CAP]);
        }
        out
    }

    /// Sample one piece under the streak rule and record it in the history
    /// window.
    fn generate(&mut self) -> PieceKind {
        let exclude_i =
            self.history == [Some(PieceKind::I), Some(PieceKind::I)];
        let piece = self.catalog.sample(&mut self.rng, exclude_i);

        self.history[0] = self.history[1];
        self.history[1] = Some(piece);
        piece
    }

    /// Grow the ring until it holds at least `target` pieces.
    fn fill_to(&mut self, target: usize) {
        let target = target.min(LOOKAHEAD_CAP);
        while self.len < target {
            let piece = self.generate();
            self.push_back(piece);
        }
        trace!(len = self.len, "lookahead refilled");
    }

    fn push_back(&mut self, piece: PieceKind) {
        debug_assert!(self.len < LOOKAHEAD_CAP);
        self.queue[(self.head + self.len) % LOOKAHEAD_CAP] = piece;
        self.len += 1;
    }

    fn pop_front(&mut self) -> PieceKind {
        debug_assert!(self.len > 0);
        let piece = self.queue[self.head];
        self.head = (self.head + 1) % LOOKAHEAD_CAP;
        self.len -= 1;
        piece
    }
}

impl Default for BrickSequencer<Xoshiro256PlusPlus> {
    fn default() -> Self {
        Self::new(1)
    }
}
