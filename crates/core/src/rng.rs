//! RNG module - piece triplet generation
//!
//! Each generated piece draws its shape uniformly from the ten-shape catalog
//! and its color uniformly from the six-color palette. Triplets are not
//! checked against the board; the stuck check decides whether they fit.
//!
//! Also provides a simple LCG so a game can be replayed from its seed.

use arrayvec::ArrayVec;

use crate::pieces::{Piece, PieceId};
use crate::types::{BlockColor, ShapeKind, PIECES_PER_SET};

/// The pieces currently offered to the player (at most three, in order)
pub type PieceSet = ArrayVec<Piece, PIECES_PER_SET>;

/// A source of uniformly distributed 32-bit values
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle quickly; use the high half.
        self.state >> 16
    }
}

/// Triplet generator
#[derive(Debug, Clone)]
pub struct PieceGenerator<R = SimpleRng> {
    rng: R,
    /// Id handed to the next generated piece
    next_id: u32,
}

impl PieceGenerator<SimpleRng> {
    /// Create a generator seeded with the given value
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> PieceGenerator<R> {
    /// Create a generator over any random source
    pub fn with_source(rng: R) -> Self {
        Self { rng, next_id: 1 }
    }

    /// Generate a single piece with a fresh id
    pub fn next_piece(&mut self) -> Piece {
        let kind = ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let color = BlockColor::ALL[self.rng.next_range(BlockColor::ALL.len() as u32) as usize];
        let id = PieceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        Piece::new(id, kind, color)
    }

    /// Generate a full set of three pieces
    pub fn triplet(&mut self) -> PieceSet {
        let mut set = PieceSet::new();
        for _ in 0..PIECES_PER_SET {
            set.push(self.next_piece());
        }
        set
    }

    /// Draw an index in [0, max) from the same stream (feedback phrases)
    pub fn roll(&mut self, max: u32) -> u32 {
        self.rng.next_range(max)
    }

    /// Id the next generated piece will receive
    pub fn peek_id(&self) -> PieceId {
        PieceId(self.next_id)
    }

    /// Continue numbering after `last` (used when a game is built from parts)
    pub fn skip_past(&mut self, last: PieceId) {
        if last.0 >= self.next_id {
            self.next_id = last.0.wrapping_add(1);
        }
    }
}

impl Default for PieceGenerator<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed sequence of values
    struct Scripted {
        values: Vec<u32>,
        pos: usize,
    }

    impl RandomSource for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(10) < 10);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_triplet_has_three_pieces_with_fresh_ids() {
        let mut gen = PieceGenerator::new(99);
        let first = gen.triplet();
        let second = gen.triplet();

        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);

        let ids: Vec<u32> = first.iter().chain(second.iter()).map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_scripted_source_selects_shape_then_color() {
        // shape index 8 (Block), color index 2 (Lime), then shape 0 (Dot), color 5 (Yellow)
        let mut gen = PieceGenerator::with_source(Scripted {
            values: vec![8, 2, 0, 5],
            pos: 0,
        });
        let a = gen.next_piece();
        let b = gen.next_piece();
        assert_eq!((a.kind, a.color), (ShapeKind::Block, BlockColor::Lime));
        assert_eq!((b.kind, b.color), (ShapeKind::Dot, BlockColor::Yellow));
    }

    #[test]
    fn test_every_shape_and_color_eventually_drawn() {
        let mut gen = PieceGenerator::new(2024);
        let mut kinds = [false; 10];
        let mut colors = [false; 6];
        for _ in 0..600 {
            let p = gen.next_piece();
            kinds[ShapeKind::ALL.iter().position(|k| *k == p.kind).unwrap()] = true;
            colors[p.color.index()] = true;
        }
        assert!(kinds.iter().all(|&seen| seen));
        assert!(colors.iter().all(|&seen| seen));
    }

    #[test]
    fn test_skip_past_keeps_ids_unique() {
        let mut gen = PieceGenerator::new(1);
        gen.skip_past(PieceId(40));
        assert_eq!(gen.next_piece().id, PieceId(41));

        // Never moves backwards.
        gen.skip_past(PieceId(3));
        assert_eq!(gen.peek_id(), PieceId(42));
    }
}
