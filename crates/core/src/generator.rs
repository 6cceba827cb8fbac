//! Generator module - brick sequences with one brick of lookahead
//!
//! A [`BrickGenerator`] hands out the brick to spawn next and lets callers
//! preview the one after it. Every `get_brick` call advances the sequence by
//! exactly one.
//!
//! Two randomizers are provided, both driven by a small seeded LCG so the same
//! seed always replays the same game:
//!
//! - [`RandomBrickGenerator`]: uniform, independent draws
//! - [`BagBrickGenerator`]: "7-bag", each run of seven holds every kind once
//!
//! [`FixedBrickGenerator`] repeats one brick forever, for scripted play.

use std::collections::VecDeque;

use crate::bricks::Brick;
use crate::types::BrickKind;

/// Source of bricks for the board.
pub trait BrickGenerator: std::fmt::Debug {
    /// Take the next brick, advancing the sequence.
    fn get_brick(&mut self) -> Brick;

    /// Preview the brick the following `get_brick` call returns.
    fn next_brick(&self) -> &Brick;
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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current state, usable as a seed to replay from here.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random generator with a lookahead queue
#[derive(Debug, Clone)]
pub struct RandomBrickGenerator {
    rng: SimpleRng,
    queue: VecDeque<Brick>,
}

impl RandomBrickGenerator {
    pub fn new(seed: u32) -> Self {
        let mut generator = Self {
            rng: SimpleRng::new(seed),
            queue: VecDeque::with_capacity(2),
        };
        generator.fill();
        generator
    }

    fn draw_kind(&mut self) -> BrickKind {
        let idx = self.rng.next_range(BrickKind::ALL.len() as u32) as usize;
        BrickKind::ALL[idx]
    }

    /// Keep two bricks queued: the one to hand out and the preview.
    fn fill(&mut self) {
        while self.queue.len() < 2 {
            let kind = self.draw_kind();
            self.queue.push_back(Brick::tetromino(kind));
        }
    }
}

impl BrickGenerator for RandomBrickGenerator {
    fn get_brick(&mut self) -> Brick {
        self.fill();
        let brick = self
            .queue
            .pop_front()
            .unwrap_or_else(|| Brick::tetromino(BrickKind::I));
        self.fill();
        brick
    }

    fn next_brick(&self) -> &Brick {
        &self.queue[0]
    }
}

/// 7-bag generator
#[derive(Debug, Clone)]
pub struct BagBrickGenerator {
    rng: SimpleRng,
    /// Current bag followed by the next one once the current runs low
    queue: VecDeque<BrickKind>,
    preview: Brick,
}

impl BagBrickGenerator {
    pub fn new(seed: u32) -> Self {
        let mut generator = Self {
            rng: SimpleRng::new(seed),
            queue: VecDeque::with_capacity(14),
            preview: Brick::tetromino(BrickKind::I),
        };
        generator.refill();
        generator
    }

    /// Append shuffled bags so the queue never runs dry.
    fn refill(&mut self) {
        while self.queue.len() < 2 {
            let mut bag = BrickKind::ALL;
            self.rng.shuffle(&mut bag);
            self.queue.extend(bag);
        }
        self.preview = Brick::tetromino(self.queue[0]);
    }

    /// Upcoming kinds without consuming them, the previewed brick first.
    pub fn peek_kinds(&self, count: usize) -> Vec<BrickKind> {
        self.queue.iter().copied().take(count).collect()
    }
}

impl BrickGenerator for BagBrickGenerator {
    fn get_brick(&mut self) -> Brick {
        let kind = self.queue.pop_front().unwrap_or(BrickKind::I);
        self.refill();
        Brick::tetromino(kind)
    }

    fn next_brick(&self) -> &Brick {
        &self.preview
    }
}

/// Always yields the same brick.
#[derive(Debug, Clone)]
pub struct FixedBrickGenerator {
    brick: Brick,
}

impl FixedBrickGenerator {
    pub fn new(brick: impl Into<Brick>) -> Self {
        Self {
            brick: brick.into(),
        }
    }
}

impl BrickGenerator for FixedBrickGenerator {
    fn get_brick(&mut self) -> Brick {
        self.brick.clone()
    }

    fn next_brick(&self) -> &Brick {
        &self.brick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_random_preview_matches_next_draw() {
        let mut generator = RandomBrickGenerator::new(42);
        for _ in 0..50 {
            let previewed = generator.next_brick().clone();
            assert_eq!(generator.get_brick(), previewed);
        }
    }

    #[test]
    fn test_random_same_seed_same_sequence() {
        let mut a = RandomBrickGenerator::new(99);
        let mut b = RandomBrickGenerator::new(99);
        for _ in 0..30 {
            assert_eq!(a.get_brick().kind(), b.get_brick().kind());
        }
    }

    #[test]
    fn test_random_eventually_yields_every_kind() {
        let mut generator = RandomBrickGenerator::new(3);
        let mut seen = Vec::new();
        for _ in 0..500 {
            if let Some(kind) = generator.get_brick().kind() {
                if !seen.contains(&kind) {
                    seen.push(kind);
                }
            }
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_bag_draws_all_seven() {
        let mut generator = BagBrickGenerator::new(1);

        let mut drawn = Vec::new();
        for _ in 0..7 {
            drawn.push(generator.get_brick().kind().unwrap());
        }

        for kind in BrickKind::ALL {
            assert!(drawn.contains(&kind), "Missing brick: {:?}", kind);
        }
    }

    #[test]
    fn test_bag_preview_crosses_bag_boundary() {
        let mut generator = BagBrickGenerator::new(5);
        for _ in 0..20 {
            let previewed = generator.next_brick().kind();
            assert_eq!(generator.get_brick().kind(), previewed);
        }
    }

    #[test]
    fn test_bag_peek_kinds() {
        let generator = BagBrickGenerator::new(1);
        let kinds = generator.peek_kinds(3);
        assert_eq!(kinds.len(), 3);
        assert_eq!(Some(kinds[0]), generator.next_brick().kind());
    }

    #[test]
    fn test_fixed_generator_repeats() {
        let mut generator = FixedBrickGenerator::new(BrickKind::O);
        assert_eq!(generator.get_brick().kind(), Some(BrickKind::O));
        assert_eq!(generator.get_brick().kind(), Some(BrickKind::O));
        assert_eq!(generator.next_brick().kind(), Some(BrickKind::O));
    }
}
