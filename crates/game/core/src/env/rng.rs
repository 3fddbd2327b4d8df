//! Seeded deterministic random number generation.
//!
//! Every draw is a pure function of `(seed, counter)`: the same pair always
//! yields the same value, so a full game can be replayed from its seed and
//! action log. Draws never mutate in place; each one returns the value
//! together with the advanced [`RngState`], and the caller threads that state
//! forward. There is no hidden global counter.

/// RNG state tracked in game state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RngState {
    pub seed: u32,
    pub counter: u32,
}

impl RngState {
    /// Creates a fresh stream at counter zero.
    pub const fn new(seed: u32) -> Self {
        Self { seed, counter: 0 }
    }

    /// Mulberry32 output function. Returns a value in `[0, 1)`.
    #[inline]
    fn mulberry32(input: u32) -> f64 {
        let mut t = input.wrapping_add(0x6d2b_79f5);
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Draws the next uniform value in `[0, 1)`.
    #[must_use]
    pub fn next_random(self) -> (f64, Self) {
        let counter = self.counter.wrapping_add(1);
        let value = Self::mulberry32(self.seed.wrapping_add(counter));
        (
            value,
            Self {
                seed: self.seed,
                counter,
            },
        )
    }

    /// Draws an integer in `[min, max]` inclusive.
    ///
    /// An empty range (`max < min`) returns `min` without consuming a draw.
    #[must_use]
    pub fn random_int(self, min: i64, max: i64) -> (i64, Self) {
        if max < min {
            return (min, self);
        }
        let (value, next) = self.next_random();
        // i128 holds the full i64 span; the clamp absorbs float rounding near 1.0
        let (min, max) = (i128::from(min), i128::from(max));
        let offset = (value * (max - min + 1) as f64).floor() as i128;
        ((min + offset).min(max) as i64, next)
    }

    /// Draws an index in `[0, len)`. `len` must be non-zero.
    fn random_index(self, len: usize) -> (usize, Self) {
        let (value, next) = self.next_random();
        let index = (value * len as f64).floor() as usize;
        // value < 1.0 keeps index < len; clamp guards float edge cases
        (index.min(len - 1), next)
    }

    /// Fisher–Yates shuffle. The source slice is left untouched.
    #[must_use]
    pub fn shuffle<T: Clone>(self, items: &[T]) -> (Vec<T>, Self) {
        let mut result = items.to_vec();
        let mut rng = self;
        for i in (1..result.len()).rev() {
            let (j, next) = rng.random_index(i + 1);
            rng = next;
            result.swap(i, j);
        }
        (result, rng)
    }

    /// Picks a uniform element. An empty source yields `None` and leaves the
    /// stream where it was.
    #[must_use]
    pub fn pick<T>(self, items: &[T]) -> (Option<&T>, Self) {
        if items.is_empty() {
            return (None, self);
        }
        let (index, next) = self.random_index(items.len());
        (items.get(index), next)
    }
}
