//! Deterministic random source for the simulation.
//!
//! Park–Miller minimal standard LCG: `state = state * 48271 mod (2^31 - 1)`.
//! One instance is owned by the simulation and threaded through every
//! decision, so a fixed seed replays the same run.

use granule_core::constants::{RNG_MODULUS, RNG_MULTIPLIER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimRng {
    state: u64,
}

impl SimRng {
    /// Seeds are folded into `[1, 2^31 - 2]`; a zero seed becomes `2^31 - 2`.
    pub fn new(seed: u64) -> Self {
        let mut state = seed % RNG_MODULUS;
        if state == 0 {
            state = RNG_MODULUS - 1;
        }
        Self { state }
    }

    /// Advance the generator and return the raw 31-bit state.
    pub fn next_u31(&mut self) -> u32 {
        self.state = self.state * RNG_MULTIPLIER % RNG_MODULUS;
        self.state as u32
    }

    /// Value in `[0, n)`. `n == 0` is treated as 1.
    pub fn next_bounded(&mut self, n: u32) -> u32 {
        self.next_u31() % n.max(1)
    }

    /// True with probability `1 / n`.
    pub fn one_in(&mut self, n: u32) -> bool {
        self.next_bounded(n) == 0
    }

    /// Uniform pick from `items`. Consumes no randomness when empty.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.next_bounded(items.len() as u32) as usize])
    }

    /// Fisher–Yates shuffle of `0..n`.
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        for i in (1..n).rev() {
            let j = self.next_bounded(i as u32 + 1) as usize;
            order.swap(i, j);
        }
        order
    }
}
