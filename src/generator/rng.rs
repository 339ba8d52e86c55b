/*
rng.rs

Copyright 2025 The Wordhunt Authors

This file is part of Wordhunt.

Wordhunt is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordhunt is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordhunt. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Seeded pseudorandom generator.
//!
//! A 64-bit linear congruential generator: `state = A * state + C (mod 2^64)`.
//! The output stream is a pure function of the seed, so the same seed always produces the same
//! grid.
//! It is not suitable for anything that needs unpredictable numbers.

/// LCG multiplier.
const MULTIPLIER: u64 = 6364136223846793005;

/// LCG increment.
const INCREMENT: u64 = 1442695040888963407;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Largest `f64` strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Convert a seed string to the initial generator state.
///
/// An optional `0x` prefix is ignored.
/// A string of hexadecimal digits is read as a number and reduced modulo 2^64, so only its last
/// 16 digits matter.
/// Any other string (empty, or with non-hexadecimal characters) is hashed with 64-bit FNV-1a.
pub fn seed_state(seed: &str) -> u64 {
    let digits: &str = seed
        .strip_prefix("0x")
        .or_else(|| seed.strip_prefix("0X"))
        .unwrap_or(seed);

    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        let start: usize = digits.len().saturating_sub(16);
        if let Ok(v) = u64::from_str_radix(&digits[start..], 16) {
            return v;
        }
    }

    seed.bytes().fold(FNV_OFFSET_BASIS, |hash, b| {
        (hash ^ b as u64).wrapping_mul(FNV_PRIME)
    })
}

/// Map a state to `[0, 1)`.
fn unit(state: u64) -> f64 {
    // u64::MAX rounds up to 2^64 as a float, and so do states close to it
    (state as f64 / u64::MAX as f64).min(BELOW_ONE)
}

/// Deterministic random number generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from a raw initial state.
    pub fn new(state: u64) -> Self {
        Self { state }
    }

    /// Create a generator from a seed string. See [`seed_state`].
    pub fn from_seed(seed: &str) -> Self {
        Self::new(seed_state(seed))
    }

    /// Advance the generator and return the new state.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    /// Return a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        unit(self.next_u64())
    }

    /// Return an integer in `[0, max)`, or 0 when `max` is 0.
    pub fn random_int(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        let v: usize = (self.next_f64() * max as f64).floor() as usize;
        v.min(max - 1)
    }

    /// Fisher-Yates shuffle of the slice, in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j: usize = self.random_int(i + 1);
            items.swap(i, j);
        }
    }

    /// Return a shuffled copy of the slice.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut v: Vec<T> = items.to_vec();
        self.shuffle(&mut v);
        v
    }
}
