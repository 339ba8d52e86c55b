/*
generator.rs

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

//! Generate word search grids.
//!
//! A grid is generated from a list of words, a size, and a seed.
//! The same inputs always give the same grid: the only source of randomness is a
//! [`rng::SeededRng`] object created from the seed.
//!
//! * A [`builder::GridBuilder`] object places the words one after the other with a
//!   [`placer::WordPlacer`] object.
//!   A word that does not fit after a fixed number of random attempts is skipped.
//!   The remaining cells are then filled with random letters.
//!   [`builder::generate_grid`] wraps these steps and returns a [`builder::GeneratedGrid`]
//!   object, which lists the words that were placed and where.
//!
//! * When every word must be in the grid, [`verifier::generate_verified`] builds whole grids
//!   again until [`verifier::verify`] confirms that all the words are present, or returns an
//!   error after too many attempts.
//!
//! [`generate`] selects between these two behaviors according to the
//! [`crate::options::PlacementPolicy`] option.

pub mod builder;
pub mod direction;
pub mod grid;
pub mod placer;
pub mod rng;
pub mod verifier;

use crate::options::{GeneratorOptions, PlacementPolicy};
use builder::GeneratedGrid;
use verifier::GenerationError;

/// Generate a grid according to the options.
///
/// # Errors
///
/// With the [`PlacementPolicy::RequireAll`] policy, the function returns an error when some words
/// are still missing after the last attempt. It never fails with [`PlacementPolicy::BestEffort`].
pub fn generate<S: AsRef<str>>(
    words: &[S],
    seed: &str,
    options: &GeneratorOptions,
) -> Result<GeneratedGrid, GenerationError> {
    match options.policy {
        PlacementPolicy::BestEffort => Ok(builder::generate_grid_with(words, seed, options)),
        PlacementPolicy::RequireAll { max_grid_attempts } => {
            verifier::generate_verified(words, seed, options, max_grid_attempts)
        }
    }
}
