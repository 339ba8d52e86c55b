/*
verifier.rs

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

//! Verify that words are present in a finished grid, and regenerate the grid until they are.

use log::{debug, warn};
use std::collections::HashSet;
use std::fmt;

use super::builder::{GeneratedGrid, GridBuilder, normalize_word, normalize_words};
use super::direction::Direction;
use super::grid::{Grid, Position};
use super::rng::SeededRng;
use crate::options::GeneratorOptions;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GenerationError {
    /// Some words were still missing after the last whole-grid attempt.
    MissingWords {
        attempts: usize,
        missing: Vec<String>,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerationError::MissingWords { attempts, missing } => write!(
                f,
                "Cannot place all the words after {attempts} attempts (missing: {})",
                missing.join(", ")
            ),
        }
    }
}

impl std::error::Error for GenerationError {}

/// Return the words from `words` that can be read somewhere in the grid, in any of the eight
/// directions.
///
/// Every cell is a starting point for the four scan directions. Each prefix of the letters read
/// that way is compared to the words, both as read and reversed, which covers the four opposite
/// directions.
/// The words are compared after normalization (see [`normalize_word`]), and the returned words
/// are normalized.
pub fn find_words<S: AsRef<str>>(grid: &Grid, words: &[S]) -> HashSet<String> {
    let wanted: HashSet<String> = words.iter().map(|w| normalize_word(w.as_ref())).collect();
    let max_len: usize = wanted.iter().map(|w| w.len()).max().unwrap_or(0);
    let mut found: HashSet<String> = HashSet::new();
    let size: usize = grid.size();

    for row in 0..size {
        for col in 0..size {
            for direction in Direction::SCAN {
                let mut candidate: String = String::with_capacity(max_len);
                let mut i: usize = 0;
                while candidate.len() < max_len {
                    let letter: u8 = match Position::new(row, col)
                        .offset(direction, i)
                        .and_then(|pos| grid.get(pos))
                    {
                        Some(l) => l,
                        None => break,
                    };
                    candidate.push(char::from(letter));
                    i += 1;

                    if wanted.contains(candidate.as_str()) {
                        found.insert(candidate.clone());
                    }
                    let reversed: String = candidate.chars().rev().collect();
                    if wanted.contains(reversed.as_str()) {
                        found.insert(reversed);
                    }
                }
            }
        }
    }
    found
}

/// Return the words that cannot be found in the grid, normalized, in the order of `words`.
pub fn missing_words<S: AsRef<str>>(grid: &Grid, words: &[S]) -> Vec<String> {
    let found: HashSet<String> = find_words(grid, words);
    words
        .iter()
        .map(|w| normalize_word(w.as_ref()))
        .filter(|w| !found.contains(w))
        .collect()
}

/// Whether every word in `required` can be found in the grid. The comparison ignores case.
pub fn verify<S: AsRef<str>>(grid: &Grid, required: &[S]) -> bool {
    missing_words(grid, required).is_empty()
}

/// Generate grids until every word is placed, up to `max_grid_attempts` grids.
/// At least one grid is always generated.
///
/// All the attempts draw from the same generator, created from `seed`, so each attempt gives a
/// different grid and the final result is still reproducible.
/// Words that are dropped by normalization are not required.
///
/// # Errors
///
/// The method returns an error when the words are still not all in the grid after the last
/// attempt.
pub fn generate_verified<S: AsRef<str>>(
    words: &[S],
    seed: &str,
    options: &GeneratorOptions,
    max_grid_attempts: usize,
) -> Result<GeneratedGrid, GenerationError> {
    let words: Vec<String> = normalize_words(words);
    let builder: GridBuilder = GridBuilder::new(options);
    let mut rng: SeededRng = SeededRng::from_seed(seed);
    let mut missing: Vec<String> = words.clone();
    let max_grid_attempts: usize = max_grid_attempts.max(1);

    for attempt in 1..=max_grid_attempts {
        let (grid, placements) = builder.build(&words, &mut rng);
        let placed_words: Vec<String> = placements.iter().map(|p| p.word.clone()).collect();

        missing = words
            .iter()
            .filter(|w| !placed_words.contains(*w))
            .cloned()
            .collect();
        if missing.is_empty() {
            missing = missing_words(&grid, &words);
        }
        if missing.is_empty() {
            debug!(
                "Grid generation: seed = {seed}  attempt = {attempt}  placed list = {}",
                placed_words.join(", ")
            );
            return Ok(GeneratedGrid {
                seed: seed.to_string(),
                size: grid.size(),
                grid,
                placed_words,
                placements,
            });
        }
        debug!(
            "Attempt {attempt} to create a valid grid failed, missing: {}",
            missing.join(", ")
        );
    }

    warn!(
        "Cannot place all the words after {max_grid_attempts} attempts (seed {seed})"
    );
    Err(GenerationError::MissingWords {
        attempts: max_grid_attempts,
        missing,
    })
}
