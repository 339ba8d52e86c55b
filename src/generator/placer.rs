/*
placer.rs

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

//! Place one word in the grid.
//!
//! The placer draws random origins and directions until the word fits, or until its attempt
//! budget is spent. Failing to place a word is not an error: the caller decides what to do with
//! a grid that misses some words.

use log::debug;

use super::direction::Direction;
use super::grid::{Grid, Placement, Position};
use super::rng::SeededRng;

/// [`WordPlacer`] object.
#[derive(Debug, Clone, Copy)]
pub struct WordPlacer {
    /// Number of random (origin, direction) draws before giving up on a word.
    pub max_attempts: usize,
}

impl WordPlacer {
    /// Create the object.
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Whether the word can be written from `origin` along `direction`.
    ///
    /// Every letter must land inside the grid, on a cell that is either empty or already holds
    /// that same letter (words can cross on a shared letter).
    pub fn can_place(
        &self,
        word: &[u8],
        origin: Position,
        direction: Direction,
        grid: &Grid,
    ) -> bool {
        word.iter().enumerate().all(|(i, letter)| {
            match origin.offset(direction, i) {
                Some(pos) if grid.contains(pos) => match grid.get(pos) {
                    None => true,
                    Some(existing) => existing == *letter,
                },
                _ => false,
            }
        })
    }

    /// Write the word into the grid. The caller must have checked [`WordPlacer::can_place`].
    pub fn place(&self, word: &[u8], origin: Position, direction: Direction, grid: &mut Grid) {
        for (i, letter) in word.iter().enumerate() {
            if let Some(pos) = origin.offset(direction, i) {
                grid.set(pos, *letter);
            }
        }
    }

    /// Try to place the word at a random position.
    ///
    /// The eight directions are shuffled first, then each attempt draws a row, a column, and a
    /// direction from the shuffled list.
    /// Return the placement on success, or None when the attempt budget is exhausted, in which
    /// case the grid is left untouched.
    pub fn attempt_placement(
        &self,
        word: &str,
        grid: &mut Grid,
        rng: &mut SeededRng,
    ) -> Option<Placement> {
        let letters: &[u8] = word.as_bytes();
        let directions: Vec<Direction> = rng.shuffled(&Direction::ALL);
        let size: usize = grid.size();

        for attempt in 0..self.max_attempts {
            let row: usize = rng.random_int(size);
            let col: usize = rng.random_int(size);
            let direction: Direction = directions[rng.random_int(directions.len())];
            let origin: Position = Position::new(row, col);

            if self.can_place(letters, origin, direction, grid) {
                self.place(letters, origin, direction, grid);
                debug!("Placed {word} at {origin} going {direction} (attempt {attempt})");
                return Some(Placement {
                    word: word.to_string(),
                    origin,
                    direction,
                });
            }
        }
        debug!(
            "Cannot place {word} after {} attempts",
            self.max_attempts
        );
        None
    }
}
